// file: src/pipeline/progress.rs
// description: progress display and run statistics for the sequential pipelines
// reference: uses indicatif for progress bars

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub versions_processed: usize,
    pub versions_skipped: usize,
    pub documents_parsed: usize,
    pub documents_skipped: usize,
    pub records_extracted: usize,
    pub duration_secs: f64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn versions_total(&self) -> usize {
        self.versions_processed + self.versions_skipped
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.versions_total();
        if total == 0 {
            return 0.0;
        }
        (self.versions_processed as f64 / total as f64) * 100.0
    }
}

/// Progress display over the version list. The pipelines are single-threaded,
/// so plain counters behind `&mut self` are all the bookkeeping needed.
pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    stats: RunStats,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_versions: usize) -> Self {
        Self::with_color(total_versions, true)
    }

    pub fn with_color(total_versions: usize, colored: bool) -> Self {
        let multi_progress = MultiProgress::new();
        let main_bar = create_progress_bar(&multi_progress, total_versions as u64, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
            stats: RunStats::new(),
            start_time: Instant::now(),
        }
    }

    pub fn version_processed(&mut self, label: &str) {
        self.stats.versions_processed += 1;
        self.main_bar.inc(1);
        self.main_bar.set_message(label.to_string());
        self.update_detail_bar();
    }

    pub fn version_skipped(&mut self, label: &str) {
        self.stats.versions_skipped += 1;
        self.main_bar.inc(1);
        self.main_bar.set_message(label.to_string());
        self.update_detail_bar();
    }

    pub fn add_documents(&mut self, parsed: usize, skipped: usize) {
        self.stats.documents_parsed += parsed;
        self.stats.documents_skipped += skipped;
    }

    pub fn add_records(&mut self, count: usize) {
        self.stats.records_extracted += count;
    }

    pub fn finish(&mut self) -> RunStats {
        self.main_bar.finish_with_message("done");
        self.detail_bar.finish_and_clear();
        self.stats.duration_secs = self.start_time.elapsed().as_secs_f64();
        self.stats.clone()
    }

    fn update_detail_bar(&self) {
        self.detail_bar.set_message(format!(
            "Records: {} | Documents: {} | Skipped versions: {}",
            self.stats.records_extracted, self.stats.documents_parsed, self.stats.versions_skipped
        ));
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    if colored {
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .expect("Failed to create progress bar template")
                .progress_chars("█▓▒░"),
        );
    } else {
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}")
                .expect("Failed to create progress bar template")
                .progress_chars("=>-"),
        );
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    let style = ProgressStyle::default_bar()
        .template("{msg}")
        .expect("Failed to create detail bar template");
    bar.set_style(style);
    bar
}
