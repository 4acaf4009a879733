use indicatif::{ProgressBar, ProgressStyle};

pub struct AnalysisProgressBar {
    bar: ProgressBar,
}

impl AnalysisProgressBar {
    pub fn new(num_plies: usize, visible: bool) -> Self {
        if !visible {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::new(num_plies as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} {pos}/{len} [{wide_bar:.cyan/blue}] {eta_precise} | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }

    pub fn update(&self, label: &str) {
        self.bar.set_message(label.to_string());
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
