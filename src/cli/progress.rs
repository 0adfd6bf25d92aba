use indicatif::ProgressBar;

pub struct FixProgress {
    bar: ProgressBar,
}

impl FixProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            indicatif::ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        bar.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { bar }
    }

    pub fn set_stage(&self, stage: &str) {
        self.bar.set_message(format!("{}...", stage));
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
