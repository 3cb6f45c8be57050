use std::path::Path;

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::count_of;

const LOADING_TEMPLATE: &str = "{spinner:.cyan} {msg} {wide_bar:.cyan/blue} {pos}/{len} [{elapsed}]";
const SEARCH_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Interactive status output on stderr
pub struct ProgressReporter {
    term: Term,
    bars: MultiProgress,
    active: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            bars: MultiProgress::new(),
            active: None,
        }
    }

    /// A reporter when stderr is an interactive terminal, otherwise `None`
    pub fn for_terminal() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    fn spinner_style(template: &str) -> ProgressStyle {
        let frames: Vec<&str> = SPINNER_FRAMES.iter().copied().chain(["✓"]).collect();
        ProgressStyle::default_spinner()
            .template(template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&frames)
    }

    /// Register `bar` with the reporter and make it the active one
    fn activate(
        &mut self,
        bar: ProgressBar,
        bar_style: ProgressStyle,
        message: &str,
    ) -> ProgressBar {
        let bar = self.bars.add(bar);
        bar.set_style(bar_style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(TICK_INTERVAL);
        self.active = Some(bar.clone());
        bar
    }

    fn clear_active(&mut self) {
        if let Some(bar) = self.active.take() {
            bar.finish_and_clear();
        }
        let _ = self.term.clear_line();
    }

    pub fn start_discovery(&mut self) {
        eprintln!("{} Searching for learning graphs...", style("🔍").cyan());
        self.activate(
            ProgressBar::new_spinner(),
            Self::spinner_style(SEARCH_TEMPLATE),
            "Scanning directories...",
        );
    }

    pub fn scanning_directory(&self, path: &Path) {
        if let Some(bar) = &self.active {
            bar.set_message(format!("Scanning {}", path.display()));
        }
    }

    pub fn finish_discovery(&mut self, count: usize) {
        self.clear_active();
        match count {
            0 => eprintln!("{} No learning graphs found", style("✗").red()),
            n => eprintln!(
                "{} Found {}",
                style("✓").green(),
                style(count_of(n, "learning graph")).yellow().bold()
            ),
        }
    }

    /// Start the loading bar; the caller ticks it once per file
    pub fn start_loading(&mut self, total_graphs: usize) -> ProgressBar {
        self.activate(
            ProgressBar::new(total_graphs as u64),
            Self::spinner_style(LOADING_TEMPLATE).progress_chars("━╸ "),
            "Loading",
        )
    }

    pub fn finish_loading(&mut self) {
        self.clear_active();
    }

    pub fn start_cycle_detection(&self) {
        eprintln!("\n{} Checking prerequisite order...", style("🔄").yellow());
    }

    pub fn finish_cycle_detection(&self, cycles_found: usize) {
        if cycles_found == 0 {
            eprintln!(
                "{} Every graph has a valid learning order {}",
                style("✓").green().bold(),
                style("🎓").dim()
            );
        } else {
            eprintln!(
                "{} Found {}",
                style("⚠").yellow().bold(),
                style(count_of(cycles_found, "prerequisite cycle")).red().bold()
            );
        }
    }
}
