use std::cell::RefCell;
use std::time::Duration;

use colored::*;
use folio_core::ports::{Outcome, Screen};
use folio_core::terminal::colors;
use indicatif::{ProgressBar, ProgressStyle};

const TICK_RATE: Duration = Duration::from_millis(100);
const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

/// Writes to stdout, routing lines through the active spinner so they do
/// not get overdrawn.
#[derive(Default)]
pub struct TerminalScreen {
    active: RefCell<Option<ProgressBar>>,
}

impl Screen for TerminalScreen {
    fn println(&self, line: &str) {
        match self.active.borrow().as_ref() {
            Some(pb) => pb.println(line),
            None => println!("{line}"),
        }
    }

    fn spinner_start(&self, msg: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(spinner_style());
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(TICK_RATE);

        if let Some(previous) = self.active.replace(Some(pb)) {
            previous.finish_and_clear();
        }
    }

    fn spinner_stop(&self, outcome: Outcome, msg: &str) {
        if let Some(pb) = self.active.take() {
            pb.finish_and_clear();
        }
        let (mark, color) = match outcome {
            Outcome::Success => ("✔", colors::SUCCESS),
            Outcome::Failure => ("✖", colors::FAILURE),
        };
        println!("{} {}", mark.color(color).bold(), msg.color(color));
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        if let Some(pb) = self.active.get_mut().take() {
            pb.finish_and_clear();
        }
    }
}
