//! # Ports
//!
//! Everything the menu loop needs from the outside world. The loop depends on
//! these traits only; the binary provides terminal implementations and the
//! tests provide scripted ones.

use async_trait::async_trait;
use folio_common::joke::Joke;

use crate::error::{JokeError, PortfolioError};

/// How a spinner ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Operator input.
pub trait Prompter {
    /// Single-choice list. Returns the index of the chosen item.
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize, PortfolioError>;

    /// Yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PortfolioError>;
}

/// Operator-facing output.
pub trait Screen {
    fn println(&self, line: &str);

    /// Shows a transient in-progress indicator.
    fn spinner_start(&self, msg: &str);

    /// Replaces the running indicator with a final marker and message.
    fn spinner_stop(&self, outcome: Outcome, msg: &str);

    fn blank(&self) {
        self.println("");
    }
}

#[async_trait]
pub trait JokeSource: Send + Sync {
    async fn fetch_joke(&self) -> Result<Joke, JokeError>;
}
