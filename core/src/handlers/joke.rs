use std::time::Duration;

use colored::*;
use tracing::debug;

use crate::handlers::pause;
use crate::ports::{JokeSource, Outcome, Screen};
use crate::terminal::colors;

pub const FETCHING_MESSAGE: &str = "Fetching a programming joke...";
pub const READY_MESSAGE: &str = "Here's a programming joke for you!";
pub const FAILURE_MESSAGE: &str = "Failed to fetch a joke. Maybe the server is taking a coffee break!";

/// Fetches one joke and tells it: setup, pause, punchline.
///
/// Never fails. Any fetch error ends the spinner with [`FAILURE_MESSAGE`].
/// Returns whether a joke was delivered.
pub async fn tell_joke<J, S>(jokes: &J, screen: &S, pacing: Duration) -> bool
where
    J: JokeSource + ?Sized,
    S: Screen + ?Sized,
{
    screen.spinner_start(FETCHING_MESSAGE);

    match jokes.fetch_joke().await {
        Ok(joke) => {
            screen.spinner_stop(Outcome::Success, READY_MESSAGE);
            screen.blank();
            screen.println(&joke.setup.color(colors::ACCENT).to_string());
            pause(pacing).await;
            screen.println(&joke.punchline.color(colors::SUCCESS).to_string());
            screen.blank();
            true
        }
        Err(err) => {
            debug!(error = %err, "joke fetch failed");
            screen.spinner_stop(Outcome::Failure, FAILURE_MESSAGE);
            false
        }
    }
}
