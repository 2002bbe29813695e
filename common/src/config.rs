use std::time::Duration;

/// Public endpoint serving one random programming joke per request.
pub const DEFAULT_JOKE_URL: &str = "https://official-joke-api.appspot.com/jokes/programming/random";

/// Pause inserted between paced messages and after every menu action.
pub const DEFAULT_PACING: Duration = Duration::from_millis(DEFAULT_PACE_MS);
pub const DEFAULT_PACE_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Skips the welcome animation and the ASCII banner.
    pub no_banner: bool,
    /// Cosmetic delay. Only affects readability pacing, never correctness.
    ///
    /// `Duration::ZERO` disables every pause.
    pub pacing: Duration,
    /// Endpoint queried by the joke fetcher.
    pub joke_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            pacing: DEFAULT_PACING,
            joke_url: DEFAULT_JOKE_URL.to_string(),
        }
    }
}
