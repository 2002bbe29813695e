use std::time::Duration;

use clap::{ArgAction, Parser};
use folio_common::config::{Config, DEFAULT_JOKE_URL, DEFAULT_PACE_MS};

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "An interactive CLI portfolio.")]
#[command(version)]
pub struct CommandLine {
    /// Skip the welcome animation and banner
    #[arg(long)]
    pub no_banner: bool,
    /// Cosmetic pause in milliseconds (0 disables every pause)
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_PACE_MS)]
    pub pace: u64,
    /// Endpoint serving programming jokes
    #[arg(long, value_name = "URL", default_value = DEFAULT_JOKE_URL)]
    pub joke_url: String,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            pacing: Duration::from_millis(self.pace),
            joke_url: self.joke_url.clone(),
        }
    }
}
