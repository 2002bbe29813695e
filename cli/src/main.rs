mod commands;
mod terminal;

use commands::CommandLine;
use folio_common::profile::Profile;
use folio_core::Portfolio;
use folio_core::joke_api::JokeClient;
use terminal::{banner, logging, prompt::DialoguerPrompter, spinner::TerminalScreen};
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = commands.config();
    debug!(?cfg, "configuration loaded");

    let profile = Profile::builtin();

    if !cfg.no_banner {
        banner::welcome(profile, cfg.pacing).await?;
    }

    let mut portfolio = Portfolio::new(
        profile,
        DialoguerPrompter::default(),
        TerminalScreen::default(),
        JokeClient::new(&cfg.joke_url),
        cfg.pacing,
    );
    portfolio.run().await?;

    Ok(())
}
