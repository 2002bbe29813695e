use std::time::Duration;

use folio_common::profile::Profile;
use folio_core::Portfolio;
use folio_core::ports::JokeSource;
use folio_core::testing::{CannedJokes, RecordingScreen, ScriptedPrompter};

pub type TestSession<J> = Portfolio<'static, ScriptedPrompter, RecordingScreen, J>;

pub fn session_with<J: JokeSource>(prompter: ScriptedPrompter, jokes: J) -> TestSession<J> {
    colored_off();
    Portfolio::new(
        Profile::builtin(),
        prompter,
        RecordingScreen::default(),
        jokes,
        Duration::ZERO,
    )
}

pub fn session(prompter: ScriptedPrompter) -> TestSession<CannedJokes> {
    session_with(
        prompter,
        CannedJokes::joke("Why do programmers prefer dark mode?", "Because light attracts bugs."),
    )
}

fn colored_off() {
    folio_core::testing::plain_output();
}

/// Byte offset of `needle` in `haystack`, panicking with context if absent.
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in output:\n{haystack}"))
}
