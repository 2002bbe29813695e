//! In-memory implementations of the ports, for driving the loop without a terminal.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use folio_common::joke::Joke;
use folio_common::profile::Profile;

use crate::error::{JokeError, PortfolioError};
use crate::ports::{JokeSource, Outcome, Prompter, Screen};

pub const EMPTY_PROFILE: Profile = Profile {
    name: "Test Person",
    role: "Tester",
    technologies: &[],
    github: "https://github.com/test",
    email: "test@example.com",
    hobbies: &[],
    fun_fact: "",
    projects: &[],
};

pub fn plain_output() {
    colored::control::set_override(false);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedEvent {
    Line(String),
    SpinnerStart(String),
    SpinnerStop(Outcome, String),
}

#[derive(Default)]
pub struct RecordingScreen {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingScreen {
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                RecordedEvent::Line(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

impl Screen for RecordingScreen {
    fn println(&self, line: &str) {
        self.events.lock().unwrap().push(RecordedEvent::Line(line.to_string()));
    }

    fn spinner_start(&self, msg: &str) {
        self.events.lock().unwrap().push(RecordedEvent::SpinnerStart(msg.to_string()));
    }

    fn spinner_stop(&self, outcome: Outcome, msg: &str) {
        self.events
            .lock()
            .unwrap()
            .push(RecordedEvent::SpinnerStop(outcome, msg.to_string()));
    }
}

/// Answers prompts from a script. Running out of answers is an input failure.
#[derive(Default)]
pub struct ScriptedPrompter {
    selections: VecDeque<usize>,
    confirms: VecDeque<bool>,
    select_count: usize,
    confirm_count: usize,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selects(mut self, answers: impl IntoIterator<Item = usize>) -> Self {
        self.selections.extend(answers);
        self
    }

    pub fn confirms(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.confirms.extend(answers);
        self
    }

    pub fn select_count(&self) -> usize {
        self.select_count
    }

    pub fn confirm_count(&self) -> usize {
        self.confirm_count
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, _prompt: &str, _items: &[&str]) -> Result<usize, PortfolioError> {
        self.select_count += 1;
        self.selections
            .pop_front()
            .ok_or_else(|| PortfolioError::Input("script exhausted".into()))
    }

    fn confirm(&mut self, _prompt: &str, _default: bool) -> Result<bool, PortfolioError> {
        self.confirm_count += 1;
        self.confirms
            .pop_front()
            .ok_or_else(|| PortfolioError::Input("script exhausted".into()))
    }
}

pub struct CannedJokes(Option<Joke>);

impl CannedJokes {
    pub fn joke(setup: &str, punchline: &str) -> Self {
        Self(Some(Joke::new(setup, punchline)))
    }

    pub fn empty() -> Self {
        Self(None)
    }
}

#[async_trait]
impl JokeSource for CannedJokes {
    async fn fetch_joke(&self) -> Result<Joke, JokeError> {
        self.0.clone().ok_or(JokeError::Empty)
    }
}
