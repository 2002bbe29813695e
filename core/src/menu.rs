//! # Menu Loop
//!
//! Presents the fixed menu, dispatches the chosen handler and comes back for
//! the next selection until the operator picks [`MenuChoice::Exit`].
//!
//! The loop is a small state machine:
//!
//! ```text
//! Idle --select--> Dispatching(choice) --handler done--> Idle
//!                  Dispatching(Exit)   ----------------> Exited
//! ```

use std::fmt;
use std::time::Duration;

use colored::*;
use folio_common::profile::Profile;
use tracing::{debug, info};

use crate::error::PortfolioError;
use crate::handlers::{details, joke, pause, projects, tips};
use crate::ports::{JokeSource, Prompter, Screen};
use crate::terminal::{colors, format};

pub const MENU_PROMPT: &str = "What would you like to explore?";
pub const FAREWELL: &str = "Thank you for exploring my CLI portfolio. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    ViewDetails,
    ShowProjects,
    ShowTip,
    TellJoke,
    Exit,
}

impl MenuChoice {
    /// Every choice in menu order.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::ViewDetails,
        MenuChoice::ShowProjects,
        MenuChoice::ShowTip,
        MenuChoice::TellJoke,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ViewDetails => "View My Details",
            MenuChoice::ShowProjects => "Show My Projects",
            MenuChoice::ShowTip => "Display a Random Coding Tip",
            MenuChoice::TellJoke => "Tell Me a Programming Joke",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn labels() -> [&'static str; 5] {
        Self::ALL.map(Self::label)
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Position in [`MenuChoice::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Dispatching(MenuChoice),
    Exited,
}

/// The interactive session: one profile, one operator, one screen.
pub struct Portfolio<'a, P, S, J> {
    profile: &'a Profile,
    prompter: P,
    screen: S,
    jokes: J,
    pacing: Duration,
    state: LoopState,
}

impl<'a, P, S, J> Portfolio<'a, P, S, J>
where
    P: Prompter,
    S: Screen,
    J: JokeSource,
{
    pub fn new(profile: &'a Profile, prompter: P, screen: S, jokes: J, pacing: Duration) -> Self {
        Self {
            profile,
            prompter,
            screen,
            jokes,
            pacing,
            state: LoopState::Idle,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Runs until the operator exits. Input failures end the loop with an error.
    pub async fn run(&mut self) -> Result<(), PortfolioError> {
        info!(profile = self.profile.name, "menu loop started");
        while self.state != LoopState::Exited {
            self.step().await?;
        }
        info!("menu loop finished");
        Ok(())
    }

    /// One selection and its handler. Returns the state the loop ends up in.
    pub async fn step(&mut self) -> Result<LoopState, PortfolioError> {
        if self.state == LoopState::Exited {
            return Ok(self.state);
        }

        let labels = MenuChoice::labels();
        let idx = self.prompter.select(MENU_PROMPT, &labels)?;
        let choice = MenuChoice::from_index(idx).ok_or(PortfolioError::UnknownChoice(idx))?;
        self.transition(LoopState::Dispatching(choice));

        if choice == MenuChoice::Exit {
            self.farewell();
            self.transition(LoopState::Exited);
            return Ok(self.state);
        }

        self.dispatch(choice).await?;
        self.transition(LoopState::Idle);
        pause(self.pacing).await;
        Ok(self.state)
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> Result<(), PortfolioError> {
        match choice {
            MenuChoice::ViewDetails => details::show_details(self.profile, &self.screen),
            MenuChoice::ShowProjects => {
                projects::browse_projects(self.profile, &mut self.prompter, &self.screen)?;
            }
            MenuChoice::ShowTip => {
                let mut rng = rand::rng();
                tips::show_tip(&self.screen, &mut rng);
            }
            MenuChoice::TellJoke => {
                joke::tell_joke(&self.jokes, &self.screen, self.pacing).await;
            }
            MenuChoice::Exit => {}
        }
        Ok(())
    }

    fn farewell(&self) {
        self.screen.blank();
        self.screen.println(&format::fat_separator());
        self.screen
            .println(&format::centered(&FAREWELL.color(colors::SUCCESS).to_string()));
        self.screen.println(&format::fat_separator());
    }

    fn transition(&mut self, next: LoopState) {
        debug!(from = ?self.state, to = ?next, "menu state change");
        self.state = next;
    }
}
