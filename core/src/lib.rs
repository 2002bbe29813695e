//! # Folio Core
//!
//! The interactive part of the portfolio: a menu loop that dispatches one
//! handler per selection until the operator chooses to leave.
//!
//! ## Layout
//! * **[`ports`]**: traits the loop talks through (prompts, screen, joke source).
//!   Adapters for a real terminal live in the binary crate.
//! * **[`menu`]**: the menu choices and the `Idle -> Dispatching -> Idle` loop.
//! * **[`handlers`]**: one module per menu action.
//! * **[`joke_api`]**: the HTTP client behind the joke action.
//! * **[`terminal`]**: color palette and line formatting helpers.

pub mod error;
pub mod handlers;
pub mod joke_api;
pub mod menu;
pub mod ports;
pub mod terminal;

pub use error::{JokeError, PortfolioError};
pub use menu::{LoopState, MenuChoice, Portfolio};

#[cfg(any(test, feature = "testing"))]
pub mod testing;
