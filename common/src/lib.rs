//! Shared data model for the portfolio CLI.
//!
//! * [`profile`]: the immutable profile and its projects.
//! * [`joke`]: the transient joke payload returned by the joke API.
//! * [`config`]: runtime presentation settings.

pub mod config;
pub mod joke;
pub mod profile;
