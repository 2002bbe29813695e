//! # Menu Handlers
//!
//! One module per menu action. Every handler writes to a [`Screen`](crate::ports::Screen)
//! and returns once its work (including any paced output) is done.

pub mod details;
pub mod joke;
pub mod projects;
pub mod tips;

use std::time::Duration;

/// Cosmetic delay. A zero duration returns immediately.
pub async fn pause(pacing: Duration) {
    if !pacing.is_zero() {
        tokio::time::sleep(pacing).await;
    }
}
