pub mod banner;
pub mod gradient;
pub mod logging;
pub mod prompt;
pub mod spinner;
