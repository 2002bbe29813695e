pub mod colors;
pub mod format;
