//! ANSI-safe text measurement and truncation.

pub mod ansi;
pub mod utils;
pub mod width;
