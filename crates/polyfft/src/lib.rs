//! polyfft library: application logic for the polynomial multiplier CLI.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
