pub mod cli;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod keys;
pub mod logging;
pub mod models;
pub mod validation;

pub use error::{Error, Result};

// Declare tests module only when testing
#[cfg(test)]
pub mod tests;
