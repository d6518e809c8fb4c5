//! Library entry point.
//!
//! Integration tests in `tests/` are compiled as separate crates and import
//! the gameplay core from here.

pub mod contact;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod game;
pub mod level;
pub mod movement;
pub mod run;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
