//! Terminal helpers.

pub mod input;
