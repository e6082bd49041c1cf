//! Request-independent building blocks: configuration, models, formatting

pub mod config;
pub mod diagnostics;
pub mod interpretation;
pub mod models;
