//! Client modules for external API interactions

pub mod comprehend;

pub use comprehend::{ComprehendDetector, SentimentDetector};
