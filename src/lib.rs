//! AceCoach - AI tennis technique analysis from short videos
//!
//! Encodes an uploaded video, sends it to Gemini with a fixed coaching
//! prompt and a declared JSON response schema, and decodes the structured
//! verdict into a report with score, breakdown, and drill recommendation.

pub mod ai;
pub mod app;
pub mod error;
pub mod media;
pub mod models;
pub mod prompts;
pub mod report;
pub mod session;

pub use error::{Error, Result};
