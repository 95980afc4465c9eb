pub mod analysis;
pub mod client;
pub mod schema;
pub mod types;

pub use analysis::GeminiAnalysisClient;
