//! AI service integration for video analysis
//!
//! Provides the seam between the application and the hosted model that
//! performs the video understanding, plus a mock implementation for tests.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiAnalysisClient;
pub use mock::MockAnalysisClient;

use crate::media::EncodedMedia;
use crate::models::AnalysisResult;
use crate::Result;
use async_trait::async_trait;

/// One-shot analysis of an encoded video.
///
/// Implementations issue a single request and run it to completion or
/// failure: no retry, no internal deadline, no partial result.
#[async_trait]
pub trait VideoAnalysisService: Send + Sync {
    async fn analyze_video(&self, media: EncodedMedia) -> Result<AnalysisResult>;
}
