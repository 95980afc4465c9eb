//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror,
//! plus the mapping from internal failures to the Portuguese messages the
//! CLI shows the player.

use thiserror::Error;

/// Generic message for any failed analysis attempt.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Ocorreu um erro ao analisar o vídeo. Tente novamente ou use um vídeo diferente.";

/// Message for files that are not a recognized video format.
pub const INVALID_VIDEO_MESSAGE: &str = "Por favor, selecione um arquivo de vídeo válido.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("video is {actual_bytes} bytes, at or over the {limit_bytes} byte limit")]
    VideoTooLarge { actual_bytes: u64, limit_bytes: u64 },

    #[error("unsupported media type: {0}")]
    UnsupportedMedia(String),

    #[error("failed to read video for encoding: {0}")]
    Encode(#[source] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error: {0}")]
    AiProvider(String),

    #[error("failed to decode analysis response: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Message shown to the player for this failure.
    ///
    /// Only the pre-flight rejections get dedicated wording; everything that
    /// fails after analysis starts collapses into one generic message so the
    /// player is never shown transport or provider internals.
    pub fn user_message(&self) -> String {
        match self {
            Error::VideoTooLarge { limit_bytes, .. } => format!(
                "O arquivo é muito grande. Por favor, envie um vídeo com menos de {}MB.",
                limit_bytes / (1024 * 1024)
            ),
            Error::UnsupportedMedia(_) => INVALID_VIDEO_MESSAGE.to_string(),
            _ => ANALYSIS_FAILED_MESSAGE.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
