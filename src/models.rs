//! Data models and structures
//!
//! Defines the structured coaching verdict returned by the model, the
//! decoder that turns raw response text into it, and application
//! configuration.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Verdict for one technical aspect of the movement.
///
/// The wire values are the Portuguese labels declared in the response
/// schema; anything outside these four fails decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectStatus {
    Excelente,
    Bom,
    #[serde(rename = "Atenção")]
    Atencao,
    #[serde(rename = "Crítico")]
    Critico,
}

impl AspectStatus {
    pub const ALL: [AspectStatus; 4] = [
        AspectStatus::Excelente,
        AspectStatus::Bom,
        AspectStatus::Atencao,
        AspectStatus::Critico,
    ];

    /// Display label, identical to the wire value.
    pub fn label(&self) -> &'static str {
        match self {
            AspectStatus::Excelente => "Excelente",
            AspectStatus::Bom => "Bom",
            AspectStatus::Atencao => "Atenção",
            AspectStatus::Critico => "Crítico",
        }
    }
}

/// One entry of the biomechanical breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub aspect: String,
    pub status: AspectStatus,
    pub feedback: String,
}

/// Structured analysis decoded from the model's JSON response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Technique score from 0 to 100.
    pub overall_score: u8,
    pub summary: String,
    pub breakdown: Vec<BreakdownItem>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub drill_recommendation: String,
}

impl AnalysisResult {
    /// Decode the raw text the model answered with.
    ///
    /// Absent or blank text, and text that does not parse into this shape,
    /// are decode failures. Nothing beyond the typed parse is validated;
    /// the declared response schema constrains content on the model side.
    pub fn from_response_text(text: Option<&str>) -> Result<Self> {
        let text = match text {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                return Err(Error::Decode(
                    "no analysis text in model response".to_string(),
                ))
            }
        };

        serde_json::from_str(text)
            .map_err(|e| Error::Decode(format!("response text is not a valid analysis: {}", e)))
    }
}

// Configuration
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_MAX_VIDEO_BYTES: u64 = 20 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub model: String,
    pub max_video_bytes: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| Error::Config("GEMINI_API_KEY not set".to_string()))?;

        let model = std::env::var("ACECOACH_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let max_video_bytes = match std::env::var("ACECOACH_MAX_VIDEO_MB") {
            Ok(raw) => raw
                .parse::<u64>()
                .map(|mb| mb * 1024 * 1024)
                .map_err(|_| {
                    Error::Config(format!("invalid ACECOACH_MAX_VIDEO_MB value: {}", raw))
                })?,
            Err(_) => DEFAULT_MAX_VIDEO_BYTES,
        };

        Ok(Self {
            gemini_api_key,
            model,
            max_video_bytes,
        })
    }
}
