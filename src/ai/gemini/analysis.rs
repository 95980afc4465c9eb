use super::client::GeminiHttpClient;
use super::schema::{analysis_schema, Schema};
use super::types::{Content, GenerateContentResponse, Part};
use crate::ai::VideoAnalysisService;
use crate::media::EncodedMedia;
use crate::models::AnalysisResult;
use crate::{prompts, Result};
use async_trait::async_trait;
use serde::Serialize;

/// Sampling temperature for analysis requests.
const ANALYSIS_TEMPERATURE: f32 = 0.4;

#[derive(Debug, Serialize)]
struct AnalysisRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    response_mime_type: String,
    response_schema: Schema,
}

/// Schema-bound Gemini invoker for video analysis.
pub struct GeminiAnalysisClient {
    http: GeminiHttpClient,
}

impl GeminiAnalysisClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: GeminiHttpClient::new(api_key, model),
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl VideoAnalysisService for GeminiAnalysisClient {
    async fn analyze_video(&self, media: EncodedMedia) -> Result<AnalysisResult> {
        tracing::debug!(
            "Requesting analysis of {} video ({} base64 chars)",
            media.mime_type,
            media.data.len()
        );

        let request = AnalysisRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::from(media),
                    Part::Text {
                        text: prompts::ANALYSIS.to_string(),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: ANALYSIS_TEMPERATURE,
                response_mime_type: "application/json".to_string(),
                response_schema: analysis_schema(),
            },
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        let text = response.candidates.first().and_then(|c| {
            c.content.parts.iter().find_map(|p| match p {
                Part::Text { text } => Some(text.clone()),
                _ => None,
            })
        });

        let result = AnalysisResult::from_response_text(text.as_deref())?;

        tracing::info!("Analysis decoded: overall score {}", result.overall_score);

        Ok(result)
    }
}
