use super::VideoAnalysisService;
use crate::media::EncodedMedia;
use crate::models::{AnalysisResult, AspectStatus, BreakdownItem};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
enum CannedOutcome {
    Result(AnalysisResult),
    Error(String),
}

/// Scripted analyzer for tests.
///
/// Queued outcomes are returned in order (cycling when exhausted); with
/// nothing queued, every call succeeds with a generic verdict. Calls and
/// the MIME types they carried are recorded for assertions.
#[derive(Clone)]
pub struct MockAnalysisClient {
    outcomes: Arc<Mutex<Vec<CannedOutcome>>>,
    call_count: Arc<Mutex<usize>>,
    received_mime_types: Arc<Mutex<Vec<String>>>,
}

impl MockAnalysisClient {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            received_mime_types: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_result(self, result: AnalysisResult) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push(CannedOutcome::Result(result));
        self
    }

    pub fn with_error(self, message: &str) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push(CannedOutcome::Error(message.to_string()));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn received_mime_types(&self) -> Vec<String> {
        self.received_mime_types.lock().unwrap().clone()
    }
}

impl Default for MockAnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoAnalysisService for MockAnalysisClient {
    async fn analyze_video(&self, media: EncodedMedia) -> Result<AnalysisResult> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        self.received_mime_types
            .lock()
            .unwrap()
            .push(media.mime_type.clone());

        let outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            // Default mock verdict
            Ok(AnalysisResult {
                overall_score: 75,
                summary: "Movimento sólido com espaço para evoluir.".to_string(),
                breakdown: vec![BreakdownItem {
                    aspect: "Postura".to_string(),
                    status: AspectStatus::Bom,
                    feedback: "Base estável durante a preparação.".to_string(),
                }],
                strengths: vec!["Equilíbrio".to_string()],
                improvements: vec!["Rotação de tronco".to_string()],
                drill_recommendation: "Saques em câmera lenta focando no toss.".to_string(),
            })
        } else {
            let index = (*count - 1) % outcomes.len();
            match &outcomes[index] {
                CannedOutcome::Result(result) => Ok(result.clone()),
                CannedOutcome::Error(message) => Err(Error::AiProvider(message.clone())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media() -> EncodedMedia {
        EncodedMedia {
            data: "AAAA".to_string(),
            mime_type: "video/mp4".to_string(),
        }
    }

    fn verdict(score: u8) -> AnalysisResult {
        AnalysisResult {
            overall_score: score,
            summary: format!("score {}", score),
            breakdown: vec![],
            strengths: vec![],
            improvements: vec![],
            drill_recommendation: "drill".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_default_verdict() {
        let client = MockAnalysisClient::new();

        let result = client.analyze_video(media()).await.unwrap();

        assert_eq!(result.overall_score, 75);
        assert!(!result.breakdown.is_empty());
    }

    #[tokio::test]
    async fn test_mock_queued_outcomes_cycle() {
        let client = MockAnalysisClient::new()
            .with_result(verdict(90))
            .with_result(verdict(40));

        assert_eq!(
            client.analyze_video(media()).await.unwrap().overall_score,
            90
        );
        assert_eq!(
            client.analyze_video(media()).await.unwrap().overall_score,
            40
        );

        // Cycles back
        assert_eq!(
            client.analyze_video(media()).await.unwrap().overall_score,
            90
        );
    }

    #[tokio::test]
    async fn test_mock_queued_error() {
        let client = MockAnalysisClient::new().with_error("model unavailable");

        let result = client.analyze_video(media()).await;

        match result {
            Err(Error::AiProvider(message)) => assert_eq!(message, "model unavailable"),
            other => panic!("expected AiProvider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mock_records_calls_and_mime_types() {
        let client = MockAnalysisClient::new();
        assert_eq!(client.get_call_count(), 0);

        client.analyze_video(media()).await.unwrap();
        client
            .analyze_video(EncodedMedia {
                data: "BBBB".to_string(),
                mime_type: "video/quicktime".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(client.get_call_count(), 2);
        assert_eq!(
            client.received_mime_types(),
            vec!["video/mp4".to_string(), "video/quicktime".to_string()]
        );
    }
}
