//! Analysis attempt lifecycle
//!
//! A four-state machine mirroring what the interface presents: a video is
//! selected (Idle), analysis runs (Analyzing), and the attempt ends in
//! Complete or Error. Selecting a new video always returns to Idle and
//! clears whatever the previous attempt left behind.

use crate::media::SelectedVideo;
use crate::models::AnalysisResult;

/// Presentation-facing state of the current analysis attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisState {
    Idle,
    Analyzing,
    Complete(AnalysisResult),
    Error(String),
}

/// Tracks the selected video and the attempt in progress.
///
/// At most one analysis runs at a time; the session records state, it does
/// not enforce serialization of attempts.
#[derive(Debug)]
pub struct AnalysisSession {
    video: Option<SelectedVideo>,
    state: AnalysisState,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self {
            video: None,
            state: AnalysisState::Idle,
        }
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn video(&self) -> Option<&SelectedVideo> {
        self.video.as_ref()
    }

    /// Select a new video, dropping any previous result or error.
    pub fn select_video(&mut self, video: SelectedVideo) {
        self.video = Some(video);
        self.state = AnalysisState::Idle;
    }

    /// Mark the attempt as running.
    pub fn begin_analysis(&mut self) {
        self.state = AnalysisState::Analyzing;
    }

    /// Finish the attempt with a decoded result.
    pub fn complete(&mut self, result: AnalysisResult) {
        self.state = AnalysisState::Complete(result);
    }

    /// Finish the attempt with a user-facing failure message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = AnalysisState::Error(message.into());
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            AnalysisState::Complete(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            AnalysisState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn video(name: &str) -> SelectedVideo {
        SelectedVideo {
            path: PathBuf::from(name),
            mime_type: "video/mp4".to_string(),
            size_bytes: 1024,
        }
    }

    fn result(score: u8) -> AnalysisResult {
        AnalysisResult {
            overall_score: score,
            summary: "ok".to_string(),
            breakdown: vec![],
            strengths: vec![],
            improvements: vec![],
            drill_recommendation: "drill".to_string(),
        }
    }

    #[test]
    fn test_new_session_is_idle_without_video() {
        let session = AnalysisSession::new();

        assert_eq!(*session.state(), AnalysisState::Idle);
        assert!(session.video().is_none());
        assert!(session.result().is_none());
        assert!(session.error_message().is_none());
    }

    #[test]
    fn test_selecting_video_stays_idle() {
        let mut session = AnalysisSession::new();
        session.select_video(video("serve.mp4"));

        assert_eq!(*session.state(), AnalysisState::Idle);
        assert_eq!(session.video().unwrap().path, PathBuf::from("serve.mp4"));
    }

    #[test]
    fn test_attempt_runs_to_complete() {
        let mut session = AnalysisSession::new();
        session.select_video(video("serve.mp4"));

        session.begin_analysis();
        assert_eq!(*session.state(), AnalysisState::Analyzing);

        session.complete(result(82));
        assert_eq!(session.result().unwrap().overall_score, 82);
        assert!(session.error_message().is_none());
    }

    #[test]
    fn test_attempt_runs_to_error() {
        let mut session = AnalysisSession::new();
        session.select_video(video("serve.mp4"));
        session.begin_analysis();

        session.fail("algo deu errado");

        assert_eq!(session.error_message(), Some("algo deu errado"));
        assert!(session.result().is_none());
    }

    #[test]
    fn test_new_selection_clears_previous_result() {
        let mut session = AnalysisSession::new();
        session.select_video(video("serve.mp4"));
        session.begin_analysis();
        session.complete(result(90));

        session.select_video(video("forehand.mov"));

        assert_eq!(*session.state(), AnalysisState::Idle);
        assert!(session.result().is_none());
        assert_eq!(
            session.video().unwrap().path,
            PathBuf::from("forehand.mov")
        );
    }

    #[test]
    fn test_new_selection_clears_previous_error() {
        let mut session = AnalysisSession::new();
        session.select_video(video("serve.mp4"));
        session.begin_analysis();
        session.fail("falhou");

        session.select_video(video("serve2.mp4"));

        assert_eq!(*session.state(), AnalysisState::Idle);
        assert!(session.error_message().is_none());
    }

    #[test]
    fn test_retry_after_error_reuses_selected_video() {
        let mut session = AnalysisSession::new();
        session.select_video(video("serve.mp4"));
        session.begin_analysis();
        session.fail("falhou");

        session.begin_analysis();

        assert_eq!(*session.state(), AnalysisState::Analyzing);
        assert!(session.video().is_some());
    }
}
