//! Application orchestration for one analysis attempt.

use crate::ai::{GeminiAnalysisClient, VideoAnalysisService};
use crate::media::{encode_video, SelectedVideo};
use crate::models::{AnalysisResult, Config};
use crate::report;
use crate::session::AnalysisSession;
use crate::{Error, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing::{error, info};

/// Coordinates the size check, encoding, and model invocation for a video.
pub struct App {
    analyzer: Box<dyn VideoAnalysisService>,
    max_video_bytes: u64,
}

impl App {
    /// Build an app from an injected analyzer.
    ///
    /// This is the constructor integration tests use to substitute a
    /// scripted invoker.
    pub fn with_analyzer(analyzer: Box<dyn VideoAnalysisService>, max_video_bytes: u64) -> Self {
        Self {
            analyzer,
            max_video_bytes,
        }
    }

    /// Construct an app from environment configuration (`Config::from_env`).
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;

        info!(
            "Analysis model: {} (video limit {} MiB)",
            config.model,
            config.max_video_bytes / (1024 * 1024)
        );

        let analyzer = Box::new(GeminiAnalysisClient::new(
            config.gemini_api_key.clone(),
            config.model.clone(),
        ));

        Ok(Self::with_analyzer(analyzer, config.max_video_bytes))
    }

    /// Run one analysis attempt: boundary check, encode, invoke, decode.
    ///
    /// The size check uses the recorded metadata size and happens before any
    /// file content is read, so oversized videos never reach the encoder or
    /// the network.
    pub async fn analyze(&self, video: &SelectedVideo) -> Result<AnalysisResult> {
        if video.size_bytes >= self.max_video_bytes {
            return Err(Error::VideoTooLarge {
                actual_bytes: video.size_bytes,
                limit_bytes: self.max_video_bytes,
            });
        }

        let media = encode_video(&video.path, &video.mime_type).await?;
        info!(
            "Encoded {} ({} bytes, {})",
            video.path.display(),
            video.size_bytes,
            media.mime_type
        );

        self.analyzer.analyze_video(media).await
    }

    /// Drive a full session for the CLI: select, analyze, render.
    pub async fn run(
        &self,
        session: &mut AnalysisSession,
        path: &Path,
        json_output: bool,
    ) -> Result<()> {
        let video = match SelectedVideo::from_path(path) {
            Ok(video) => video,
            Err(e) => {
                eprintln!("{}", style(e.user_message()).red().bold());
                return Err(e);
            }
        };

        info!(
            "Selected {} ({}, {} bytes)",
            video.path.display(),
            video.mime_type,
            video.size_bytes
        );
        session.select_video(video.clone());

        session.begin_analysis();
        let spinner = create_spinner("Analisando biomecânica...");
        let outcome = self.analyze(&video).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(result) => {
                if json_output {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    println!("{}", report::render(&result));
                }
                info!("Analysis complete: overall score {}", result.overall_score);
                session.complete(result);
                Ok(())
            }
            Err(e) => {
                error!("Analysis attempt failed: {}", e);
                let message = e.user_message();
                eprintln!("{}", style(&message).red().bold());
                session.fail(message);
                Err(e)
            }
        }
    }
}

fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .expect("static spinner template"),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
