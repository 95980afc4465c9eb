use acecoach::app::App;
use acecoach::session::AnalysisSession;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "acecoach")]
#[command(about = "Análise de técnica de tênis por IA a partir de um vídeo curto")]
struct CliArgs {
    /// Caminho do vídeo a analisar (mp4, mov, webm, ...).
    #[arg(value_name = "VIDEO")]
    video: PathBuf,

    /// Imprime o resultado como JSON em vez do relatório formatado.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "acecoach=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting acecoach");

    let args = CliArgs::parse();

    match App::new() {
        Ok(app) => {
            let mut session = AnalysisSession::new();
            match app.run(&mut session, &args.video, args.json).await {
                Ok(_) => {
                    info!("Analysis completed successfully");
                    Ok(())
                }
                Err(e) => {
                    error!("Analysis failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}
