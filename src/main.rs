use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use content_catalyst::backend::HttpBackend;
use content_catalyst::models::{BudgetTier, Idea, RequestContext, Tone, VideoFormat};
use content_catalyst::service::acquisition::IdeaAcquisitionPipeline;
use content_catalyst::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "content_catalyst=debug".into()),
        )
        .init();

    // ── Inputs ────────────────────────────────────────────────────────────────
    let description = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let format = env_choice("CATALYST_FORMAT", VideoFormat::default())?;
    let tone = env_choice("CATALYST_TONE", Tone::default())?;
    let budget = env_choice("CATALYST_BUDGET", BudgetTier::default())?;
    let context = RequestContext::new(description, format, tone, budget);

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let backend = Arc::new(HttpBackend::from_env()?);
    let pipeline = IdeaAcquisitionPipeline::new(backend.clone());
    let mut state = AppState::new(backend);

    // ── One acquisition cycle ─────────────────────────────────────────────────
    match pipeline.acquire(&context).await {
        Ok(acquisition) => {
            info!("Acquired {} idea(s) from {:?}", acquisition.ideas.len(), acquisition.source);
            state.show_ideas(acquisition.ideas);
            for idea in state.ideas() {
                print_card(idea);
            }
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn env_choice<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: for<'a> TryFrom<&'a str, Error = String>,
{
    match std::env::var(key) {
        Ok(raw) => T::try_from(raw.as_str())
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("invalid value for {key}")),
        Err(_) => Ok(default),
    }
}

fn print_card(idea: &Idea) {
    println!("── {} [{}]", idea.title, idea.duration);
    println!("   {} • {}", idea.format, idea.tone);
    if !idea.caption.is_empty() {
        println!("   Hook: {}", idea.caption);
    }
    for line in idea.script.lines().take(4) {
        println!("   {line}");
    }
    println!("   Apps: {}", idea.apps.join(", "));
    println!();
}
