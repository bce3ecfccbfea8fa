use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::backend::IdeaBackend;
use crate::errors::AppError;
use crate::ideas::{normalizer, placeholder};
use crate::models::{Acquisition, GenerateRequest, IdeaSource, RequestContext};

/// Orchestrates one idea-generation cycle: a single backend request, then a
/// decision between normalized backend ideas, locally synthesized
/// placeholders, or an explicit error.
///
/// Fallback policy: an unreachable backend or a non-success status recovers
/// silently via placeholders; a success response whose payload breaks the
/// shape contract is surfaced as [`AppError::MalformedResponse`] instead,
/// so a backend defect is never hidden behind fabricated content. Exactly one
/// of {idea list, validation error, malformed-response error} results per
/// invocation.
#[derive(Clone)]
pub struct IdeaAcquisitionPipeline {
    backend: Arc<dyn IdeaBackend>,
}

impl IdeaAcquisitionPipeline {
    pub fn new(backend: Arc<dyn IdeaBackend>) -> Self {
        Self { backend }
    }

    pub async fn acquire(&self, context: &RequestContext) -> Result<Acquisition, AppError> {
        // ── Validation ────────────────────────────────────────────────────────
        if context.description.trim().is_empty() {
            return Err(AppError::EmptyField { field_name: "description".to_string() });
        }

        // ── Single backend request ────────────────────────────────────────────
        let request = GenerateRequest::from(context);
        let payload = match self.backend.generate_ideas(&request).await {
            Ok(payload) => payload,
            Err(error) if error.is_recoverable() => {
                warn!("Idea backend unavailable, falling back to placeholders: {error}");
                return Ok(Acquisition {
                    ideas: placeholder::generate(context),
                    source: IdeaSource::Placeholder,
                });
            }
            Err(error) => return Err(error),
        };

        // ── Shape contract: a non-empty `ideas` array ─────────────────────────
        let raw_ideas = payload
            .get("ideas")
            .and_then(Value::as_array)
            .filter(|ideas| !ideas.is_empty())
            .ok_or_else(|| AppError::malformed("payload lacks a non-empty 'ideas' array"))?;

        let ideas: Vec<_> = raw_ideas
            .iter()
            .map(|raw| normalizer::normalize(raw, context.budget))
            .collect();
        info!("Normalized {} backend idea(s)", ideas.len());

        Ok(Acquisition { ideas, source: IdeaSource::Backend })
    }
}
