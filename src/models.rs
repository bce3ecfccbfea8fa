use serde::{Deserialize, Serialize};

/// Canonical content suggestion record. Every field is resolved to a concrete
/// value at the normalization boundary, so rendering code never has to probe
/// for missing data. Constructed once per acquisition cycle and replaced
/// wholesale by the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub title: String,
    pub format: String,
    pub tone: String,
    pub duration: String,
    pub caption: String,
    pub script: String,
    pub script_full: String,
    pub editing_notes: Vec<String>,
    pub apps: Vec<String>,
}

/// Budget tier selected on the input page; drives the recommended-tool
/// defaults when the backend supplies none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    #[default]
    Free,
    Paid,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Free => "free",
            BudgetTier::Paid => "paid",
        }
    }
}

impl TryFrom<&str> for BudgetTier {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(BudgetTier::Free),
            "paid" => Ok(BudgetTier::Paid),
            other => Err(format!("Unknown budget tier: {other}")),
        }
    }
}

/// Video format choices offered by the input page. The serialized values are
/// the wire values the backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VideoFormat {
    #[default]
    #[serde(rename = "reel")]
    ReelTikTok,
    #[serde(rename = "youtube")]
    YoutubeShort,
    #[serde(rename = "youtube-long")]
    YoutubeLong,
}

impl VideoFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoFormat::ReelTikTok => "reel",
            VideoFormat::YoutubeShort => "youtube",
            VideoFormat::YoutubeLong => "youtube-long",
        }
    }
}

impl std::fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for VideoFormat {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "reel" => Ok(VideoFormat::ReelTikTok),
            "youtube" => Ok(VideoFormat::YoutubeShort),
            "youtube-long" => Ok(VideoFormat::YoutubeLong),
            other => Err(format!("Unknown video format: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Casual,
    Professional,
    Energetic,
    #[default]
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Casual => "casual",
            Tone::Professional => "professional",
            Tone::Energetic => "energetic",
            Tone::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Tone {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "casual" => Ok(Tone::Casual),
            "professional" => Ok(Tone::Professional),
            "energetic" => Ok(Tone::Energetic),
            "neutral" => Ok(Tone::Neutral),
            other => Err(format!("Unknown tone: {other}")),
        }
    }
}

/// User inputs captured for one generation request. Built fresh per request;
/// the description is trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub description: String,
    pub format: VideoFormat,
    pub tone: Tone,
    pub budget: BudgetTier,
}

impl RequestContext {
    pub fn new(
        description: impl Into<String>,
        format: VideoFormat,
        tone: Tone,
        budget: BudgetTier,
    ) -> Self {
        Self {
            description: description.into().trim().to_string(),
            format,
            tone,
            budget,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// One entry in a follow-up chat log. The log is append-only and scoped to a
/// single idea's detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { speaker: Speaker::User, text: text.into() }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { speaker: Speaker::Assistant, text: text.into() }
    }
}

// ── Wire bodies ──────────────────────────────────────────────────────────────

/// Request body for the idea-generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub description: String,
    pub format: String,
    pub tone: String,
}

impl From<&RequestContext> for GenerateRequest {
    fn from(context: &RequestContext) -> Self {
        Self {
            description: context.description.clone(),
            format: context.format.as_str().to_string(),
            tone: context.tone.as_str().to_string(),
        }
    }
}

/// Request body for the follow-up chat endpoint. The full idea travels along
/// so the backend can answer with context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub idea: Idea,
    pub question: String,
}

/// Where an acquired idea list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeaSource {
    Backend,
    Placeholder,
}

/// Successful outcome of one acquisition cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acquisition {
    pub ideas: Vec<Idea>,
    pub source: IdeaSource,
}
