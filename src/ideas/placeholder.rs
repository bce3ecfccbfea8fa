//! Deterministic local idea synthesis, used when the backend cannot be
//! reached. Same inputs always produce the same four ideas, which keeps the
//! fallback path golden-testable.

use crate::models::{BudgetTier, Idea, RequestContext, VideoFormat};

const ARCHETYPES: [&str; 4] = ["Quick tip", "Customer story", "Before & after", "How-to"];
const FALLBACK_TOPIC: &str = "Your business";

/// Synthesizes a fixed-size idea list from the user's inputs alone. Pure and
/// deterministic, no randomness.
pub fn generate(context: &RequestContext) -> Vec<Idea> {
    let base = base_topic(&context.description);
    ARCHETYPES
        .iter()
        .enumerate()
        .map(|(index, kind)| {
            let n = index + 1;
            Idea {
                id: format!("ph-{n}"),
                title: format!("{base} — {kind}"),
                format: format_label(context.format).to_owned(),
                tone: context.tone.to_string(),
                duration: duration_for(context.format, n),
                caption: format!("{kind} to boost engagement #{n}"),
                script: format!(
                    "{n}. Hook (2-4s): Short surprising fact about {base}\n\
                     Shot 1: Close-up — 3s\n\
                     Shot 2: Demo — 8s\n\
                     Shot 3: CTA — 3s\n\
                     Notes: Add captions, natural light."
                ),
                script_full: format!(
                    "HOOK:\nShort surprising fact about {base}\n\nSCRIPT:\n{n}. Shot 1: ..."
                ),
                editing_notes: Vec::new(),
                apps: apps_for(context.budget),
            }
        })
        .collect()
}

/// The text before the first sentence terminator, or a generic topic when the
/// description yields nothing.
fn base_topic(description: &str) -> &str {
    let head = description.split('.').next().unwrap_or("").trim();
    if head.is_empty() {
        FALLBACK_TOPIC
    } else {
        head
    }
}

fn format_label(format: VideoFormat) -> &'static str {
    match format {
        VideoFormat::ReelTikTok => "Reel/TikTok",
        VideoFormat::YoutubeShort => "YouTube Short",
        VideoFormat::YoutubeLong => "YouTube (long)",
    }
}

/// Long-form estimates scale with the idea index; short-form durations are
/// fixed.
fn duration_for(format: VideoFormat, n: usize) -> String {
    match format {
        VideoFormat::YoutubeLong => format!("{} min", 2 + n),
        VideoFormat::YoutubeShort => "0:15".to_owned(),
        VideoFormat::ReelTikTok => "0:30".to_owned(),
    }
}

fn apps_for(budget: BudgetTier) -> Vec<String> {
    let apps: &[&str] = match budget {
        BudgetTier::Free => &["CapCut", "InShot", "Canva"],
        BudgetTier::Paid => &["Premiere Pro", "Final Cut Pro", "DaVinci Resolve"],
    };
    apps.iter().map(|app| (*app).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use crate::models::Tone;

    use super::*;

    fn context(description: &str, format: VideoFormat, budget: BudgetTier) -> RequestContext {
        RequestContext::new(description, format, Tone::Casual, budget)
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let ctx = context("Great coffee. Best in town.", VideoFormat::ReelTikTok, BudgetTier::Free);
        assert_eq!(generate(&ctx), generate(&ctx));
    }

    #[test]
    fn base_topic_is_the_text_before_the_first_period() {
        let ctx = context("Great coffee. Best in town.", VideoFormat::ReelTikTok, BudgetTier::Free);
        let ideas = generate(&ctx);
        assert_eq!(ideas[0].title, "Great coffee — Quick tip");
        assert!(ideas[0].script.contains("Short surprising fact about Great coffee"));
    }

    #[test]
    fn empty_description_uses_the_generic_topic() {
        let ctx = context("", VideoFormat::ReelTikTok, BudgetTier::Free);
        assert_eq!(generate(&ctx)[0].title, "Your business — Quick tip");
    }

    #[test]
    fn produces_four_archetypes_in_order() {
        let ctx = context("Great coffee.", VideoFormat::ReelTikTok, BudgetTier::Free);
        let ideas = generate(&ctx);
        assert_eq!(ideas.len(), 4);
        assert_eq!(
            ideas.iter().map(|idea| idea.id.as_str()).collect::<Vec<_>>(),
            vec!["ph-1", "ph-2", "ph-3", "ph-4"]
        );
        assert_eq!(ideas[1].title, "Great coffee — Customer story");
        assert_eq!(ideas[2].title, "Great coffee — Before & after");
        assert_eq!(ideas[3].title, "Great coffee — How-to");
    }

    #[test]
    fn long_form_durations_scale_with_the_index() {
        let ctx = context("Great coffee.", VideoFormat::YoutubeLong, BudgetTier::Free);
        let durations: Vec<String> =
            generate(&ctx).into_iter().map(|idea| idea.duration).collect();
        assert_eq!(durations, vec!["3 min", "4 min", "5 min", "6 min"]);
        assert_eq!(generate(&ctx)[0].format, "YouTube (long)");
    }

    #[test]
    fn short_form_durations_are_fixed() {
        let shorts = context("Great coffee.", VideoFormat::YoutubeShort, BudgetTier::Free);
        assert!(generate(&shorts).iter().all(|idea| idea.duration == "0:15"));
        let reels = context("Great coffee.", VideoFormat::ReelTikTok, BudgetTier::Free);
        assert!(generate(&reels).iter().all(|idea| idea.duration == "0:30"));
    }

    #[test]
    fn budget_tier_selects_the_tool_set() {
        let free = context("Great coffee.", VideoFormat::ReelTikTok, BudgetTier::Free);
        assert_eq!(generate(&free)[0].apps, vec!["CapCut", "InShot", "Canva"]);
        let paid = context("Great coffee.", VideoFormat::ReelTikTok, BudgetTier::Paid);
        assert_eq!(
            generate(&paid)[0].apps,
            vec!["Premiere Pro", "Final Cut Pro", "DaVinci Resolve"]
        );
    }
}
