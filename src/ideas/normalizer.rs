//! Boundary decoder for backend idea records.
//!
//! Backend payloads vary in shape: field name aliases (`headline` for
//! `title`, `hook` for `caption`), and a `script` that is either a plain
//! string or a structured `{hook, problem, solution}` object. All of that is
//! decoded exactly once here; downstream code only ever sees a fully
//! resolved [`Idea`].

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::{BudgetTier, Idea};

const DEFAULT_TITLE: &str = "Untitled idea";
const DEFAULT_FORMAT: &str = "Reel";
const DEFAULT_TONE: &str = "neutral";
const DEFAULT_DURATION: &str = "0:30";

/// Converts one raw backend record into a canonical [`Idea`]. Total: every
/// missing or mistyped field resolves to its documented default, and a value
/// that is not an object at all yields the all-defaults idea.
pub fn normalize(raw: &Value, budget: BudgetTier) -> Idea {
    let raw: RawIdea = serde_json::from_value(raw.clone()).unwrap_or_default();

    let title = raw
        .title
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_owned());
    let id = raw
        .id
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| title.clone());
    let script = raw.script.map(RawScript::flatten).unwrap_or_default();
    let script_full = raw
        .script_full
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| script.clone());

    Idea {
        id,
        title,
        format: raw
            .format
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_FORMAT.to_owned()),
        tone: raw
            .tone
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_TONE.to_owned()),
        duration: raw
            .duration
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_DURATION.to_owned()),
        caption: raw.caption.unwrap_or_default(),
        script,
        script_full,
        editing_notes: raw.editing_notes.unwrap_or_default(),
        apps: raw
            .apps
            .filter(|apps| !apps.is_empty())
            .unwrap_or_else(|| default_apps(budget)),
    }
}

/// Recommended-tool defaults for backend ideas that arrive without `apps`.
fn default_apps(budget: BudgetTier) -> Vec<String> {
    let apps: &[&str] = match budget {
        BudgetTier::Free => &["CapCut", "Canva"],
        BudgetTier::Paid => &["Premiere Pro", "Resolve"],
    };
    apps.iter().map(|app| (*app).to_owned()).collect()
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIdea {
    #[serde(default, deserialize_with = "lenient_string")]
    id: Option<String>,
    #[serde(default, alias = "headline", deserialize_with = "lenient_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    format: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    tone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    duration: Option<String>,
    #[serde(default, alias = "hook", deserialize_with = "lenient_string")]
    caption: Option<String>,
    #[serde(default, deserialize_with = "lenient_script")]
    script: Option<RawScript>,
    #[serde(default, alias = "script_full", deserialize_with = "lenient_string")]
    script_full: Option<String>,
    #[serde(default, alias = "editing_notes", deserialize_with = "lenient_strings")]
    editing_notes: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_strings")]
    apps: Option<Vec<String>>,
}

/// `script` as sent by the backend: either the flat text or the structured
/// form, which flattens to `hook\nproblem\nsolution`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawScript {
    Text(String),
    Structured {
        #[serde(default)]
        hook: Option<String>,
        #[serde(default)]
        problem: Option<String>,
        #[serde(default)]
        solution: Option<String>,
    },
}

impl RawScript {
    fn flatten(self) -> String {
        match self {
            RawScript::Text(text) => text,
            RawScript::Structured { hook, problem, solution } => {
                let hook = hook.unwrap_or_default();
                // A structured script without a hook carries nothing usable.
                if hook.is_empty() {
                    return String::new();
                }
                format!(
                    "{hook}\n{}\n{}",
                    problem.unwrap_or_default(),
                    solution.unwrap_or_default()
                )
            }
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned))
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_array().map(|items| {
        items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect()
    }))
}

fn lenient_script<'de, D>(deserializer: D) -> Result<Option<RawScript>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_record_resolves_every_field_to_its_default() {
        let idea = normalize(&json!({}), BudgetTier::Free);
        assert_eq!(idea.title, "Untitled idea");
        assert_eq!(idea.id, "Untitled idea");
        assert_eq!(idea.format, "Reel");
        assert_eq!(idea.tone, "neutral");
        assert_eq!(idea.duration, "0:30");
        assert_eq!(idea.caption, "");
        assert_eq!(idea.script, "");
        assert_eq!(idea.script_full, "");
        assert!(idea.editing_notes.is_empty());
        assert_eq!(idea.apps, vec!["CapCut", "Canva"]);
    }

    #[test]
    fn non_object_record_degrades_to_the_all_defaults_idea() {
        let idea = normalize(&json!("not a record"), BudgetTier::Free);
        assert_eq!(idea, normalize(&json!({}), BudgetTier::Free));
    }

    #[test]
    fn id_falls_back_to_the_title() {
        let idea = normalize(&json!({"title": "Latte art in 30s"}), BudgetTier::Free);
        assert_eq!(idea.id, "Latte art in 30s");
    }

    #[test]
    fn title_and_caption_aliases_are_accepted() {
        let idea = normalize(
            &json!({"headline": "Morning rush", "hook": "Watch this"}),
            BudgetTier::Free,
        );
        assert_eq!(idea.title, "Morning rush");
        assert_eq!(idea.caption, "Watch this");
    }

    #[test]
    fn plain_string_script_passes_through() {
        let idea = normalize(&json!({"script": "Shot 1: pour"}), BudgetTier::Free);
        assert_eq!(idea.script, "Shot 1: pour");
        assert_eq!(idea.script_full, "Shot 1: pour");
    }

    #[test]
    fn structured_script_flattens_hook_problem_solution_in_order() {
        let idea = normalize(
            &json!({"script": {"hook": "H", "problem": "P", "solution": "S"}}),
            BudgetTier::Free,
        );
        assert_eq!(idea.script, "H\nP\nS");
    }

    #[test]
    fn structured_script_without_hook_flattens_to_empty() {
        let idea = normalize(
            &json!({"script": {"problem": "P", "solution": "S"}}),
            BudgetTier::Free,
        );
        assert_eq!(idea.script, "");
    }

    #[test]
    fn script_full_falls_back_to_the_flattened_script() {
        let idea = normalize(
            &json!({"script": {"hook": "H", "problem": "P", "solution": "S"}}),
            BudgetTier::Free,
        );
        assert_eq!(idea.script_full, "H\nP\nS");
    }

    #[test]
    fn mistyped_fields_default_without_losing_the_rest() {
        let idea = normalize(
            &json!({"title": 42, "caption": "still here", "apps": "CapCut"}),
            BudgetTier::Free,
        );
        assert_eq!(idea.title, "Untitled idea");
        assert_eq!(idea.caption, "still here");
        assert_eq!(idea.apps, vec!["CapCut", "Canva"]);
    }

    #[test]
    fn backend_supplied_apps_are_kept() {
        let idea = normalize(&json!({"apps": ["iMovie"]}), BudgetTier::Paid);
        assert_eq!(idea.apps, vec!["iMovie"]);
    }

    #[test]
    fn empty_apps_list_counts_as_not_supplied() {
        let idea = normalize(&json!({"apps": []}), BudgetTier::Paid);
        assert_eq!(idea.apps, vec!["Premiere Pro", "Resolve"]);
    }

    #[test]
    fn paid_tier_selects_the_professional_tool_set() {
        let idea = normalize(&json!({}), BudgetTier::Paid);
        assert_eq!(idea.apps, vec!["Premiere Pro", "Resolve"]);
    }
}
