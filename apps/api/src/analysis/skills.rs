//! Fail-soft splitting of the model's combined reply into narrative + skills.
//!
//! The skills array is best-effort: strict JSON parse of the fence-stripped
//! reply first, bracket scanning as the fallback, and an empty list on any
//! failure. The narrative portion is always returned.

use serde::{Deserialize, Serialize};

/// A single skill the model inferred from the resume.
/// Scores are prompted into 0.7–1.0 but parsed as plain floats — the model's
/// output is never trusted to honor the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillInference {
    pub skill: String,
    pub score: f64,
    pub example: String,
}

/// Splits an analysis reply into (narrative, skills).
///
/// Narrative: everything before the first `[`, or the whole reply if there is
/// none, trimmed. Skills: parsed from the reply as described above; malformed
/// or absent arrays yield an empty list, never an error.
pub fn split_analysis(response: &str) -> (String, Vec<SkillInference>) {
    let text = response.trim();

    // Strict path: the model returned just the array (possibly fenced).
    let unfenced = strip_json_fences(text);
    if let Ok(skills) = serde_json::from_str::<Vec<SkillInference>>(unfenced) {
        return (String::new(), skills);
    }

    let narrative = match text.find('[') {
        Some(idx) => text[..idx].trim().to_string(),
        None => return (text.to_string(), Vec::new()),
    };

    let skills = extract_bracketed_array(text).unwrap_or_default();
    (narrative, skills)
}

/// Bracket-scan fallback: the span from the first `[` to the last `]`,
/// inclusive, parsed as a skills array.
fn extract_bracketed_array(text: &str) -> Option<Vec<SkillInference>> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
