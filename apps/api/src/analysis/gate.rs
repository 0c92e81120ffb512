//! Keyword gate — cheap resume-likeness pre-filter that runs before any LLM call.
//!
//! Tuned for recall, not precision: a low match threshold lets borderline
//! documents through to the classifier, which makes the final call.

/// Fixed resume-domain vocabulary. Matching is case-insensitive substring,
/// so "EDUCATION" and "Skills." both count.
pub const RESUME_VOCABULARY: [&str; 16] = [
    "education",
    "skills",
    "experience",
    "project",
    "internship",
    "objective",
    "profile",
    "career",
    "summary",
    "certification",
    "linkedin",
    "github",
    "b.tech",
    "bachelor",
    "curriculum vitae",
    "cv",
];

/// Minimum vocabulary hits for a document to pass the gate.
pub const KEYWORD_GATE_THRESHOLD: usize = 3;

/// Returns the subset of the vocabulary found in `text`, in vocabulary order.
pub fn detect_resume_keywords(text: &str) -> Vec<&'static str> {
    let text_lower = text.to_lowercase();
    RESUME_VOCABULARY
        .iter()
        .filter(|k| text_lower.contains(*k))
        .copied()
        .collect()
}

/// True when `text` clears the keyword gate.
pub fn passes_keyword_gate(matched: &[&str]) -> bool {
    matched.len() >= KEYWORD_GATE_THRESHOLD
}
