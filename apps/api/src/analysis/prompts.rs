// Prompt templates for the analysis pipeline. Placeholders are substituted
// with `str::replace`, matching the convention used across the codebase.

/// Characters of extracted text handed to the classifier. Keeps the gate call
/// cheap; the full text only goes to the analysis call.
pub const CLASSIFIER_EXCERPT_CHARS: usize = 2000;

/// Binary resume/other classification. The pipeline checks the reply for the
/// substring "resume" after lower-casing and trimming.
pub const CLASSIFIER_PROMPT_TEMPLATE: &str = r#"You are a document classifier. Determine whether the following text is a *resume* or *something else*.

Text:
{excerpt}

Respond with only one word: "resume" or "other"."#;

/// Narrative-only analysis (structured skills disabled).
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert career coach and recruiter.
Analyze this resume text:

{text}

Find **hidden talents, soft skills, and growth potential** that are implied but not directly mentioned.
Be concise and insightful.

Return the answer structured as:

- Hidden Technical Talents
- Implied Soft Skills
- Growth Potential
- Career Recommendations"#;

/// Combined narrative + structured skills analysis. The JSON array is parsed
/// fail-soft by `skills::split_analysis`.
pub const ANALYSIS_WITH_SKILLS_PROMPT_TEMPLATE: &str = r#"You are an expert career coach and recruiter.
Analyze this resume text:

{text}

Find **hidden talents, soft skills, and growth potential** that are implied but not directly mentioned.
Be concise and insightful.

Return the answer structured as:

- Hidden Technical Talents
- Implied Soft Skills
- Growth Potential
- Career Recommendations

Then, after the narrative, output a strictly valid JSON array of the skills you identified, in this exact format and nothing else after it:

[
  {"skill": "Python", "score": 0.95, "example": "Developed backend services using Python and Django"},
  {"skill": "React", "score": 0.88, "example": "Built responsive web applications using React"}
]

Each score must be between 0.7 and 1.0 and each example must quote or paraphrase where the skill is evidenced."#;

/// Default prompt for /analyze-text when the caller supplies no prompt.
pub const DEFAULT_TEXT_PROMPT_TEMPLATE: &str = "Analyze the following text:\n\n{text}";

/// Takes the first `max_chars` characters of `text`, respecting char
/// boundaries so multi-byte input can never panic a slice.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn build_classifier_prompt(text: &str) -> String {
    CLASSIFIER_PROMPT_TEMPLATE.replace("{excerpt}", excerpt(text, CLASSIFIER_EXCERPT_CHARS))
}

pub fn build_analysis_prompt(text: &str, structured_skills: bool) -> String {
    if structured_skills {
        ANALYSIS_WITH_SKILLS_PROMPT_TEMPLATE.replace("{text}", text)
    } else {
        ANALYSIS_PROMPT_TEMPLATE.replace("{text}", text)
    }
}

pub fn build_default_text_prompt(text: &str) -> String {
    DEFAULT_TEXT_PROMPT_TEMPLATE.replace("{text}", text)
}
