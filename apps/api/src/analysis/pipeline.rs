//! Intake & analysis pipeline — the gates and LLM steps behind /analyze.
//!
//! Gates run cheapest-first: keyword heuristic, then the classifier call,
//! then the full analysis call. A failed gate is a soft reject (ordinary 200
//! outcome), never an error; only extraction and LLM failures are errors.

use std::sync::Arc;

use tracing::{debug, info};

use crate::analysis::gate::{detect_resume_keywords, passes_keyword_gate};
use crate::analysis::prompts::{build_analysis_prompt, build_classifier_prompt};
use crate::analysis::skills::{split_analysis, SkillInference};
use crate::errors::AppError;
use crate::llm_client::ChatModel;

/// Outcome of running the pipeline over extracted text.
#[derive(Debug, PartialEq)]
pub enum AnalysisOutcome {
    /// Extraction produced no text (likely a scanned/image-based PDF).
    NoContent,
    /// The document failed the keyword gate.
    NotAResume { detected_keywords: Vec<&'static str> },
    /// The classifier labeled the document as something other than a resume.
    NotClassifiedAsResume { verdict: String },
    /// Full analysis ran. `skills` is `None` when structured extraction was
    /// not requested, `Some` (possibly empty, fail-soft) when it was.
    Completed {
        narrative: String,
        skills: Option<Vec<SkillInference>>,
    },
}

/// Runs gates 1–3 and the analysis step over already-extracted text.
///
/// The two LLM calls are sequential and the second never happens when the
/// classifier gate rejects. All LLM failures map to `AppError::Llm`.
pub async fn analyze_resume_text(
    text: &str,
    llm: &Arc<dyn ChatModel>,
    structured_skills: bool,
) -> Result<AnalysisOutcome, AppError> {
    if text.trim().is_empty() {
        return Ok(AnalysisOutcome::NoContent);
    }

    let detected_keywords = detect_resume_keywords(text);
    if !passes_keyword_gate(&detected_keywords) {
        info!(
            matched = detected_keywords.len(),
            "Keyword gate rejected document"
        );
        return Ok(AnalysisOutcome::NotAResume { detected_keywords });
    }

    let verdict = llm
        .complete(&build_classifier_prompt(text))
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?
        .trim()
        .to_lowercase();

    if !verdict.contains("resume") {
        info!(%verdict, "Classifier gate rejected document");
        return Ok(AnalysisOutcome::NotClassifiedAsResume { verdict });
    }

    debug!("Classifier accepted document, running full analysis");

    let response = llm
        .complete(&build_analysis_prompt(text, structured_skills))
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    if structured_skills {
        let (narrative, skills) = split_analysis(&response);
        Ok(AnalysisOutcome::Completed {
            narrative,
            skills: Some(skills),
        })
    } else {
        Ok(AnalysisOutcome::Completed {
            narrative: response.trim().to_string(),
            skills: None,
        })
    }
}
