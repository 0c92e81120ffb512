//! Axum route handlers for the analysis API.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::extract::extract_pdf_text;
use crate::analysis::pipeline::{analyze_resume_text, AnalysisOutcome};
use crate::analysis::skills::SkillInference;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Response body for POST /analyze. Soft rejects and the two success variants
/// share the endpoint, so the shape is outcome-dependent.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    SoftReject {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        detected_keywords: Option<Vec<&'static str>>,
    },
    Structured {
        textual_analysis: String,
        skills: Vec<SkillInference>,
    },
    Plain {
        analysis: String,
    },
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    #[serde(default)]
    pub text: String,
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeTextResponse {
    pub analysis: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Multipart upload with a `file` field holding a PDF. Runs the full intake
/// pipeline; gate failures come back as 200 soft rejects, extraction and LLM
/// failures as 500.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let (filename, data) = read_file_field(&mut multipart).await?;

    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation(
            "Invalid file type. Only PDF files are supported.".to_string(),
        ));
    }
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty.".to_string()));
    }

    info!(%filename, bytes = data.len(), "Analyzing uploaded resume");

    // pdf-extract is synchronous; keep it off the async workers.
    let text = tokio::task::spawn_blocking(move || extract_pdf_text(&data))
        .await
        .map_err(|e| AppError::Analysis(format!("extraction task panicked: {e}")))?
        .map_err(|e| AppError::Analysis(format!("{e:#}")))?;

    let outcome = analyze_resume_text(&text, &state.llm, state.config.structured_skills).await?;

    Ok(Json(outcome_to_response(outcome)))
}

/// POST /analyze-text
///
/// JSON body `{text, prompt?}`. A supplied prompt is sent verbatim (the text
/// is not re-appended); otherwise a default wrapper prompt is built around
/// the text. No resume gating, no skills extraction.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeTextResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation(
            "Missing 'text' field in request body.".to_string(),
        ));
    }

    let prompt = match request.prompt {
        Some(prompt) => prompt,
        None => crate::analysis::prompts::build_default_text_prompt(&request.text),
    };

    let analysis = state
        .llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    Ok(Json(AnalyzeTextResponse { analysis }))
}

async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Invalid file upload: {e}")))?;
            return Ok((filename, data));
        }
    }

    Err(AppError::Validation(
        "No file uploaded. Please upload a PDF file.".to_string(),
    ))
}

fn outcome_to_response(outcome: AnalysisOutcome) -> AnalyzeResponse {
    match outcome {
        AnalysisOutcome::NoContent => AnalyzeResponse::SoftReject {
            message: "No readable text found. The PDF might be scanned or image-based."
                .to_string(),
            detected_keywords: None,
        },
        AnalysisOutcome::NotAResume { detected_keywords } => AnalyzeResponse::SoftReject {
            message: "This file doesn't look like a resume. No analysis performed.".to_string(),
            detected_keywords: Some(detected_keywords),
        },
        AnalysisOutcome::NotClassifiedAsResume { verdict } => AnalyzeResponse::SoftReject {
            message: format!("This document appears to be '{verdict}'. Skipping resume analysis."),
            detected_keywords: None,
        },
        AnalysisOutcome::Completed {
            narrative,
            skills: Some(skills),
        } => AnalyzeResponse::Structured {
            textual_analysis: narrative,
            skills,
        },
        AnalysisOutcome::Completed {
            narrative,
            skills: None,
        } => AnalyzeResponse::Plain {
            analysis: narrative,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_reject_serializes_message_and_keywords() {
        let response = outcome_to_response(AnalysisOutcome::NotAResume {
            detected_keywords: vec!["education", "cv"],
        });
        let value = serde_json::to_value(&response).unwrap();
        assert!(value["message"].as_str().unwrap().contains("resume"));
        assert_eq!(value["detected_keywords"][1], "cv");
    }

    #[test]
    fn test_no_content_omits_keywords_field() {
        let response = outcome_to_response(AnalysisOutcome::NoContent);
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("detected_keywords").is_none());
        assert!(value["message"].as_str().unwrap().contains("scanned"));
    }

    #[test]
    fn test_classifier_reject_names_verdict() {
        let response = outcome_to_response(AnalysisOutcome::NotClassifiedAsResume {
            verdict: "invoice".to_string(),
        });
        let value = serde_json::to_value(&response).unwrap();
        assert!(value["message"].as_str().unwrap().contains("'invoice'"));
    }

    #[test]
    fn test_structured_success_shape() {
        let response = outcome_to_response(AnalysisOutcome::Completed {
            narrative: "n".to_string(),
            skills: Some(vec![]),
        });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["textual_analysis"], "n");
        assert!(value["skills"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_plain_success_shape() {
        let response = outcome_to_response(AnalysisOutcome::Completed {
            narrative: "n".to_string(),
            skills: None,
        });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["analysis"], "n");
        assert!(value.get("skills").is_none());
    }
}
