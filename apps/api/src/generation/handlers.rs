//! Axum route handlers for the generation API. Handlers validate required
//! fields, then delegate to the pure functions in this module tree.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::formatter::{format_resume, ResumeRequest};
use crate::generation::letter::{compose_cover_letter, CoverLetterRequest};
use crate::generation::rewriter::{improve_text, DEFAULT_TONE};
use crate::generation::scoring::{score_resume, ScoreReport, ScoreRequest};

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImproveRequest {
    pub text: String,
    #[serde(default = "default_tone")]
    pub tone: String,
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-resume
///
/// Renders the structured form input into a plain-text resume.
pub async fn handle_generate_resume(
    Json(request): Json<ResumeRequest>,
) -> Result<String, AppError> {
    if request.full_name.trim().is_empty() {
        return Err(AppError::Validation("full_name cannot be empty".to_string()));
    }
    if request.target_title.trim().is_empty() {
        return Err(AppError::Validation(
            "target_title cannot be empty".to_string(),
        ));
    }

    Ok(format_resume(&request))
}

/// POST /api/improve-resume
///
/// Rewrites free-form resume text line by line and appends suggestions.
pub async fn handle_improve_resume(
    Json(request): Json<ImproveRequest>,
) -> Result<String, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    Ok(improve_text(&request.text, &request.tone))
}

/// POST /api/cover-letter
///
/// Composes a three-paragraph cover letter for the given role.
pub async fn handle_cover_letter(
    Json(request): Json<CoverLetterRequest>,
) -> Result<String, AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }

    Ok(compose_cover_letter(&request))
}

/// POST /api/score-resume
///
/// Scores resume text for ATS compatibility and returns the full report.
pub async fn handle_score_resume(
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreReport>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    Ok(Json(score_resume(&request)))
}
