//! Axum route handlers for the Resume API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::resume::analyzer::{analyze_text, ResumeAnalysis};
use crate::resume::job_match::{JobMatchReport, UserSkills};
use crate::resume::pdf::{extract_pdf_text, looks_like_pdf};
use crate::resume::scan::scan_basic_keywords;
use crate::state::AppState;

/// Multipart field carrying the file.
const RESUME_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiSuccess<T> {
    fn new(data: T) -> Self {
        ApiSuccess {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMeta {
    pub file_name: String,
    pub file_size: usize,
    pub processed_at: DateTime<Utc>,
    pub text_length: usize,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub result: ResumeAnalysis,
    #[serde(rename = "analysis")]
    pub upload: UploadMeta,
}

#[derive(Debug, Serialize)]
pub struct SimpleAnalyzeResponse {
    pub skills: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchRequest {
    pub job_description: Option<String>,
    pub user_skills: Option<UserSkills>,
}

/// A validated PDF upload held in memory.
#[derive(Debug)]
struct ResumeUpload {
    file_name: String,
    data: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Upload parsing
// ────────────────────────────────────────────────────────────────────────────

fn multipart_error(err: axum::extract::multipart::MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Resume file is too large".to_string())
    } else {
        AppError::Validation(format!("Malformed upload: {}", err.body_text()))
    }
}

/// Pulls the `resume` field out of the form, enforcing size and PDF checks.
async fn read_resume_upload(
    multipart: Result<Multipart, MultipartRejection>,
    max_bytes: usize,
) -> Result<ResumeUpload, AppError> {
    let no_file = || AppError::Validation("No file uploaded".to_string());
    let mut multipart = multipart.map_err(|e| {
        debug!("Rejected resume upload: {e}");
        no_file()
    })?;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(multipart_error)?;

        if data.is_empty() {
            return Err(no_file());
        }
        if data.len() > max_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "Resume file must be at most {} MB",
                max_bytes / (1024 * 1024)
            )));
        }
        if !looks_like_pdf(content_type.as_deref(), &data) {
            return Err(AppError::Validation("Only PDF files are allowed".to_string()));
        }

        return Ok(ResumeUpload { file_name, data });
    }

    Err(no_file())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resume/analyze
///
/// Multipart upload (field `resume`). Returns categorized skills, extracted
/// contact/background hints and recommendations.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiSuccess<AnalyzeResponse>>, AppError> {
    let upload = read_resume_upload(multipart, state.config.max_upload_bytes).await?;
    let file_size = upload.data.len();
    let text = extract_pdf_text(upload.data).await?;

    let analysis = analyze_text(&text);
    info!(
        "Analyzed resume '{}' ({file_size} bytes): {} skills, coverage {}",
        upload.file_name, analysis.total_skills, analysis.extracted_info.skill_coverage
    );

    Ok(Json(ApiSuccess::new(AnalyzeResponse {
        result: analysis,
        upload: UploadMeta {
            file_name: upload.file_name,
            file_size,
            processed_at: Utc::now(),
            text_length: text.chars().count(),
        },
    })))
}

/// POST /api/resume/analyze-simple
///
/// Flat keyword scan kept for older clients.
pub async fn handle_analyze_simple(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SimpleAnalyzeResponse>, AppError> {
    let upload = read_resume_upload(multipart, state.config.max_upload_bytes).await?;
    let text = extract_pdf_text(upload.data).await?;
    Ok(Json(SimpleAnalyzeResponse {
        skills: scan_basic_keywords(&text),
    }))
}

/// POST /api/resume/job-match
///
/// Scores a job description against the caller's categorized skills.
pub async fn handle_job_match(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(request): AppJson<JobMatchRequest>,
) -> Result<Json<ApiSuccess<JobMatchReport>>, AppError> {
    let description = request
        .job_description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());

    let (Some(description), Some(user_skills)) = (description, request.user_skills.as_ref())
    else {
        return Err(AppError::Validation(
            "Job description and user skills are required".to_string(),
        ));
    };

    let report = state.job_matcher.score(description, user_skills).await?;
    debug!(
        "Job match for user {}: {} ({} required skills)",
        user.id, report.match_score, report.total_required_skills
    );

    Ok(Json(ApiSuccess::new(report)))
}
