//! Axum route handlers for the Jobs API. All routes sit behind `require_auth`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::jobs::dto::{CreateJobRequest, UpdateJobRequest};
use crate::jobs::repository;
use crate::jobs::search::SearchParams;
use crate::jobs::stats::DashboardStats;
use crate::models::job::Job;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DeleteJobResponse {
    pub message: String,
}

fn parse_job_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::Validation(format!("Invalid job id '{raw}'")))
}

fn job_not_found() -> AppError {
    AppError::NotFound("Job not found".to_string())
}

/// GET /api/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Job>>, AppError> {
    let jobs = repository::list_jobs(&state.db, user.id).await?;
    Ok(Json(jobs))
}

/// GET /api/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    let job_id = parse_job_id(&id)?;
    let job = repository::find_job(&state.db, user.id, job_id)
        .await?
        .ok_or_else(job_not_found)?;
    Ok(Json(job))
}

/// POST /api/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(request): AppJson<CreateJobRequest>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    let fields = request.into_fields(Utc::now())?;
    let job = repository::insert_job(&state.db, user.id, &fields).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/jobs/:id
///
/// Partial update: keys present in the body replace stored values.
pub async fn handle_update_job(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    AppJson(request): AppJson<UpdateJobRequest>,
) -> Result<Json<Job>, AppError> {
    let job_id = parse_job_id(&id)?;
    let job = repository::update_job(&state.db, user.id, job_id, |current| {
        request.apply(current)
    })
    .await?
    .ok_or_else(job_not_found)?;
    Ok(Json(job))
}

/// DELETE /api/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteJobResponse>, AppError> {
    let job_id = parse_job_id(&id)?;
    if !repository::delete_job(&state.db, user.id, job_id).await? {
        return Err(job_not_found());
    }
    Ok(Json(DeleteJobResponse {
        message: "Job application deleted successfully".to_string(),
    }))
}

/// GET /api/jobs/stats
pub async fn handle_dashboard_stats(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<DashboardStats>, AppError> {
    let distribution = repository::status_distribution(&state.db, user.id).await?;
    let recent = repository::recent_daily_counts(&state.db, user.id, Utc::now()).await?;
    Ok(Json(DashboardStats::from_aggregates(distribution, recent)))
}

/// GET /api/jobs/search
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Job>>, AppError> {
    let query = params.into_query()?;
    let jobs = repository::search_jobs(&state.db, user.id, &query).await?;
    Ok(Json(jobs))
}
