pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth_handlers;
use crate::auth::middleware::require_auth;
use crate::jobs::handlers as job_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit =
        DefaultBodyLimit::max(state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES);

    // Everything here requires a valid bearer token.
    let protected = Router::new()
        .route("/api/auth/me", get(auth_handlers::handle_me))
        .route(
            "/api/jobs",
            get(job_handlers::handle_list_jobs).post(job_handlers::handle_create_job),
        )
        .route("/api/jobs/stats", get(job_handlers::handle_dashboard_stats))
        .route("/api/jobs/search", get(job_handlers::handle_search_jobs))
        .route(
            "/api/jobs/:id",
            get(job_handlers::handle_get_job)
                .put(job_handlers::handle_update_job)
                .delete(job_handlers::handle_delete_job),
        )
        .route("/api/resume/job-match", post(resume_handlers::handle_job_match))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    let uploads = Router::new()
        .route("/api/resume/analyze", post(resume_handlers::handle_analyze))
        .route(
            "/api/resume/analyze-simple",
            post(resume_handlers::handle_analyze_simple),
        )
        .layer(upload_limit);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/auth/signup", post(auth_handlers::handle_signup))
        .route("/api/auth/login", post(auth_handlers::handle_login))
        .merge(uploads)
        .merge(protected)
        .with_state(state)
}
