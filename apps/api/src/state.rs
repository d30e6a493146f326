use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::token::JwtKeys;
use crate::config::Config;
use crate::resume::job_match::JobMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub jwt: JwtKeys,
    /// Pluggable job-match scorer. Default: TaxonomyJobMatcher.
    pub job_matcher: Arc<dyn JobMatcher>,
}

impl AppState {
    pub fn new(db: PgPool, config: Config, job_matcher: Arc<dyn JobMatcher>) -> Self {
        let jwt = JwtKeys::new(&config.jwt_secret, config.jwt_expiry_hours);
        AppState {
            db,
            config,
            jwt,
            job_matcher,
        }
    }
}
