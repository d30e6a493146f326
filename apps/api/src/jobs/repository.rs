//! SQL access for the `jobs` table.
//!
//! Every statement filters on `user_id`, so a caller can only ever see or touch
//! their own rows. A row owned by someone else looks exactly like a missing row.

use chrono::{DateTime, Duration, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::dto::JobFields;
use crate::jobs::search::JobQuery;
use crate::jobs::stats::{DailyCount, StatusCount, RECENT_WINDOW_DAYS};
use crate::models::job::{Job, JobRow, JobStatus};

const LIST_JOBS_SQL: &str = "SELECT * FROM jobs WHERE user_id = $1 ORDER BY created_at DESC";

const FIND_JOB_SQL: &str = "SELECT * FROM jobs WHERE id = $1 AND user_id = $2";

const INSERT_JOB_SQL: &str = r#"
    INSERT INTO jobs
        (id, user_id, title, company, location, description, salary, job_type, status,
         application_date, notes, contact_name, contact_email, contact_phone, skills)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
    RETURNING *
"#;

const LOCK_JOB_SQL: &str = "SELECT * FROM jobs WHERE id = $1 AND user_id = $2 FOR UPDATE";

const UPDATE_JOB_SQL: &str = r#"
    UPDATE jobs SET
        title = $3, company = $4, location = $5, description = $6, salary = $7,
        job_type = $8, status = $9, application_date = $10, notes = $11,
        contact_name = $12, contact_email = $13, contact_phone = $14, skills = $15,
        updated_at = NOW()
    WHERE id = $1 AND user_id = $2
    RETURNING *
"#;

const DELETE_JOB_SQL: &str = "DELETE FROM jobs WHERE id = $1 AND user_id = $2";

const STATUS_DISTRIBUTION_SQL: &str =
    "SELECT status, COUNT(*) AS count FROM jobs WHERE user_id = $1 GROUP BY status ORDER BY status";

const RECENT_DAILY_COUNTS_SQL: &str = r#"
    SELECT to_char(application_date AT TIME ZONE 'UTC', 'YYYY-MM-DD') AS day,
           COUNT(*) AS count
    FROM jobs
    WHERE user_id = $1 AND application_date >= $2
    GROUP BY day
    ORDER BY day
"#;

fn into_job(row: JobRow) -> Result<Job, AppError> {
    let id = row.id;
    Job::try_from(row)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("job {id} has a corrupt column: {e}")))
}

fn into_jobs(rows: Vec<JobRow>) -> Result<Vec<Job>, AppError> {
    rows.into_iter().map(into_job).collect()
}

/// All jobs of a user, newest first.
pub async fn list_jobs(pool: &PgPool, user_id: Uuid) -> Result<Vec<Job>, AppError> {
    let rows = sqlx::query_as::<_, JobRow>(LIST_JOBS_SQL)
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    into_jobs(rows)
}

pub async fn find_job(pool: &PgPool, user_id: Uuid, job_id: Uuid) -> Result<Option<Job>, AppError> {
    let row = sqlx::query_as::<_, JobRow>(FIND_JOB_SQL)
        .bind(job_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    row.map(into_job).transpose()
}

pub async fn insert_job(pool: &PgPool, user_id: Uuid, fields: &JobFields) -> Result<Job, AppError> {
    let row = sqlx::query_as::<_, JobRow>(INSERT_JOB_SQL)
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&fields.title)
    .bind(&fields.company)
    .bind(&fields.location)
    .bind(&fields.description)
    .bind(&fields.salary)
    .bind(fields.job_type.as_str())
    .bind(fields.status.as_str())
    .bind(fields.application_date)
    .bind(&fields.notes)
    .bind(&fields.contact_person.name)
    .bind(&fields.contact_person.email)
    .bind(&fields.contact_person.phone)
    .bind(&fields.skills)
    .fetch_one(pool)
    .await?;

    info!("Created job {} for user {user_id}", row.id);
    into_job(row)
}

/// Read-modify-write under a row lock. `merge` receives the stored job and
/// returns the validated replacement fields; its error aborts the transaction.
pub async fn update_job<F>(
    pool: &PgPool,
    user_id: Uuid,
    job_id: Uuid,
    merge: F,
) -> Result<Option<Job>, AppError>
where
    F: FnOnce(&Job) -> Result<JobFields, AppError>,
{
    let mut tx = pool.begin().await?;

    let current = sqlx::query_as::<_, JobRow>(LOCK_JOB_SQL)
    .bind(job_id)
    .bind(user_id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(current) = current.map(into_job).transpose()? else {
        return Ok(None);
    };

    let fields = merge(&current)?;

    let row = sqlx::query_as::<_, JobRow>(UPDATE_JOB_SQL)
    .bind(job_id)
    .bind(user_id)
    .bind(&fields.title)
    .bind(&fields.company)
    .bind(&fields.location)
    .bind(&fields.description)
    .bind(&fields.salary)
    .bind(fields.job_type.as_str())
    .bind(fields.status.as_str())
    .bind(fields.application_date)
    .bind(&fields.notes)
    .bind(&fields.contact_person.name)
    .bind(&fields.contact_person.email)
    .bind(&fields.contact_person.phone)
    .bind(&fields.skills)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    info!("Updated job {job_id} for user {user_id}");
    into_job(row).map(Some)
}

/// Returns `true` when a row was deleted.
pub async fn delete_job(pool: &PgPool, user_id: Uuid, job_id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query(DELETE_JOB_SQL)
        .bind(job_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        info!("Deleted job {job_id} for user {user_id}");
    }
    Ok(deleted)
}

pub async fn search_jobs(pool: &PgPool, user_id: Uuid, query: &JobQuery) -> Result<Vec<Job>, AppError> {
    let mut qb = build_search(user_id, query);
    debug!("Job search SQL: {}", qb.sql());

    let rows = qb.build_query_as::<JobRow>().fetch_all(pool).await?;
    into_jobs(rows)
}

fn build_search(user_id: Uuid, query: &JobQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM jobs WHERE user_id = ");
    qb.push_bind(user_id);

    if let Some(pattern) = &query.search_pattern {
        qb.push(" AND (title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR company ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR location ILIKE ")
            .push_bind(pattern.clone())
            .push(")");
    }
    if let Some(status) = query.status {
        qb.push(" AND status = ").push_bind(status.as_str());
    }
    if let Some(job_type) = query.job_type {
        qb.push(" AND job_type = ").push_bind(job_type.as_str());
    }

    let direction = if query.descending { "DESC" } else { "ASC" };
    qb.push(format!(" ORDER BY {} {direction}", query.sort.column()));
    qb.push(" LIMIT ").push_bind(query.limit);
    qb
}

/// `GROUP BY status` over the user's jobs.
pub async fn status_distribution(pool: &PgPool, user_id: Uuid) -> Result<Vec<StatusCount>, AppError> {
    let rows: Vec<(String, i64)> = sqlx::query_as(STATUS_DISTRIBUTION_SQL)
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|(status, count)| {
            let status = status
                .parse::<JobStatus>()
                .map_err(|e| AppError::Internal(anyhow::anyhow!("corrupt status column: {e}")))?;
            Ok(StatusCount { status, count })
        })
        .collect()
}

/// Applications per UTC day since `now - RECENT_WINDOW_DAYS`, ascending by day.
pub async fn recent_daily_counts(
    pool: &PgPool,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Vec<DailyCount>, AppError> {
    let since = now - Duration::days(RECENT_WINDOW_DAYS);

    let rows: Vec<(String, i64)> = sqlx::query_as(RECENT_DAILY_COUNTS_SQL)
    .bind(user_id)
    .bind(since)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect())
}
