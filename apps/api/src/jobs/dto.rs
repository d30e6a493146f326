//! Request payloads for the Jobs API and their validation into `JobFields`.
//!
//! Enum and date fields arrive as strings so that bad values surface as
//! `AppError::Validation` with a readable message instead of a serde rejection.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::job::{ContactPerson, Job, JobStatus, JobType};

/// The user-writable part of a job application.
#[derive(Debug, Clone, PartialEq)]
pub struct JobFields {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary: Option<String>,
    pub job_type: JobType,
    pub status: JobStatus,
    pub application_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub contact_person: ContactPerson,
    pub skills: Vec<String>,
}

impl JobFields {
    /// The four core text fields must be non-blank. Nothing else is bounded.
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, value) in [
            ("title", &self.title),
            ("company", &self.company),
            ("location", &self.location),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{name} is required")));
            }
        }
        Ok(())
    }
}

impl From<&Job> for JobFields {
    fn from(job: &Job) -> Self {
        JobFields {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            description: job.description.clone(),
            salary: job.salary.clone(),
            job_type: job.job_type,
            status: job.status,
            application_date: job.application_date,
            notes: job.notes.clone(),
            contact_person: job.contact_person.clone(),
            skills: job.skills.clone(),
        }
    }
}

/// Body of `POST /api/jobs`. Unknown keys (including `userId`) are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub salary: Option<String>,
    pub job_type: Option<String>,
    pub status: Option<String>,
    pub application_date: Option<String>,
    pub notes: Option<String>,
    pub contact_person: Option<ContactPerson>,
    pub skills: Option<Vec<String>>,
}

impl CreateJobRequest {
    pub fn into_fields(self, now: DateTime<Utc>) -> Result<JobFields, AppError> {
        let fields = JobFields {
            title: trimmed(self.title).unwrap_or_default(),
            company: trimmed(self.company).unwrap_or_default(),
            location: trimmed(self.location).unwrap_or_default(),
            description: trimmed(self.description).unwrap_or_default(),
            salary: trimmed(self.salary),
            job_type: parse_optional::<JobType>(self.job_type.as_deref())?.unwrap_or_default(),
            status: parse_optional::<JobStatus>(self.status.as_deref())?.unwrap_or_default(),
            application_date: parse_optional_date(self.application_date.as_deref())?
                .unwrap_or(now),
            notes: trimmed(self.notes),
            contact_person: self.contact_person.map(clean_contact).unwrap_or_default(),
            skills: clean_skills(self.skills.unwrap_or_default()),
        };
        fields.validate()?;
        Ok(fields)
    }
}

/// Body of `PUT /api/jobs/:id`. Every key is optional; supplied keys replace stored values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub salary: Option<String>,
    pub job_type: Option<String>,
    pub status: Option<String>,
    pub application_date: Option<String>,
    pub notes: Option<String>,
    pub contact_person: Option<ContactPerson>,
    pub skills: Option<Vec<String>>,
}

impl UpdateJobRequest {
    /// Merges this patch over `current` and validates the result.
    pub fn apply(self, current: &Job) -> Result<JobFields, AppError> {
        let mut fields = JobFields::from(current);

        if let Some(title) = self.title {
            fields.title = title.trim().to_string();
        }
        if let Some(company) = self.company {
            fields.company = company.trim().to_string();
        }
        if let Some(location) = self.location {
            fields.location = location.trim().to_string();
        }
        if let Some(description) = self.description {
            fields.description = description.trim().to_string();
        }
        if self.salary.is_some() {
            fields.salary = trimmed(self.salary);
        }
        if let Some(job_type) = parse_optional::<JobType>(self.job_type.as_deref())? {
            fields.job_type = job_type;
        }
        if let Some(status) = parse_optional::<JobStatus>(self.status.as_deref())? {
            fields.status = status;
        }
        if let Some(date) = parse_optional_date(self.application_date.as_deref())? {
            fields.application_date = date;
        }
        if self.notes.is_some() {
            fields.notes = trimmed(self.notes);
        }
        if let Some(contact) = self.contact_person {
            fields.contact_person = clean_contact(contact);
        }
        if let Some(skills) = self.skills {
            fields.skills = clean_skills(skills);
        }

        fields.validate()?;
        Ok(fields)
    }
}

/// Blank strings count as absent.
fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn clean_contact(contact: ContactPerson) -> ContactPerson {
    ContactPerson {
        name: trimmed(contact.name),
        email: trimmed(contact.email),
        phone: trimmed(contact.phone),
    }
}

fn clean_skills(skills: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let skill = skill.trim();
        if !skill.is_empty() && !out.iter().any(|s| s == skill) {
            out.push(skill.to_string());
        }
    }
    out
}

pub(crate) fn parse_optional<T>(raw: Option<&str>) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Validation(e.to_string())),
        None => Ok(None),
    }
}

/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates (midnight UTC).
fn parse_optional_date(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Some(dt.and_utc()))
        .ok_or_else(|| {
            AppError::Validation(format!(
                "applicationDate '{raw}' must be an RFC 3339 timestamp or YYYY-MM-DD date"
            ))
        })
}
