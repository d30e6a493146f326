use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

/// Raised when a stored or submitted enum label is not one of the known values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field} '{value}'. Expected one of: {expected}")]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
    pub expected: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
    Withdrawn,
}

impl JobStatus {
    pub const ALL: [JobStatus; 5] = [
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Offer,
        JobStatus::Rejected,
        JobStatus::Withdrawn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interview => "Interview",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
            JobStatus::Withdrawn => "Withdrawn",
        }
    }
}

fn parse_label<T: Copy>(
    field: &'static str,
    raw: &str,
    all: &[T],
    label: impl Fn(T) -> &'static str,
) -> Result<T, UnknownVariant> {
    all.iter()
        .copied()
        .find(|v| label(*v) == raw)
        .ok_or_else(|| UnknownVariant {
            field,
            value: raw.to_string(),
            expected: all.iter().map(|v| label(*v)).collect::<Vec<_>>().join(", "),
        })
}

impl FromStr for JobType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("jobType", s, &JobType::ALL, JobType::as_str)
    }
}

impl FromStr for JobStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("status", s, &JobStatus::ALL, JobStatus::as_str)
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPerson {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// One row of the `jobs` table. Enum columns are plain TEXT guarded by CHECK constraints.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary: Option<String>,
    pub job_type: String,
    pub status: String,
    pub application_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A tracked job application as exposed over the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Serialized as `_id`, the key the browser client routes on.
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_id: Uuid,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for Job {
    type Error = UnknownVariant;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        Ok(Job {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            company: row.company,
            location: row.location,
            description: row.description,
            salary: row.salary,
            job_type: row.job_type.parse()?,
            status: row.status.parse()?,
            application_date: row.application_date,
            notes: row.notes,
            contact_person: ContactPerson {
                name: row.contact_name,
                email: row.contact_email,
                phone: row.contact_phone,
            },
            skills: row.skills,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_row() -> JobRow {
        let now = Utc::now();
        JobRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Frontend Developer".to_string(),
            company: "TechCorp".to_string(),
            location: "San Francisco, CA".to_string(),
            description: "Build amazing user interfaces with React and TypeScript.".to_string(),
            salary: Some("$80,000 - $120,000".to_string()),
            job_type: "Full-time".to_string(),
            status: "Interview".to_string(),
            application_date: now,
            notes: None,
            contact_name: Some("Ada".to_string()),
            contact_email: None,
            contact_phone: None,
            skills: vec!["React".to_string(), "TypeScript".to_string()],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_job_type_labels_round_trip() {
        for t in JobType::ALL {
            assert_eq!(t.as_str().parse::<JobType>().unwrap(), t);
        }
        assert_eq!(serde_json::to_value(JobType::PartTime).unwrap(), json!("Part-time"));
    }

    #[test]
    fn test_status_parse_is_case_sensitive() {
        assert_eq!("Offer".parse::<JobStatus>().unwrap(), JobStatus::Offer);
        let err = "offer".parse::<JobStatus>().unwrap_err();
        assert_eq!(err.field, "status");
        assert!(err.to_string().contains("Applied, Interview, Offer, Rejected, Withdrawn"));
    }

    #[test]
    fn test_defaults_match_schema_defaults() {
        assert_eq!(JobType::default(), JobType::FullTime);
        assert_eq!(JobStatus::default(), JobStatus::Applied);
    }

    #[test]
    fn test_row_converts_and_serializes_camel_case() {
        let job = Job::try_from(sample_row()).unwrap();
        assert_eq!(job.status, JobStatus::Interview);

        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["jobType"], json!("Full-time"));
        assert_eq!(value["status"], json!("Interview"));
        assert_eq!(value["contactPerson"]["name"], json!("Ada"));
        assert_eq!(value["_id"], json!(job.id.to_string()));
        assert!(value.get("id").is_none());
        assert!(value.get("userId").is_some());
        assert!(value.get("applicationDate").is_some());
    }

    #[test]
    fn test_row_with_unknown_status_is_rejected() {
        let mut row = sample_row();
        row.status = "Ghosted".to_string();
        assert!(Job::try_from(row).is_err());
    }
}
