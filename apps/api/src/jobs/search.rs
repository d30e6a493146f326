use serde::Deserialize;

use crate::errors::AppError;
use crate::jobs::dto::parse_optional;
use crate::models::job::{JobStatus, JobType};

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 500;

/// Raw query string of `GET /api/jobs/search`. Everything arrives as text and is
/// checked in [`SearchParams::into_query`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub job_type: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    ApplicationDate,
    Title,
    Company,
    Status,
}

impl SortField {
    /// Column name interpolated into ORDER BY. Only these fixed strings ever reach SQL.
    pub fn column(self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
            SortField::ApplicationDate => "application_date",
            SortField::Title => "title",
            SortField::Company => "company",
            SortField::Status => "status",
        }
    }

    fn parse(raw: &str) -> Result<Self, AppError> {
        match raw {
            "createdAt" => Ok(SortField::CreatedAt),
            "updatedAt" => Ok(SortField::UpdatedAt),
            "applicationDate" => Ok(SortField::ApplicationDate),
            "title" => Ok(SortField::Title),
            "company" => Ok(SortField::Company),
            "status" => Ok(SortField::Status),
            other => Err(AppError::Validation(format!(
                "Cannot sort by '{other}'. Expected one of: createdAt, updatedAt, applicationDate, title, company, status"
            ))),
        }
    }
}

/// Validated search filters.
#[derive(Debug, Clone, PartialEq)]
pub struct JobQuery {
    /// Already escaped for use inside an ILIKE pattern.
    pub search_pattern: Option<String>,
    pub status: Option<JobStatus>,
    pub job_type: Option<JobType>,
    pub sort: SortField,
    pub descending: bool,
    pub limit: i64,
}

impl SearchParams {
    pub fn into_query(self) -> Result<JobQuery, AppError> {
        let search_pattern = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", escape_like(s)));

        let sort = match self.sort_by.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => SortField::parse(raw)?,
            _ => SortField::default(),
        };

        Ok(JobQuery {
            search_pattern,
            status: parse_optional(self.status.as_deref())?,
            job_type: parse_optional(self.job_type.as_deref())?,
            sort,
            descending: !matches!(self.sort_order.as_deref(), Some("asc")),
            limit: parse_limit(self.limit.as_deref()),
        })
    }
}

/// Missing, unparseable or zero limits fall back to the default.
fn parse_limit(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .map(|n| n.min(MAX_LIMIT))
        .unwrap_or(DEFAULT_LIMIT)
}

/// Escapes `\`, `%` and `_` so user input matches literally under LIKE/ILIKE.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let q = SearchParams::default().into_query().unwrap();
        assert_eq!(q.search_pattern, None);
        assert_eq!(q.sort, SortField::CreatedAt);
        assert!(q.descending);
        assert_eq!(q.limit, 50);
    }

    #[test]
    fn test_search_term_is_wrapped_and_escaped() {
        let q = SearchParams {
            search: Some(" 100%_remote ".to_string()),
            ..Default::default()
        }
        .into_query()
        .unwrap();
        assert_eq!(q.search_pattern.as_deref(), Some("%100\\%\\_remote%"));
    }

    #[test]
    fn test_filters_parse_enum_labels() {
        let q = SearchParams {
            status: Some("Rejected".to_string()),
            job_type: Some("Internship".to_string()),
            ..Default::default()
        }
        .into_query()
        .unwrap();
        assert_eq!(q.status, Some(JobStatus::Rejected));
        assert_eq!(q.job_type, Some(JobType::Internship));
    }

    #[test]
    fn test_unknown_filter_values_are_rejected() {
        let bad_status = SearchParams {
            status: Some("Pending".to_string()),
            ..Default::default()
        };
        assert!(matches!(bad_status.into_query(), Err(AppError::Validation(_))));

        let bad_sort = SearchParams {
            sort_by: Some("salary; DROP TABLE jobs".to_string()),
            ..Default::default()
        };
        assert!(matches!(bad_sort.into_query(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_sort_order_only_asc_is_ascending() {
        for (raw, descending) in [("asc", false), ("desc", true), ("ASC", true), ("", true)] {
            let q = SearchParams {
                sort_by: Some("title".to_string()),
                sort_order: Some(raw.to_string()),
                ..Default::default()
            }
            .into_query()
            .unwrap();
            assert_eq!(q.sort.column(), "title");
            assert_eq!(q.descending, descending, "sortOrder={raw}");
        }
    }

    #[test]
    fn test_limit_parsing() {
        assert_eq!(parse_limit(Some("10")), 10);
        assert_eq!(parse_limit(Some("0")), 50);
        assert_eq!(parse_limit(Some("-3")), 50);
        assert_eq!(parse_limit(Some("ten")), 50);
        assert_eq!(parse_limit(Some("100000")), 500);
        assert_eq!(parse_limit(None), 50);
    }
}
