use serde::Serialize;

use crate::models::job::JobStatus;

/// Number of days (including today) covered by `recentApplications`.
pub const RECENT_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: JobStatus,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyCount {
    /// UTC calendar day, `YYYY-MM-DD`.
    pub date: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_jobs: i64,
    pub interview_count: i64,
    pub offer_count: i64,
    pub rejected_count: i64,
    /// Offers as a percentage of all applications, one decimal place.
    pub success_rate: f64,
    pub status_distribution: Vec<StatusCount>,
    pub recent_applications: Vec<DailyCount>,
}

impl DashboardStats {
    /// Assembles the dashboard from the two database aggregations.
    pub fn from_aggregates(
        status_distribution: Vec<StatusCount>,
        recent_applications: Vec<DailyCount>,
    ) -> Self {
        let count_of = |status: JobStatus| {
            status_distribution
                .iter()
                .filter(|s| s.status == status)
                .map(|s| s.count)
                .sum::<i64>()
        };

        let total_jobs: i64 = status_distribution.iter().map(|s| s.count).sum();
        let offer_count = count_of(JobStatus::Offer);

        DashboardStats {
            total_jobs,
            interview_count: count_of(JobStatus::Interview),
            offer_count,
            rejected_count: count_of(JobStatus::Rejected),
            success_rate: success_rate(offer_count, total_jobs),
            status_distribution,
            recent_applications,
        }
    }
}

fn success_rate(offers: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let pct = offers as f64 / total as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}
