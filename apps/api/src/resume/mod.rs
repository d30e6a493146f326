// Resume analysis: PDF text extraction, taxonomy skill scan, regex field
// extraction, recommendation rules and job-match scoring.

pub mod analyzer;
pub mod handlers;
pub mod info;
pub mod job_match;
pub mod pdf;
pub mod recommendations;
pub mod scan;
pub mod taxonomy;
