//! Status endpoint DTOs

use serde::Serialize;

use crate::domain::credentials::Credentials;
use crate::domain::job::{Job, ReportStatus};

/// Form body sent to the status endpoint for one job
///
/// The flag fields are strings on the wire (`"0"` / `"1"`).
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub username: String,
    pub password: String,
    pub id: String,
    pub status: ReportStatus,
    pub reset: String,
    pub printed: String,
    pub error_code: String,
}

impl StatusReport {
    /// Report declaring `job` printed without error
    pub fn completed(credentials: &Credentials, job: &Job) -> Self {
        Self {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            id: job.id.clone(),
            status: ReportStatus::Completed,
            reset: "0".to_string(),
            printed: "1".to_string(),
            error_code: "0".to_string(),
        }
    }
}

/// What the status endpoint answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusAck {
    pub status: u16,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_report_fields() {
        let creds = Credentials::new("ReceiptPrinterPi", "blueberry");
        let report = StatusReport::completed(&creds, &Job::new("abc", "payload"));

        assert_eq!(report.username, "ReceiptPrinterPi");
        assert_eq!(report.password, "blueberry");
        assert_eq!(report.id, "abc");
        assert_eq!(report.status, ReportStatus::Completed);
        assert_eq!(report.reset, "0");
        assert_eq!(report.printed, "1");
        assert_eq!(report.error_code, "0");
    }
}
