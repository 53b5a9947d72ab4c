//! Job-related endpoints: lookup and status reporting

use crate::PrintServerClient;
use crate::error::Result;
use spool_core::domain::job::Job;
use spool_core::dto::lookup::{LookupRequest, LookupResponse};
use spool_core::dto::status::{StatusAck, StatusReport};
use tracing::debug;

impl PrintServerClient {
    // =============================================================================
    // Job Lookup
    // =============================================================================

    /// Fetch the pending print jobs
    ///
    /// Sends the credentials and protocol version to the lookup endpoint.
    ///
    /// # Returns
    /// The raw lookup response; use [`LookupResponse::into_jobs`] to pair
    /// ids with payloads.
    pub async fn lookup_jobs(&self) -> Result<LookupResponse> {
        debug!("Looking up print jobs at {}", self.lookup_url);

        let response = self
            .client
            .post(&self.lookup_url)
            .form(&LookupRequest::new(&self.credentials))
            .send()
            .await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Status Reporting
    // =============================================================================

    /// Report a job as printed
    ///
    /// # Arguments
    /// * `job` - The job to declare completed
    ///
    /// # Returns
    /// The status code and body the endpoint answered with
    pub async fn report_status(&self, job: &Job) -> Result<StatusAck> {
        debug!("Reporting job {} to {}", job.id, self.status_url);

        let response = self
            .client
            .post(&self.status_url)
            .form(&StatusReport::completed(&self.credentials, job))
            .send()
            .await?;

        self.handle_text_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{ClientError, PrintServerClient};
    use spool_core::domain::credentials::Credentials;
    use spool_core::domain::job::Job;
    use std::collections::HashMap;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PrintServerClient {
        PrintServerClient::new(
            format!("{}/lookup", server.uri()),
            format!("{}/update", server.uri()),
            Credentials::new("ReceiptPrinterPi", "blueberry"),
        )
        .unwrap()
    }

    fn form_fields(body: &[u8]) -> HashMap<String, String> {
        url::form_urlencoded::parse(body).into_owned().collect()
    }

    #[tokio::test]
    async fn test_lookup_sends_credentials_and_version() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/lookup"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("version=2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "pass": true,
                "version": 5,
                "ids": ["a", "b"],
                "data": ["x", "y"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client.lookup_jobs().await.unwrap();
        let jobs: Vec<Job> = response.into_jobs().collect();
        assert_eq!(jobs, vec![Job::new("a", "x"), Job::new("b", "y")]);

        let requests = server.received_requests().await.unwrap();
        let fields = form_fields(&requests[0].body);
        assert_eq!(fields["username"], "ReceiptPrinterPi");
        assert_eq!(fields["password"], "blueberry");
        assert_eq!(fields["version"], "2");
    }

    #[tokio::test]
    async fn test_lookup_without_ids_is_empty() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/lookup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "pass": true
            })))
            .mount(&server)
            .await;

        let response = client_for(&server).lookup_jobs().await.unwrap();
        assert_eq!(response.into_jobs().count(), 0);
    }

    #[tokio::test]
    async fn test_lookup_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/lookup"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server).lookup_jobs().await.unwrap_err();
        assert!(err.is_server_error());
        assert!(matches!(err, ClientError::ApiError { status: 500, ref message } if message == "boom"));
    }

    #[tokio::test]
    async fn test_lookup_malformed_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/lookup"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).lookup_jobs().await.unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_lookup_wrong_shape() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/lookup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ids": "not-an-array"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).lookup_jobs().await.unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_report_sends_completed_form() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/update"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let ack = client.report_status(&Job::new("42", "receipt")).await.unwrap();
        assert_eq!(ack.status, 200);
        assert_eq!(ack.body, "ok");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let fields = form_fields(&requests[0].body);
        assert_eq!(fields["username"], "ReceiptPrinterPi");
        assert_eq!(fields["password"], "blueberry");
        assert_eq!(fields["id"], "42");
        assert_eq!(fields["status"], "Completed");
        assert_eq!(fields["reset"], "0");
        assert_eq!(fields["printed"], "1");
        assert_eq!(fields["error_code"], "0");
        assert!(!fields.contains_key("data"));
    }

    #[tokio::test]
    async fn test_report_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/update"))
            .respond_with(ResponseTemplate::new(403).set_body_string("denied"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .report_status(&Job::new("1", "x"))
            .await
            .unwrap_err();
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_report_unreachable_endpoint() {
        // Bind then release a port so nothing is listening on it.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = PrintServerClient::new(
            format!("http://{}/lookup", addr),
            format!("http://{}/update", addr),
            Credentials::new("ReceiptPrinterPi", "blueberry"),
        )
        .unwrap();

        let err = client
            .report_status(&Job::new("1", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::RequestFailed(_)));
    }
}
