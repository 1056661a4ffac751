use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use surge_core::{
    BackendConfig, LoadTestRequest, LoadTestResult, Result, SurgeError, FORM_CONTENT_TYPE,
    LOAD_TEST_PATH,
};

#[derive(Debug, Clone)]
pub struct LoadTestClient {
    endpoint: String,
    client: reqwest::Client,
}

impl LoadTestClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: endpoint(base_url, LOAD_TEST_PATH),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| SurgeError::Http(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint(&config.url, &config.path),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one load test and wait for its summary.
    ///
    /// `Ok(None)` means the backend answered successfully without a payload.
    pub async fn run(&self, request: &LoadTestRequest) -> Result<Option<LoadTestResult>> {
        let params = request.encode()?;
        tracing::info!("Submitting load test to {}: {}", self.endpoint, params);

        let resp = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(params)
            .send()
            .await
            .map_err(|e| SurgeError::Http(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| SurgeError::Http(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!("Load test rejected with {}", status);
            return Err(SurgeError::Status {
                status: status.as_u16(),
                body: body.chars().take(500).collect(),
            });
        }

        LoadTestResult::parse(&body)
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const RESULT: &str = r#"{
        "RequestedQPS": "50",
        "ActualQPS": 49.9,
        "NumThreads": 2,
        "DurationHistogram": {
            "Count": 100,
            "Data": [{"Start": 0.001, "End": 0.002, "Percent": 100, "Count": 100}]
        },
        "RetCodes": {"200": 100}
    }"#;

    fn request() -> LoadTestRequest {
        LoadTestRequest {
            url: "http://target/".to_string(),
            qps: 50,
            c: 2,
            t: 1,
        }
    }

    #[test]
    fn test_endpoint_joins_slashes() {
        assert_eq!(
            endpoint("http://engine:8080/", "/api/load-test"),
            "http://engine:8080/api/load-test"
        );
        assert_eq!(endpoint("http://e", "run"), "http://e/run");
    }

    #[tokio::test]
    async fn test_run_posts_form_and_parses_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/load-test"))
            .and(header("content-type", FORM_CONTENT_TYPE))
            .and(body_string("url=http%3A%2F%2Ftarget%2F&qps=50&c=2&t=1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(RESULT))
            .expect(1)
            .mount(&server)
            .await;

        let client = LoadTestClient::new(&server.uri());
        let result = client.run(&request()).await.unwrap().unwrap();

        assert_eq!(result.num_threads, 2);
        assert_eq!(result.duration_histogram.count, 100);
    }

    #[tokio::test]
    async fn test_error_status_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("fortio crashed"))
            .expect(1)
            .mount(&server)
            .await;

        let client = LoadTestClient::new(&server.uri());
        let err = client.run(&request()).await.unwrap_err();

        match err {
            SurgeError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "fortio crashed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_empty_body_is_no_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = LoadTestClient::new(&server.uri());
        assert!(client.run(&request()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_configured_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/fortio/rest/run"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let config = BackendConfig {
            url: server.uri(),
            path: "/fortio/rest/run".to_string(),
            timeout_secs: Some(5),
        };
        let client = LoadTestClient::from_config(&config).unwrap();
        let result = client.run(&request()).await.unwrap().unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_http_error() {
        let client = LoadTestClient::new("http://127.0.0.1:1");
        let err = client.run(&request()).await.unwrap_err();
        assert!(matches!(err, SurgeError::Http(_)));
    }
}
