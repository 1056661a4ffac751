use gloo_net::http::Request;
use surge_core::{ErrorBody, LoadTestRequest, LoadTestResult, FORM_CONTENT_TYPE, LOAD_TEST_PATH};
use web_sys::RequestCredentials;

/// POST one load test and wait for the run summary.
pub async fn submit_load_test(request: &LoadTestRequest) -> Result<Option<LoadTestResult>, String> {
    let params = request.encode().map_err(|e| e.to_string())?;
    web_sys::console::log_1(&format!("data to be submitted for load test: {}", params).into());

    let resp = Request::post(LOAD_TEST_PATH)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(params)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let body = resp.text().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(ErrorBody::message(resp.status(), &body));
    }

    LoadTestResult::parse(&body).map_err(|e| e.to_string())
}
