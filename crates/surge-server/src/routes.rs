use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Request, Response},
    response::Json,
    routing::{get, post},
    Form, Router,
};
use serde::Serialize;
use surge_core::{LoadTestRequest, LoadTestResult, SurgeError};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, Instrument};

use crate::error::AppError;
use crate::state::AppState;

pub fn router(state: AppState, static_dir: &str) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let api_routes = Router::new()
        .route("/load-test", post(run_load_test))
        .route("/status", get(get_status))
        .layer(trace_layer)
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
}

async fn run_load_test(
    State(state): State<AppState>,
    Form(req): Form<LoadTestRequest>,
) -> Result<Json<Option<LoadTestResult>>, AppError> {
    if req.url.is_empty() {
        return Err(SurgeError::EmptyUrl.into());
    }

    let run_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("load_test", %run_id, target = %req.url);

    async move {
        info!(qps = req.qps, c = req.c, t = req.t, "Load test started");
        match state.client.run(&req).await {
            Ok(result) => {
                info!("Load test finished");
                Ok(Json(result))
            }
            Err(e) => {
                tracing::error!("Load test failed: {}", e);
                Err(AppError::from(e))
            }
        }
    }
    .instrument(span)
    .await
}

#[derive(Serialize)]
struct StatusResponse {
    version: &'static str,
    backend_url: String,
    endpoint: String,
}

async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        version: env!("CARGO_PKG_VERSION"),
        backend_url: state.backend_url.clone(),
        endpoint: state.client.endpoint().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};
    use http_body_util::BodyExt;
    use surge_core::{SurgeConfig, FORM_CONTENT_TYPE};
    use tower::ServiceExt;
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app(backend: &MockServer) -> Router {
        let mut config = SurgeConfig::default();
        config.backend.url = backend.uri();
        router(AppState::new(&config).unwrap(), "./dist")
    }

    fn post_form(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/load-test")
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(res: Response<Body>) -> serde_json::Value {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_forwards_to_backend() {
        let backend = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/load-test"))
            .and(body_string("url=http%3A%2F%2Fsvc%2F&qps=5&c=1&t=1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"ActualQPS": 5.0, "NumThreads": 1}"#),
            )
            .expect(1)
            .mount(&backend)
            .await;

        let res = app(&backend)
            .oneshot(post_form("url=http%3A%2F%2Fsvc%2F&qps=5&c=1&t=1"))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res).await;
        assert_eq!(body["NumThreads"], 1);
    }

    #[tokio::test]
    async fn test_empty_url_rejected_without_backend_call() {
        let backend = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&backend)
            .await;

        let res = app(&backend)
            .oneshot(post_form("url=&qps=5&c=1&t=1"))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = json_body(res).await;
        assert_eq!(body["error"], "URL for the load test is required");
    }

    #[tokio::test]
    async fn test_backend_failure_is_bad_gateway() {
        let backend = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("engine down"))
            .mount(&backend)
            .await;

        let res = app(&backend)
            .oneshot(post_form("url=http%3A%2F%2Fsvc%2F&qps=5&c=1&t=1"))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(res).await;
        assert_eq!(
            body["error"],
            "Load test backend returned 500: engine down"
        );
    }

    #[tokio::test]
    async fn test_backend_client_error_passes_through() {
        let backend = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad target"))
            .mount(&backend)
            .await;

        let res = app(&backend)
            .oneshot(post_form("url=nope&qps=5&c=1&t=1"))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(res).await["error"], "bad target");
    }

    #[tokio::test]
    async fn test_status_reports_backend() {
        let backend = MockServer::start().await;
        let res = app(&backend)
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res).await;
        assert_eq!(body["backend_url"], backend.uri());
        assert_eq!(
            body["endpoint"],
            format!("{}/api/load-test", backend.uri())
        );
    }
}
