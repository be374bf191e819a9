//! REST API endpoint for vulnerability triage

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::{OpenApi, ToSchema};

use crate::api::error::{ApiError, ErrorResponse};
use crate::model::{Severity, VulnerabilityReport};
use crate::service::TriageService;

/// Request body for the triage endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct TriageRequest {
    /// Raw finding text to analyze
    pub input: String,
}

/// Analyze a raw finding and return a structured triage report
///
/// Neither the submitted finding nor the report is stored anywhere.
#[utoipa::path(
    post,
    path = "/v1/triage",
    request_body = TriageRequest,
    responses(
        (status = 200, description = "Finding triaged successfully", body = VulnerabilityReport),
        (status = 400, description = "Empty finding text", body = ErrorResponse),
        (status = 500, description = "Service is not configured", body = ErrorResponse),
        (status = 502, description = "Generative backend failed or returned an unusable response", body = ErrorResponse)
    ),
    tag = "triage"
)]
#[post("/v1/triage")]
pub async fn analyze(
    service: web::Data<TriageService>,
    body: web::Json<TriageRequest>,
) -> Result<HttpResponse, ApiError> {
    let report = service.triage(&body.input).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// Configure triage routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze);
}

/// OpenAPI documentation for the triage service
#[derive(OpenApi)]
#[openapi(
    paths(analyze, crate::api::health::liveness, crate::api::health::readiness),
    components(schemas(
        TriageRequest,
        VulnerabilityReport,
        Severity,
        ErrorResponse,
        crate::api::health::HealthStatus,
        crate::api::health::ReadinessStatus,
        crate::api::health::DependencyHealth,
    )),
    tags(
        (name = "triage", description = "Vulnerability triage endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};

    use super::*;
    use crate::service::llm::testing::StubBackend;

    const REPORT_JSON: &str = r#"{"title":"SQL Injection in Login","severity":"CRITICAL","cvss_score":"9.8","cvss_vector":"CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H","description":"The login endpoint concatenates the username into a SQL query, allowing full authentication bypass.","proof_of_concept":"1. Submit ' OR 1=1 -- as username","mitigation":"Use parameterized queries."}"#;

    async fn call_triage(
        service: TriageService,
        input: &str,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/triage")
            .set_json(serde_json::json!({ "input": input }))
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_analyze_returns_report() {
        let stub = StubBackend::replying(&format!("```json\n{REPORT_JSON}\n```"));
        let resp = call_triage(
            TriageService::new(stub),
            "Login endpoint accepts SQL in username field",
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);

        let report: VulnerabilityReport = test::read_body_json(resp).await;
        assert_eq!(report.title, "SQL Injection in Login");
        assert_eq!(report.severity, Severity::Critical);
    }

    #[actix_web::test]
    async fn test_analyze_rejects_empty_input() {
        let stub = StubBackend::replying(REPORT_JSON);
        let resp = call_triage(TriageService::new(stub), "   ").await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_input");
        assert!(body["request_id"].is_string());
    }

    #[actix_web::test]
    async fn test_analyze_without_credential_returns_500() {
        let service = TriageService::from_config(&crate::model::Config::default());
        let resp = call_triage(service, "Some finding").await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "not_configured");
    }

    #[actix_web::test]
    async fn test_analyze_backend_failure_returns_502() {
        let stub = StubBackend::failing("connection timed out");
        let resp = call_triage(TriageService::new(stub), "Some finding").await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "backend_unavailable");
    }

    #[actix_web::test]
    async fn test_analyze_malformed_reply_stays_generic() {
        let stub = StubBackend::replying("I cannot analyze this.");
        let resp = call_triage(TriageService::new(stub), "Some finding").await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "malformed_response");
        // The raw backend reply must never reach the caller
        assert_eq!(body["message"], "Failed to analyze vulnerability.");
    }
}
