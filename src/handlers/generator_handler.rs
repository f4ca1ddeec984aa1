use actix_web::{get, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::ConfigureEndpointRequest, response::EndpointResponse},
};

#[put("/api/generator/endpoint")]
pub async fn configure_endpoint(
    state: web::Data<AppState>,
    request: web::Json<ConfigureEndpointRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| AppError::Configuration(e.to_string()))?;

    let endpoint = state.generator.configure(&request.url).await?;
    Ok(HttpResponse::Ok().json(EndpointResponse {
        endpoint: Some(endpoint.to_string()),
    }))
}

#[get("/api/generator/endpoint")]
pub async fn get_endpoint(state: web::Data<AppState>) -> HttpResponse {
    let endpoint = state.generator.endpoint().await;
    HttpResponse::Ok().json(EndpointResponse {
        endpoint: endpoint.map(|e| e.to_string()),
    })
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let configured = state.generator.endpoint().await.is_some();

    let response = serde_json::json!({
        "status": if configured { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "generator": if configured { "configured" } else { "unconfigured" }
        }
    });

    if configured {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        services::{
            generation_service::MockQuestionGenerator, kobold_client::KoboldEndpoint,
        },
    };
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    fn state_with(generator: MockQuestionGenerator) -> web::Data<AppState> {
        web::Data::new(AppState::with_generator(
            Config::test_config(),
            Arc::new(generator),
        ))
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_ready_requires_configured_endpoint() {
        let mut generator = MockQuestionGenerator::new();
        generator.expect_endpoint().returning(|| None);

        let app = test::init_service(
            App::new()
                .app_data(state_with(generator))
                .service(health_check_ready),
        )
        .await;

        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn test_configure_endpoint_returns_normalized_url() {
        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_configure()
            .withf(|url| url == "https://host.example")
            .times(1)
            .returning(|url| KoboldEndpoint::parse(url));

        let app = test::init_service(
            App::new()
                .app_data(state_with(generator))
                .service(configure_endpoint),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/generator/endpoint")
            .set_json(serde_json::json!({ "url": "https://host.example" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["endpoint"], "https://host.example/api/v1/generate");
    }

    #[actix_web::test]
    async fn test_configure_endpoint_rejects_malformed_url() {
        let mut generator = MockQuestionGenerator::new();
        generator.expect_configure().never();

        let app = test::init_service(
            App::new()
                .app_data(state_with(generator))
                .service(configure_endpoint),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/generator/endpoint")
            .set_json(serde_json::json!({ "url": "definitely not a url" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
