//! Newsletter subscription handler.

use actix_web::{HttpResponse, web};

use quill_shared::dto::{SubscribeRequest, SubscribeResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/subscribe
pub async fn subscribe(
    state: web::Data<AppState>,
    body: web::Json<SubscribeRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    state
        .newsletter
        .subscribe(&req.email)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(SubscribeResponse {
        message: "Successfully subscribed to newsletter".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::json;

    use quill_shared::ErrorResponse;
    use quill_shared::dto::SubscribeResponse;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    #[actix_web::test]
    async fn subscribe_acknowledges_a_valid_address() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/subscribe")
            .set_json(json!({ "email": "reader@example.com" }))
            .to_request();
        let body: SubscribeResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.message, "Successfully subscribed to newsletter");
    }

    #[actix_web::test]
    async fn subscribe_rejects_malformed_addresses() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new()))
                .configure(configure_routes),
        )
        .await;

        for email in ["", "not-an-email"] {
            let req = test::TestRequest::post()
                .uri("/api/subscribe")
                .set_json(json!({ "email": email }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let error: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(error.detail.as_deref(), Some("Invalid email address"));
        }
    }
}
