//! Gate tests with every option specified.


use actix_web::test;

use actix_api_key_core::http::security::ApiKeyGate;
use common::{assert_ok, assert_unauthorized, create_test_app, ApiKey, RecordingLookup, SECRET};

const CUSTOM_HEADER: &str = "X-CUSTOM-API-HEADER";
const CUSTOM_CONTEXT_KEY: &str = "account.api.key";

/// Gate reading `header_key` and storing under `account.api.key`.
fn custom_gate(lookup: &RecordingLookup, header_key: &str) -> ApiKeyGate<ApiKey> {
    lookup
        .config()
        .header_key(header_key)
        .context_key(CUSTOM_CONTEXT_KEY)
        .build()
        .unwrap()
}

#[actix_web::test]
async fn test_lookup_receives_custom_header_value() {
    let lookup = RecordingLookup::empty();
    let app = create_test_app(custom_gate(&lookup, CUSTOM_HEADER)).await;

    let req = test::TestRequest::get()
        .uri("/all-options")
        .insert_header((CUSTOM_HEADER, SECRET))
        .to_request();
    test::call_service(&app, req).await;

    assert_eq!(lookup.calls(), vec![Some(SECRET.to_string())]);
}

#[actix_web::test]
async fn test_identity_stored_under_custom_context_key() {
    let lookup = RecordingLookup::knowing(SECRET);
    let app = create_test_app(custom_gate(&lookup, CUSTOM_HEADER)).await;

    let req = test::TestRequest::get()
        .uri("/all-options")
        .insert_header((CUSTOM_HEADER, SECRET))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(assert_ok(resp).await, format!("identity: {}", SECRET));
}

#[actix_web::test]
async fn test_default_context_key_not_written() {
    use actix_api_key_core::http::security::ApiKeyContextExt;
    use actix_web::{web, App, HttpRequest, HttpResponse};

    let lookup = RecordingLookup::knowing(SECRET);
    let gate = custom_gate(&lookup, CUSTOM_HEADER);
    let app = test::init_service(App::new().wrap(gate).default_service(web::to(
        |req: HttpRequest| async move {
            let default = req.has_api_key_identity::<ApiKey>("rack_api_key");
            let custom = req.has_api_key_identity::<ApiKey>(CUSTOM_CONTEXT_KEY);
            HttpResponse::Ok().body(format!("default={} custom={}", default, custom))
        },
    )))
    .await;

    let req = test::TestRequest::get()
        .uri("/all-options")
        .insert_header((CUSTOM_HEADER, SECRET))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(assert_ok(resp).await, "default=false custom=true");
}

#[actix_web::test]
async fn test_default_header_is_ignored() {
    let lookup = RecordingLookup::knowing(SECRET);
    let app = create_test_app(custom_gate(&lookup, CUSTOM_HEADER)).await;

    let req = test::TestRequest::get()
        .uri("/all-options")
        .insert_header(("X-API-KEY", SECRET))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_unauthorized(resp).await;
    assert_eq!(lookup.calls(), vec![None::<String>]);
}

#[actix_web::test]
async fn test_environment_style_header_key() {
    let lookup = RecordingLookup::knowing(SECRET);
    let gate = custom_gate(&lookup, "HTTP_X_CUSTOM_API_HEADER");
    let app = create_test_app(gate).await;

    let req = test::TestRequest::get()
        .uri("/all-options")
        .insert_header(("x-custom-api-header", SECRET))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(assert_ok(resp).await, format!("identity: {}", SECRET));
}
