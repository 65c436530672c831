use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use slay_booking::config::EmailConfig;
use slay_booking::notify::{EmailChannel, EmailJsSender};
use slay_booking::receipt::PdfGenerator;
use slay_booking::{
    api_router, AppState, BusinessConfig, Collaborators, FixedClock, PricingEngine, SessionStore,
};

const SESSION: &str = "test-session";

fn email_channel(server: &MockServer) -> EmailChannel {
    let config = EmailConfig {
        base_url: server.uri(),
        public_key: "public_test".to_string(),
        private_key: None,
        service_id: "service_test".to_string(),
        admin_template_id: "template_admin".to_string(),
        client_template_id: "template_client".to_string(),
    };
    EmailChannel {
        sender: Arc::new(EmailJsSender::new(&config)),
        service_id: config.service_id.clone(),
        admin_template_id: config.admin_template_id.clone(),
        client_template_id: config.client_template_id.clone(),
    }
}

fn app(email: Option<EmailChannel>) -> Router {
    let state = AppState {
        engine: PricingEngine::new(Arc::new(BusinessConfig::default())),
        sessions: SessionStore::new(Duration::from_secs(60)),
        collaborators: Collaborators::new(email, Some(Arc::new(PdfGenerator))),
        clock: Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap(),
        )),
    };
    api_router(state)
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-session-id", SESSION);
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn add(app: &Router, name: &str) -> Value {
    let (status, body) = send_json(
        app,
        request(Method::POST, "/api/cart/items", Some(json!({ "name": name }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

fn booking_form(date: &str) -> Value {
    json!({
        "name": "Ama Owusu",
        "email": "ama@example.com",
        "phone": "0241234567",
        "region": "Greater Accra",
        "city": "Accra",
        "date": date,
        "time": "14:30",
    })
}

#[tokio::test]
async fn test_health_and_catalog() {
    let app = app(None);

    let (status, body) = send_json(&app, request(Method::GET, "/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["email_configured"], false);

    let (status, body) = send_json(&app, request(Method::GET, "/api/catalog", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["services"].as_array().unwrap().len(), 24);
    assert_eq!(body["mandatory_fee"]["amount"]["display"], "GHS 65.00");
}

#[tokio::test]
async fn test_session_created() {
    let app = app(None);
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/session")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_session_cookie_opens_receipt_links() {
    let app = app(None);
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/session")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let set_cookie = response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("slay_session="));
    assert!(set_cookie.contains("HttpOnly"));
    let cookie = set_cookie.split(';').next().unwrap().to_string();

    let with_cookie = |method: Method, uri: &str, body: Option<Value>| {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::COOKIE, cookie.as_str());
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    };

    let (status, _) = send(
        &app,
        with_cookie(Method::POST, "/api/cart/items", Some(json!({ "name": "Septum" }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(
        &app,
        with_cookie(Method::POST, "/api/booking/preview", Some(json!({}))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, html) = send(&app, with_cookie(Method::GET, "/booking/receipt", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(html).unwrap().contains("Septum (GHS 250.00)"));

    let (status, pdf) = send(
        &app,
        with_cookie(Method::GET, "/api/booking/receipt.pdf", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(pdf.starts_with(b"%PDF"));

    // the test-session header does not see the cookie session's receipt
    let (status, _) = send(&app, request(Method::GET, "/booking/receipt", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cart_requires_session_header() {
    let app = app(None);
    let (status, body) = send_json(
        &app,
        Request::builder()
            .uri("/api/cart")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "missing_session");
}

#[tokio::test]
async fn test_cart_flow() {
    let app = app(None);

    add(&app, "Lobe").await;
    let body = add(&app, "Helix").await;
    assert_eq!(body["total"]["display"], "GHS 260.00");
    assert_eq!(body["deposit"]["display"], "GHS 130.00");
    assert_eq!(body["items"].as_array().unwrap().len(), 3);
    assert_eq!(body["items"][2]["kind"], "mandatory_fee");

    let body = add(&app, "Lobe").await;
    assert_eq!(body["changed"], false);
    assert_eq!(body["total"]["display"], "GHS 260.00");

    let (status, body) =
        send_json(&app, request(Method::DELETE, "/api/cart/items/0", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"]["display"], "GHS 185.00");

    let (_, body) = send_json(&app, request(Method::DELETE, "/api/cart/items/9", None)).await;
    assert_eq!(body["changed"], false);
    assert_eq!(body["total"]["display"], "GHS 185.00");

    let (status, body) = send_json(
        &app,
        request(Method::POST, "/api/cart/items", Some(json!({ "name": "Eyelid" }))),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "unknown_service");

    let (_, body) = send_json(&app, request(Method::DELETE, "/api/cart", None)).await;
    assert_eq!(body["total"]["display"], "GHS 0.00");
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_download_requires_preview() {
    let app = app(None);
    let (status, body) =
        send_json(&app, request(Method::GET, "/api/booking/receipt.pdf", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "no_receipt");
}

#[tokio::test]
async fn test_preview_then_download() {
    let app = app(None);
    add(&app, "Dermal").await;

    let (status, body) = send_json(
        &app,
        request(
            Method::POST,
            "/api/booking/preview",
            Some(json!({ "name": "Ama Owusu" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let reference = body["receipt"]["reference"].as_str().unwrap().to_string();
    assert_eq!(reference, "SP-200000");
    assert_eq!(body["receipt"]["deposit"], "GHS 258.00");
    assert!(body["lines"]
        .as_array()
        .unwrap()
        .contains(&json!("Total: GHS 515.00")));

    let (status, html) = send(&app, request(Method::GET, "/booking/receipt", None)).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(html).unwrap();
    assert!(html.contains(&reference));
    assert!(html.contains("Dermal (GHS 450.00)"));

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/api/booking/receipt.pdf", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"SLAY-Booking-Receipt-SP-200000.pdf\""
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_submit_without_email_is_unavailable() {
    let app = app(None);
    add(&app, "Lobe").await;

    let (status, body) = send_json(
        &app,
        request(Method::POST, "/api/booking/submit", Some(booking_form("2026-11-02"))),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["message"].as_str().unwrap().contains("not available"));
}

#[tokio::test]
async fn test_submit_past_date_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let app = app(Some(email_channel(&server)));
    add(&app, "Lobe").await;

    let (status, body) = send_json(
        &app,
        request(Method::POST, "/api/booking/submit", Some(booking_form("2026-10-18"))),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Please select today's date or a future date.");
}

#[tokio::test]
async fn test_submit_sends_both_emails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .and(body_partial_json(json!({
            "template_id": "template_admin",
            "template_params": {
                "to_email": "bookings@slaybodypiercing.com",
                "total_amount": "GHS 185.00",
                "deposit_amount": "GHS 93.00",
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .and(body_partial_json(json!({
            "template_id": "template_client",
            "template_params": {
                "to_email": "ama@example.com",
                "appointment_date": "Monday, November 2, 2026",
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let app = app(Some(email_channel(&server)));
    add(&app, "Helix").await;

    let (status, body) = send_json(
        &app,
        request(Method::POST, "/api/booking/submit", Some(booking_form("2026-11-02"))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reference"], "SP-200000");
    assert_eq!(body["total"], "GHS 185.00");
    assert_eq!(body["deposit"], "GHS 93.00");
    assert_eq!(body["remaining_balance"], "GHS 92.00");
    assert_eq!(body["customer_notified"], true);
    assert_eq!(body["payment"]["number"], "0550396789");

    let (_, cart) = send_json(&app, request(Method::GET, "/api/cart", None)).await;
    assert!(cart["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_rejection_keeps_cart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .respond_with(ResponseTemplate::new(400).set_body_string("The template ID is invalid"))
        .expect(1)
        .mount(&server)
        .await;

    let app = app(Some(email_channel(&server)));
    add(&app, "Lobe").await;

    let (status, body) = send_json(
        &app,
        request(Method::POST, "/api/booking/submit", Some(booking_form("2026-11-02"))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        body["message"],
        "Email sending failed: The template ID is invalid"
    );

    let (_, cart) = send_json(&app, request(Method::GET, "/api/cart", None)).await;
    assert_eq!(cart["total"]["display"], "GHS 140.00");
}
