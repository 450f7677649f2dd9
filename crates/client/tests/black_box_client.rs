use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use chrono::Utc;
use serde_json::{Value, json};

use angebot_auth::{Credentials, Session};
use angebot_client::{ApiClient, ClientConfig, ClientError};
use angebot_core::{CustomerId, OfferId};
use angebot_customers::Customer;
use angebot_offers::OfferDraft;
use angebot_pricing::{OfferMeasurements, RateCard};
use angebot_settings::{CompanySettings, ImageUpload, MAX_UPLOAD_BYTES, UploadKind};

const TOKEN: &str = "good-token";

/// In-memory stand-in for the offer backend.
#[derive(Default)]
struct Backend {
    customers: Vec<Value>,
    next_id: i64,
    rate_card: Option<Value>,
    rate_card_posts: usize,
    rate_card_puts: usize,
    uploads: Vec<(String, usize)>,
    mails: Vec<Value>,
    empty_pdf: bool,
    offers_down: bool,
    rate_card_down: bool,
    offers: Vec<Value>,
    requests: usize,
}

type Shared = Arc<Mutex<Backend>>;

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, axum::Json(json!({ "message": "Token invalid" }))).into_response()
}

macro_rules! guard {
    ($state:expr, $headers:expr) => {{
        $state.lock().unwrap().requests += 1;
        if !authorized(&$headers) {
            return unauthorized();
        }
    }};
}

async fn login(axum::Json(body): axum::Json<Value>) -> Response {
    if body["email"] == "max@pinsel.de" && body["password"] == "geheim" {
        axum::Json(json!({ "token": TOKEN })).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, axum::Json(json!({ "message": "Invalid credentials" }))).into_response()
    }
}

async fn register(axum::Json(body): axum::Json<Value>) -> Response {
    if body["email"] == "max@pinsel.de" {
        (StatusCode::BAD_REQUEST, axum::Json(json!({ "message": "Email already registered" }))).into_response()
    } else {
        (StatusCode::CREATED, axum::Json(json!({ "ok": true }))).into_response()
    }
}

async fn list_customers(State(state): State<Shared>, headers: HeaderMap) -> Response {
    guard!(state, headers);
    let customers = state.lock().unwrap().customers.clone();
    axum::Json(Value::Array(customers)).into_response()
}

async fn create_customer(
    State(state): State<Shared>,
    headers: HeaderMap,
    axum::Json(mut body): axum::Json<Value>,
) -> Response {
    guard!(state, headers);
    let mut backend = state.lock().unwrap();
    backend.next_id += 1;
    body["id"] = json!(backend.next_id);
    backend.customers.push(body.clone());
    (StatusCode::CREATED, axum::Json(body)).into_response()
}

async fn get_customer(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    guard!(state, headers);
    let backend = state.lock().unwrap();
    match backend.customers.iter().find(|c| c["id"] == id) {
        Some(c) => axum::Json(c.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn update_customer(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    axum::Json(mut body): axum::Json<Value>,
) -> Response {
    guard!(state, headers);
    let mut backend = state.lock().unwrap();
    match backend.customers.iter_mut().find(|c| c["id"] == id) {
        Some(slot) => {
            body["id"] = json!(id);
            *slot = body.clone();
            axum::Json(body).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_customer(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    guard!(state, headers);
    let mut backend = state.lock().unwrap();
    let before = backend.customers.len();
    backend.customers.retain(|c| c["id"] != id);
    if backend.customers.len() == before {
        StatusCode::NOT_FOUND.into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

async fn get_rate_card(State(state): State<Shared>, headers: HeaderMap) -> Response {
    guard!(state, headers);
    if state.lock().unwrap().rate_card_down {
        return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(json!({ "message": "database unavailable" })))
            .into_response();
    }
    let card = state.lock().unwrap().rate_card.clone();
    match card {
        Some(card) => axum::Json(card).into_response(),
        None => (StatusCode::NOT_FOUND, axum::Json(json!({ "message": "No rate card" }))).into_response(),
    }
}

async fn post_rate_card(State(state): State<Shared>, headers: HeaderMap, axum::Json(body): axum::Json<Value>) -> Response {
    guard!(state, headers);
    let mut backend = state.lock().unwrap();
    backend.rate_card_posts += 1;
    backend.rate_card = Some(body.clone());
    (StatusCode::CREATED, axum::Json(body)).into_response()
}

async fn put_rate_card(State(state): State<Shared>, headers: HeaderMap, axum::Json(body): axum::Json<Value>) -> Response {
    guard!(state, headers);
    let mut backend = state.lock().unwrap();
    backend.rate_card_puts += 1;
    backend.rate_card = Some(body.clone());
    axum::Json(body).into_response()
}

async fn get_settings(State(state): State<Shared>, headers: HeaderMap) -> Response {
    guard!(state, headers);
    axum::Json(json!({
        "companyName": "Pinsel GmbH",
        "firstName": "Max",
        "lastName": "Pinsel",
        "street": null,
    }))
    .into_response()
}

async fn put_settings(State(state): State<Shared>, headers: HeaderMap, axum::Json(body): axum::Json<Value>) -> Response {
    guard!(state, headers);
    axum::Json(body).into_response()
}

async fn upload(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(kind): Path<String>,
    body: Bytes,
) -> Response {
    guard!(state, headers);
    let is_multipart = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"));
    let has_file_field = String::from_utf8_lossy(&body).contains("name=\"file\"");
    if !is_multipart || !has_file_field {
        return StatusCode::BAD_REQUEST.into_response();
    }
    state.lock().unwrap().uploads.push((kind, body.len()));
    axum::Json(json!({ "ok": true })).into_response()
}

async fn list_offers(State(state): State<Shared>, headers: HeaderMap) -> Response {
    guard!(state, headers);
    if state.lock().unwrap().offers_down {
        return (StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>").into_response();
    }
    axum::Json(json!([
        {
            "id": 7,
            "customerFirstName": "Erika",
            "customerLastName": "Muster",
            "createdAt": "2024-05-02T09:30:00Z",
            "grandTotal": 1706.46
        }
    ]))
    .into_response()
}

async fn create_offer(State(state): State<Shared>, headers: HeaderMap, axum::Json(mut body): axum::Json<Value>) -> Response {
    guard!(state, headers);
    if body.get("grandTotal").is_some() || body.get("netTotal").is_some() {
        return (StatusCode::BAD_REQUEST, axum::Json(json!({ "message": "totals are computed server-side" })))
            .into_response();
    }
    body["id"] = json!(7);
    body["grandTotal"] = json!(1706.46);
    body["createdAt"] = json!("2024-05-02T09:30:00Z");
    state.lock().unwrap().offers.push(body.clone());
    (StatusCode::CREATED, axum::Json(body)).into_response()
}

async fn get_offer(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    guard!(state, headers);
    let backend = state.lock().unwrap();
    match backend.offers.iter().find(|o| o["id"] == id) {
        Some(o) => axum::Json(o.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, axum::Json(json!({ "message": "Offer not found" }))).into_response(),
    }
}

async fn update_offer(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    axum::Json(body): axum::Json<Value>,
) -> Response {
    guard!(state, headers);
    let mut backend = state.lock().unwrap();
    match backend.offers.iter_mut().find(|o| o["id"] == id) {
        Some(slot) => {
            let mut merged = body;
            merged["id"] = json!(id);
            merged["createdAt"] = slot["createdAt"].clone();
            merged["grandTotal"] = json!(999.6);
            *slot = merged.clone();
            axum::Json(merged).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_offer(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    guard!(state, headers);
    let mut backend = state.lock().unwrap();
    let before = backend.offers.len();
    backend.offers.retain(|o| o["id"] != id);
    if backend.offers.len() == before {
        StatusCode::NOT_FOUND.into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

async fn offer_pdf(State(state): State<Shared>, headers: HeaderMap, Path(_id): Path<i64>) -> Response {
    guard!(state, headers);
    let body: &'static [u8] = if state.lock().unwrap().empty_pdf {
        b""
    } else {
        b"%PDF-1.4 fake"
    };
    ([(header::CONTENT_TYPE, "application/pdf")], body).into_response()
}

async fn mail_offer(State(state): State<Shared>, headers: HeaderMap, axum::Json(body): axum::Json<Value>) -> Response {
    guard!(state, headers);
    state.lock().unwrap().mails.push(body);
    axum::Json(json!({ "sent": true })).into_response()
}

struct TestServer {
    base_url: String,
    state: Shared,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let state: Shared = Arc::default();
        let api = Router::new()
            .route("/auth/login", post(login))
            .route("/auth/register", post(register))
            .route("/customers/me", get(list_customers))
            .route("/customers", post(create_customer))
            .route(
                "/customers/:id",
                get(get_customer).put(update_customer).delete(delete_customer),
            )
            .route("/ratecard/me", get(get_rate_card).post(post_rate_card).put(put_rate_card))
            .route("/settings/me", get(get_settings).put(put_settings))
            .route("/settings/me/:kind", post(upload))
            .route("/offers/me", get(list_offers))
            .route("/offers", post(create_offer))
            .route("/offers/:id", get(get_offer).put(update_offer).delete(delete_offer))
            .route("/pdf/:id", get(offer_pdf))
            .route("/mail/offer", post(mail_offer))
            .with_state(state.clone());
        let app = Router::new().nest("/api", api);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{addr}/api");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, state, handle }
    }

    fn client(&self) -> ApiClient {
        let config = ClientConfig::new(&self.base_url, Duration::from_secs(5)).unwrap();
        ApiClient::new(config).unwrap()
    }

    fn authed_client(&self) -> ApiClient {
        self.client()
            .with_session(&Session::new(TOKEN, "max@pinsel.de", Utc::now()))
    }

    fn requests(&self) -> usize {
        self.state.lock().unwrap().requests
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn login_returns_session_with_token() {
    let srv = TestServer::spawn().await;
    let creds = Credentials::new("max@pinsel.de", "geheim").unwrap();

    let session = srv.client().login(&creds).await.unwrap();
    assert_eq!(session.token(), TOKEN);
    assert_eq!(session.email(), "max@pinsel.de");
}

#[tokio::test]
async fn wrong_password_surfaces_backend_message() {
    let srv = TestServer::spawn().await;
    let creds = Credentials::new("max@pinsel.de", "falsch").unwrap();

    let err = srv.client().login(&creds).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "unauthorized: Invalid credentials");
}

#[tokio::test]
async fn register_maps_duplicate_to_validation() {
    let srv = TestServer::spawn().await;
    let client = srv.client();

    let fresh = Credentials::new("neu@pinsel.de", "geheim").unwrap();
    client.register(&fresh).await.unwrap();

    let taken = Credentials::new("max@pinsel.de", "geheim").unwrap();
    match client.register(&taken).await.unwrap_err() {
        ClientError::Validation(msg) => assert_eq!(msg, "Email already registered"),
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn protected_calls_without_session_never_hit_the_network() {
    let srv = TestServer::spawn().await;
    let err = srv.client().list_customers().await.unwrap_err();
    assert!(matches!(err, ClientError::NotLoggedIn));
    assert_eq!(srv.requests(), 0);
}

#[tokio::test]
async fn stale_token_is_unauthorized() {
    let srv = TestServer::spawn().await;
    let client = srv
        .client()
        .with_session(&Session::new("expired", "max@pinsel.de", Utc::now()));

    let err = client.list_offers().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized(ref m) if m == "Token invalid"));
}

#[tokio::test]
async fn customer_lifecycle() {
    let srv = TestServer::spawn().await;
    let client = srv.authed_client();

    let mut anna = Customer::new("Anna", "Maler", "anna@example.de");
    anna.home_ort = "Berlin".into();
    let created = client.create_customer(&anna).await.unwrap();
    let id = created.id.expect("backend assigns an id");
    assert_eq!(created.home_ort, "Berlin");

    let mut changed = created.clone();
    changed.phone = "030 123".into();
    let updated = client.update_customer(id, &changed).await.unwrap();
    assert_eq!(updated.phone, "030 123");
    assert_eq!(client.get_customer(id).await.unwrap().phone, "030 123");

    assert_eq!(client.list_customers().await.unwrap().len(), 1);
    client.delete_customer(id).await.unwrap();
    assert!(client.list_customers().await.unwrap().is_empty());

    let err = client.get_customer(id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn invalid_customer_is_rejected_locally() {
    let srv = TestServer::spawn().await;
    let client = srv.authed_client();

    let err = client
        .create_customer(&Customer::new("Anna", "", "anna@example.de"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(srv.requests(), 0);
}

#[tokio::test]
async fn save_rate_card_creates_then_updates() {
    let srv = TestServer::spawn().await;
    let client = srv.authed_client();

    assert!(client.rate_card_opt().await.unwrap().is_none());

    let first = RateCard::default();
    client.save_rate_card(&first).await.unwrap();
    let second = RateCard::new(18.0, 25.0, 20.0, 5.0, 8.0).unwrap();
    let saved = client.save_rate_card(&second).await.unwrap();
    assert_eq!(saved, second);

    let backend = srv.state.lock().unwrap();
    assert_eq!(backend.rate_card_posts, 1);
    assert_eq!(backend.rate_card_puts, 1);
    assert_eq!(backend.rate_card.as_ref().unwrap()["wallM2Price"], 18.0);
}

#[tokio::test]
async fn create_offer_sends_raw_measurements_only() {
    let srv = TestServer::spawn().await;
    let client = srv.authed_client();

    let draft = OfferDraft::new(CustomerId::new(3), OfferMeasurements::new(100.0, 0.0, 50.0, 10.0, 2));
    let offer = client.create_offer(&draft).await.unwrap();
    assert_eq!(offer.id, Some(OfferId::new(7)));
    assert_eq!(offer.customer_id, Some(CustomerId::new(3)));
    assert_eq!(offer.grand_total, Some(1706.46));
    assert_eq!(offer.measurements, draft.measurements);
}

#[tokio::test]
async fn offer_get_update_delete() {
    let srv = TestServer::spawn().await;
    let client = srv.authed_client();
    let id = OfferId::new(7);

    let draft = OfferDraft::new(CustomerId::new(3), OfferMeasurements::new(100.0, 0.0, 0.0, 10.0, 2));
    client.create_offer(&draft).await.unwrap();

    let fetched = client.get_offer(id).await.unwrap();
    assert_eq!(fetched.to_draft(), Some(draft.clone()));

    let changed = OfferDraft::new(CustomerId::new(3), OfferMeasurements::new(60.0, 0.0, 0.0, 0.0, 0));
    let updated = client.update_offer(id, &changed).await.unwrap();
    assert_eq!(updated.measurements, changed.measurements);
    assert_eq!(updated.grand_total, Some(999.6));
    assert_eq!(client.get_offer(id).await.unwrap().measurements.wall_area(), 60.0);

    client.delete_offer(id).await.unwrap();
    assert!(client.get_offer(id).await.unwrap_err().is_not_found());
    assert!(client.delete_offer(id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn save_rate_card_does_not_create_when_lookup_fails() {
    let srv = TestServer::spawn().await;
    let client = srv.authed_client();
    srv.state.lock().unwrap().rate_card_down = true;

    let err = client.save_rate_card(&RateCard::default()).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 500, ref message } if message == "database unavailable"));

    let backend = srv.state.lock().unwrap();
    assert_eq!(backend.rate_card_posts, 0);
    assert_eq!(backend.rate_card_puts, 0);
    assert!(backend.rate_card.is_none());
}

#[tokio::test]
async fn pdf_download_and_empty_pdf() {
    let srv = TestServer::spawn().await;
    let client = srv.authed_client();

    let doc = client.offer_pdf(OfferId::new(7)).await.unwrap();
    assert!(doc.looks_like_pdf());
    assert_eq!(doc.file_name(), "angebot-7.pdf");

    srv.state.lock().unwrap().empty_pdf = true;
    let err = client.offer_pdf(OfferId::new(7)).await.unwrap_err();
    assert!(matches!(err, ClientError::EmptyDocument(id) if id == OfferId::new(7)));
}

#[tokio::test]
async fn mail_request_carries_offer_id() {
    let srv = TestServer::spawn().await;
    srv.authed_client().send_offer_mail(OfferId::new(7)).await.unwrap();

    let mails = srv.state.lock().unwrap().mails.clone();
    assert_eq!(mails, vec![json!({ "offerId": 7 })]);
}

#[tokio::test]
async fn settings_and_images_are_saved() {
    let srv = TestServer::spawn().await;
    let client = srv.authed_client();

    let settings = CompanySettings {
        first_name: "Max".into(),
        last_name: "Pinsel".into(),
        company_name: "Pinsel GmbH".into(),
        phone: "0221 4711".into(),
        email: "office@pinsel.de".into(),
        street: "Farbweg".into(),
        house_nr: "3".into(),
        plz: "50667".into(),
        ort: "Köln".into(),
        ..CompanySettings::default()
    };
    let logo = ImageUpload::new(UploadKind::Logo, "logo.png", vec![0x89, b'P', b'N', b'G']).unwrap();
    let saved = client.save_settings(&settings, Some(&logo), None).await.unwrap();
    assert_eq!(saved.company_name, "Pinsel GmbH");

    let uploads = srv.state.lock().unwrap().uploads.clone();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].0, "logo");
}

#[test]
fn oversized_image_never_reaches_backend() {
    let err = ImageUpload::new(UploadKind::Signature, "sig.png", vec![0u8; MAX_UPLOAD_BYTES + 1]).unwrap_err();
    let err: ClientError = err.into();
    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn dashboard_tolerates_a_failing_source() {
    let srv = TestServer::spawn().await;
    let client = srv.authed_client();
    client
        .create_customer(&Customer::new("Anna", "Maler", "anna@example.de"))
        .await
        .unwrap();
    srv.state.lock().unwrap().offers_down = true;

    let dashboard = client.load_dashboard().await.unwrap();
    assert!(dashboard.is_partial());
    assert!(dashboard.offers.is_empty());
    assert_eq!(dashboard.customers.len(), 1);
    assert!(dashboard.status.has_settings);
    assert!(dashboard.status.has_customers);
    assert!(!dashboard.status.has_rate_card);
    assert_eq!(dashboard.status.next_step(), Some("rate card"));
    assert_eq!(dashboard.failures[0].0, "offers");
}

#[tokio::test]
async fn dashboard_fails_on_rejected_session() {
    let srv = TestServer::spawn().await;
    let client = srv
        .client()
        .with_session(&Session::new("expired", "max@pinsel.de", Utc::now()));

    let err = client.load_dashboard().await.unwrap_err();
    assert!(err.is_unauthorized());
}
