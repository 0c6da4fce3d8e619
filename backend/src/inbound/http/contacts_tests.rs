//! Handler tests for the contact endpoints.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test as actix_test};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockContactsCommand, MockContactsQuery};
use crate::domain::{ContactService, Error};
use crate::inbound::http::api_scope;
use crate::inbound::http::error::route_not_found;
use crate::outbound::memory::InMemoryContactRepository;

fn in_memory_state() -> HttpState {
    let repository = Arc::new(InMemoryContactRepository::new(Arc::new(DefaultClock)));
    HttpState::from_service(Arc::new(ContactService::new(repository)))
}

async fn init_app(
    state: HttpState,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(api_scope(1024))
            .default_service(web::to(route_not_found)),
    )
    .await
}

async fn send(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    req: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let res = actix_test::call_service(app, req.to_request()).await;
    let status = res.status();
    let body: Value = actix_test::read_body_json(res).await;
    (status, body)
}

fn ada() -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "phoneNumber": "1234567890"
    })
}

#[actix_web::test]
async fn create_returns_enveloped_contact() {
    let app = init_app(in_memory_state()).await;
    let (status, body) = send(
        &app,
        actix_test::TestRequest::post().uri("/api/v1/contacts").set_json(ada()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["statusCode"], 201);
    assert_eq!(body["message"], CREATED_MESSAGE);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], "ada@example.com");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"].get("company").is_none());
}

#[actix_web::test]
async fn create_lists_every_missing_field() {
    let app = init_app(in_memory_state()).await;
    let (status, body) = send(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/contacts")
            .set_json(json!({ "firstName": "Ada", "email": "  " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields");
    assert!(body["data"].is_null());
    assert_eq!(
        body["error"]["details"]["fields"],
        json!(["lastName", "email", "phoneNumber"])
    );
}

#[actix_web::test]
async fn duplicate_email_is_a_conflict_regardless_of_case() {
    let app = init_app(in_memory_state()).await;
    send(
        &app,
        actix_test::TestRequest::post().uri("/api/v1/contacts").set_json(ada()),
    )
    .await;
    let mut shouting = ada();
    shouting["email"] = json!("ADA@EXAMPLE.COM");
    let (status, body) = send(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/contacts")
            .set_json(shouting),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Email already exists");
    assert_eq!(body["error"]["code"], "conflict");
}

#[rstest]
#[case("/api/v1/contacts?page=abc", "page")]
#[case("/api/v1/contacts?page=0", "page")]
#[case("/api/v1/contacts?limit=-1", "limit")]
#[actix_web::test]
async fn bad_pagination_is_rejected(#[case] uri: &str, #[case] field: &str) {
    let app = init_app(in_memory_state()).await;
    let (status, body) = send(&app, actix_test::TestRequest::get().uri(uri)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"]["field"], field);
}

#[actix_web::test]
async fn list_defaults_to_first_page_of_five() {
    let app = init_app(in_memory_state()).await;
    for n in 0..7 {
        let mut contact = ada();
        contact["email"] = json!(format!("ada{n}@example.com"));
        send(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/contacts")
                .set_json(contact),
        )
        .await;
    }

    let (status, body) = send(&app, actix_test::TestRequest::get().uri("/api/v1/contacts")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], LISTED_MESSAGE);
    assert_eq!(body["data"]["contacts"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["data"]["currentPage"], 1);
    assert_eq!(body["data"]["totalPages"], 2);
    assert_eq!(body["data"]["totalContacts"], 7);

    let (_, body) = send(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/contacts?page=2&limit=5"),
    )
    .await;
    assert_eq!(body["data"]["contacts"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["data"]["contacts"][0]["email"], "ada5@example.com");
}

#[rstest]
#[case("3fa85f64-5717-4562-b3fc-2c963f66afa6")]
#[case("not-a-uuid")]
#[actix_web::test]
async fn unknown_contacts_are_not_found(#[case] id: &str) {
    let app = init_app(in_memory_state()).await;
    let uri = format!("/api/v1/contacts/{id}");
    let (status, body) = send(
        &app,
        actix_test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "company": "Acme" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Contact not found");

    let (status, _) = send(&app, actix_test::TestRequest::delete().uri(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_json_answers_with_envelope() {
    let app = init_app(in_memory_state()).await;
    let (status, body) = send(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/contacts")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"firstName\":"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["details"]["code"], "invalid_json");
}

#[actix_web::test]
async fn oversize_body_is_rejected() {
    let app = init_app(in_memory_state()).await;
    let mut contact = ada();
    contact["company"] = json!("x".repeat(2048));
    let (status, body) = send(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/contacts")
            .set_json(contact),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"]["code"], "payload_too_large");
}

#[actix_web::test]
async fn unknown_routes_use_the_envelope() {
    let app = init_app(in_memory_state()).await;
    let (status, body) = send(&app, actix_test::TestRequest::get().uri("/api/v1/people")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["error"]["details"]["path"], "/api/v1/people");
}

#[actix_web::test]
async fn updating_unknown_id_with_taken_email_is_not_found() {
    let app = init_app(in_memory_state()).await;
    let (status, _) = send(
        &app,
        actix_test::TestRequest::post().uri("/api/v1/contacts").set_json(ada()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/v1/contacts/3fa85f64-5717-4562-b3fc-2c963f66afa6")
            .set_json(json!({ "email": "ada@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Contact not found");
    assert_eq!(body["error"]["code"], "not_found");
}

#[actix_web::test]
async fn store_outage_is_service_unavailable() {
    let mut query = MockContactsQuery::new();
    query
        .expect_list_contacts()
        .times(1)
        .return_once(|_| Err(Error::service_unavailable("contact repository unavailable")));
    let state = HttpState::new(Arc::new(MockContactsCommand::new()), Arc::new(query));
    let app = init_app(state).await;

    let (status, body) = send(&app, actix_test::TestRequest::get().uri("/api/v1/contacts")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "service_unavailable");
}

#[actix_web::test]
async fn internal_failures_are_redacted() {
    let mut command = MockContactsCommand::new();
    command
        .expect_delete_contact()
        .times(1)
        .return_once(|_| Err(Error::internal("contact repository error: relation missing")));
    let state = HttpState::new(Arc::new(command), Arc::new(MockContactsQuery::new()));
    let app = init_app(state).await;

    let (status, body) = send(
        &app,
        actix_test::TestRequest::delete().uri("/api/v1/contacts/3fa85f64-5717-4562-b3fc-2c963f66afa6"),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
}

#[rstest]
fn contact_response_omits_absent_optionals() {
    let response = ContactResponse {
        id: "id".into(),
        first_name: "A".into(),
        last_name: "B".into(),
        email: "a@b.com".into(),
        phone_number: "1234567890".into(),
        company: None,
        job_title: Some("CTO".into()),
        created_at: "2025-01-01T00:00:00+00:00".into(),
        updated_at: "2025-01-01T00:00:00+00:00".into(),
    };
    let value = serde_json::to_value(response).expect("serialise");
    assert!(value.get("company").is_none());
    assert_eq!(value["jobTitle"], "CTO");
    assert_eq!(value["phoneNumber"], "1234567890");
}
