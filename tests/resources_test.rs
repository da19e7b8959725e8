//! Resource API integration tests
//!
//! Every operation hits the documented method and path and decodes the
//! backend's answer.

mod common;

use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, body_string_contains, header, header_regex, method, path};
use wiremock::{Mock, ResponseTemplate};

use chatdesk::shared::models::{
    ConversationDraft, DocumentUpdate, MessageRole, NewDocument, NewMessage, ProcessingState,
    WidgetDraft,
};
use chatdesk::shared::ClientError;
use common::*;

#[tokio::test]
async fn test_documents_crud() {
    let backend = MockBackend::signed_in(test_session("ada")).await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(api("/documents/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([document_json(id, "FAQ")])))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(api(&format!("/documents/{}/", id))))
        .and(body_json(json!({ "title": "FAQ v2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(document_json(id, "FAQ v2")))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api(&format!("/documents/{}/", id))))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    let documents = assert_ok!(backend.http.documents().list().await);
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].processing_state(), ProcessingState::Ready);

    let update = DocumentUpdate {
        title: Some("FAQ v2".to_string()),
        ..Default::default()
    };
    let updated = assert_ok!(backend.http.documents().update(id, &update).await);
    assert_eq!(updated.title, "FAQ v2");

    assert_ok!(backend.http.documents().delete(id).await);
}

#[tokio::test]
async fn test_document_upload_is_multipart() {
    let backend = MockBackend::signed_in(test_session("ada")).await;
    let id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path(api("/documents/")))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(header("authorization", "Bearer ada-token"))
        .and(body_string_contains("Shipping times"))
        .and(body_string_contains("filename=\"shipping.txt\""))
        .and(body_string_contains("Orders ship within two days."))
        .respond_with(ResponseTemplate::new(201).set_body_json(document_json(id, "Shipping times")))
        .expect(1)
        .mount(&backend.server)
        .await;

    let upload = NewDocument::new(
        "Shipping times",
        "shipping.txt",
        b"Orders ship within two days.".to_vec(),
    )
    .with_content_type("text/plain");
    let document = assert_ok!(backend.http.documents().create(upload).await);
    assert_eq!(document.id, id);
}

#[tokio::test]
async fn test_document_upload_bad_mime_sends_nothing() {
    let backend = MockBackend::signed_in(test_session("ada")).await;

    let upload = NewDocument::new("x", "x.bin", vec![0, 1]).with_content_type("bogus type");
    assert_err!(
        backend.http.documents().create(upload).await,
        ClientError::Validation { .. }
    );
    assert_eq!(backend.request_count().await, 0);
}

#[tokio::test]
async fn test_conversations_crud() {
    let backend = MockBackend::signed_in(test_session("ada")).await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(api("/chat/conversations/")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([conversation_json(id, "Refunds")])),
        )
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api(&format!("/chat/conversations/{}/", id))))
        .respond_with(ResponseTemplate::new(200).set_body_json(conversation_json(id, "Refunds")))
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path(api("/chat/conversations/")))
        .and(body_json(json!({ "title": "Refunds" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(conversation_json(id, "Refunds")))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(api(&format!("/chat/conversations/{}/", id))))
        .and(body_json(json!({ "title": "Refund policy" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(conversation_json(id, "Refund policy")),
        )
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api(&format!("/chat/conversations/{}/", id))))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    let api_ = backend.http.conversations();
    assert_eq!(assert_ok!(api_.list().await).len(), 1);
    assert_eq!(assert_ok!(api_.get(id).await).title, "Refunds");
    assert_eq!(
        assert_ok!(api_.create(&ConversationDraft::titled("Refunds")).await).id,
        id
    );
    assert_eq!(
        assert_ok!(
            api_.update(id, &ConversationDraft::titled("Refund policy"))
                .await
        )
        .title,
        "Refund policy"
    );
    assert_ok!(api_.delete(id).await);
}

#[tokio::test]
async fn test_messages_list_and_create() {
    let backend = MockBackend::signed_in(test_session("ada")).await;
    let conversation = Uuid::new_v4();
    let message = Uuid::new_v4();
    let messages_path = api(&format!("/chat/conversations/{}/messages/", conversation));

    Mock::given(method("GET"))
        .and(path(messages_path.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            message_json(Uuid::new_v4(), "user", "Where is my order?"),
            message_json(Uuid::new_v4(), "assistant", "Let me check."),
        ])))
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path(messages_path.as_str()))
        .and(body_json(json!({ "role": "user", "content": "Thanks!" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(message_json(message, "user", "Thanks!")),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let history = assert_ok!(backend.http.messages().list(conversation).await);
    assert_eq!(
        history.iter().map(|m| m.role).collect::<Vec<_>>(),
        vec![MessageRole::User, MessageRole::Assistant]
    );

    let created = assert_ok!(
        backend
            .http
            .messages()
            .create(conversation, &NewMessage::user("Thanks!"))
            .await
    );
    assert_eq!(created.id, message);
}

#[tokio::test]
async fn test_widgets_crud() {
    let backend = MockBackend::signed_in(test_session("ada")).await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(api("/widgets/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([widget_json(id, "Store")])))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api(&format!("/widgets/{}/", id))))
        .respond_with(ResponseTemplate::new(200).set_body_json(widget_json(id, "Store")))
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path(api("/widgets/")))
        .and(body_json(json!({ "name": "Store", "allowed_domains": "shop.example.com" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(widget_json(id, "Store")))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(api(&format!("/widgets/{}/", id))))
        .and(body_json(json!({ "enable_feedback": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(widget_json(id, "Store")))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api(&format!("/widgets/{}/", id))))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    let widgets = backend.http.widgets();
    let listed = assert_ok!(widgets.list().await);
    assert_eq!(listed[0].allowed_domain_list(), vec!["shop.example.com"]);

    let widget = assert_ok!(widgets.get(id).await);
    assert_eq!(
        widget.embed_url(backend.http.config().widget_base_url()),
        format!("{}/widget/{}", WIDGET_BASE_URL, id)
    );

    let draft = WidgetDraft {
        name: Some("Store".to_string()),
        allowed_domains: Some("shop.example.com".to_string()),
        ..Default::default()
    };
    assert_ok!(widgets.create(&draft).await);

    let toggle = WidgetDraft {
        enable_feedback: Some(false),
        ..Default::default()
    };
    assert_ok!(widgets.update(id, &toggle).await);
    assert_ok!(widgets.delete(id).await);
}

#[tokio::test]
async fn test_refresh_and_profile() {
    let backend = MockBackend::signed_in(test_session("ada")).await;

    Mock::given(method("POST"))
        .and(path(api("/auth/refresh/")))
        .and(body_json(json!({ "refresh": "ada-refresh" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access": "fresh" })))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api("/auth/profile/")))
        .and(header("authorization", "Bearer ada-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "username": "ada",
            "email": "ada@example.com",
            "first_name": "Ada",
            "last_name": "Lovelace",
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let refreshed = assert_ok!(backend.http.auth().refresh("ada-refresh").await);
    assert_eq!(refreshed.access, "fresh");
    // Refreshing does not touch the stored session.
    assert_eq!(backend.stored_session(), Some(test_session("ada")));

    let profile = assert_ok!(backend.bridge().profile().await);
    assert_eq!(profile.first_name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn test_resource_call_without_session_is_unauthorized() {
    let backend = MockBackend::start().await;

    Mock::given(method("GET"))
        .and(path(api("/widgets/")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Authentication credentials were not provided."
        })))
        .mount(&backend.server)
        .await;

    let err = backend.http.widgets().list().await.unwrap_err();
    assert_eq!(
        err,
        ClientError::unauthorized("Authentication credentials were not provided.")
    );
}
