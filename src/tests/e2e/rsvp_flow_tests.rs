use crate::modules::rsvps::adapters::outbound::in_memory_form::InMemoryFormSubmitter;
use crate::modules::rsvps::adapters::outbound::in_memory_sheet::InMemoryGuestSheet;
use crate::modules::rsvps::core::entry::EntrySource;
use crate::modules::rsvps::use_cases::sync_guest_list::handler::SyncSettings;
use crate::shared::infrastructure::local_store::file::FileLocalStore;
use crate::shared::infrastructure::notifier::RsvpNotifier;
use crate::shell::http::router;
use crate::shell::state::{Adapters, AppState};
use crate::shell::workers::spawn_guest_list_refresher;
use crate::tests::fixtures::commands::SubmitRsvpBuilder;
use crate::tests::fixtures::state::{MAX_GUESTS, TICK, TestApp};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

fn file_backed_state(path: &Path) -> AppState {
    let sheet = Arc::new(InMemoryGuestSheet::new());
    AppState::compose(
        Adapters {
            form: Arc::new(InMemoryFormSubmitter::forwarding_to(sheet.clone())),
            sheet,
            store: Arc::new(FileLocalStore::new(path)),
        },
        RsvpNotifier::default(),
        SyncSettings::default(),
        MAX_GUESTS,
    )
}

#[tokio::test]
async fn submitted_rsvp_shows_up_in_the_guest_list() {
    let test_app = TestApp::forwarding();
    let worker = spawn_guest_list_refresher(test_app.state.guest_list.clone(), &test_app.notifier);
    let app = router(test_app.state.clone());

    let response = app
        .clone()
        .oneshot(
            Request::post("/rsvp")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"name":"Jane Doe","email":"Jane@X.com","guestCount":"2","message":"Vegetarian"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    tokio::time::sleep(TICK * 3).await;

    let response = app
        .oneshot(Request::get("/guest-list").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let view: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(view["entries"].as_array().unwrap().len(), 1);
    assert_eq!(view["entries"][0]["source"], "remote");
    assert_eq!(view["entries"][0]["name"], "Jane Doe");
    assert_eq!(view["totalGuests"], 2);
    assert_eq!(view["pending"], serde_json::json!([]));
    assert_eq!(view["error"], serde_json::Value::Null);

    test_app.state.guest_list.shutdown().await;
    worker.abort();
}

#[tokio::test]
async fn unconfirmed_submission_stays_pending() {
    let test_app = TestApp::new();
    let worker = spawn_guest_list_refresher(test_app.state.guest_list.clone(), &test_app.notifier);

    let receipt = test_app
        .state
        .submit_handler
        .handle(SubmitRsvpBuilder::new().build())
        .await
        .unwrap();
    tokio::time::sleep(TICK * 2).await;

    let view = test_app.state.guest_list.view().await;
    assert!(view.entries.is_empty());
    assert_eq!(view.total_guests, 0);
    assert_eq!(view.pending, vec![receipt.entry]);

    test_app.state.guest_list.shutdown().await;
    worker.abort();
}

#[tokio::test]
async fn local_entries_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local-storage.json");

    let first = file_backed_state(&path);
    first
        .submit_handler
        .handle(SubmitRsvpBuilder::new().email("ann@x.com").build())
        .await
        .unwrap();
    first
        .submit_handler
        .handle(SubmitRsvpBuilder::new().email("bob@x.com").build())
        .await
        .unwrap();
    first.guest_list.shutdown().await;

    let second = file_backed_state(&path);
    let entries = second.local_entries.list().await.unwrap();

    let emails: Vec<&str> = entries.iter().map(|e| e.email.as_str()).collect();
    assert_eq!(emails, vec!["bob@x.com", "ann@x.com"]);
    assert!(entries.iter().all(|e| e.source == EntrySource::Local));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn simultaneous_submissions_are_all_kept() {
    let dir = tempfile::tempdir().unwrap();
    let state = file_backed_state(&dir.path().join("local-storage.json"));

    let submits: Vec<_> = (0..20)
        .map(|i| {
            let state = state.clone();
            tokio::spawn(async move {
                state
                    .submit_handler
                    .handle(SubmitRsvpBuilder::new().email(format!("guest{i}@x.com")).build())
                    .await
            })
        })
        .collect();
    for submit in submits {
        let receipt = submit.await.unwrap().unwrap();
        assert!(receipt.stored());
    }

    let entries = state.local_entries.list().await.unwrap();
    assert_eq!(entries.len(), 20);
    state.guest_list.shutdown().await;
}
