use folio_core::handlers::joke::{FAILURE_MESSAGE, READY_MESSAGE};
use folio_core::joke_api::JokeClient;
use folio_core::ports::Outcome;
use folio_core::testing::{RecordedEvent, ScriptedPrompter};
use folio_core::{LoopState, MenuChoice};
use httpmock::prelude::*;
use serde_json::json;

use crate::support::{position, session_with};

const PATH: &str = "/jokes/programming/random";

fn joke_then_details_then_exit() -> ScriptedPrompter {
    ScriptedPrompter::new().selects([
        MenuChoice::TellJoke.index(),
        MenuChoice::ViewDetails.index(),
        MenuChoice::Exit.index(),
    ])
}

fn failure_reported(events: &[RecordedEvent]) -> bool {
    events.contains(&RecordedEvent::SpinnerStop(
        Outcome::Failure,
        FAILURE_MESSAGE.to_string(),
    ))
}

#[tokio::test]
async fn mocked_joke_is_told_setup_first() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path(PATH);
            then.status(200).json_body(json!([{
                "type": "programming",
                "setup": "Why do programmers prefer dark mode?",
                "punchline": "Because light attracts bugs.",
                "id": 21
            }]));
        })
        .await;

    let mut portfolio = session_with(joke_then_details_then_exit(), JokeClient::new(server.url(PATH)));
    portfolio.run().await.unwrap();

    api_mock.assert_hits_async(1).await;
    let events = portfolio.screen().events();
    assert!(events.contains(&RecordedEvent::SpinnerStop(
        Outcome::Success,
        READY_MESSAGE.to_string()
    )));
    let text = portfolio.screen().text();
    assert!(
        position(&text, "Why do programmers prefer dark mode?")
            < position(&text, "Because light attracts bugs.")
    );
}

#[tokio::test]
async fn unreachable_api_reports_failure_and_loop_continues() {
    let jokes = JokeClient::new("http://127.0.0.1:1/jokes/programming/random");
    let mut portfolio = session_with(joke_then_details_then_exit(), jokes);

    portfolio.run().await.unwrap();

    assert_eq!(portfolio.state(), LoopState::Exited);
    assert!(failure_reported(&portfolio.screen().events()));
    assert!(portfolio.screen().text().contains("About Me"));
}

#[tokio::test]
async fn empty_batch_reports_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(PATH);
            then.status(200).json_body(json!([]));
        })
        .await;

    let mut portfolio = session_with(joke_then_details_then_exit(), JokeClient::new(server.url(PATH)));
    portfolio.run().await.unwrap();

    assert!(failure_reported(&portfolio.screen().events()));
}

#[tokio::test]
async fn server_error_reports_failure_without_retry() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path(PATH);
            then.status(500).body("coffee break");
        })
        .await;

    let mut portfolio = session_with(joke_then_details_then_exit(), JokeClient::new(server.url(PATH)));
    portfolio.run().await.unwrap();

    api_mock.assert_hits_async(1).await;
    assert!(failure_reported(&portfolio.screen().events()));
    assert!(!portfolio.screen().text().contains("coffee break"));
}
