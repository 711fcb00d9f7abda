//! Submission controller lifecycle: validation, exclusivity, staleness and
//! the full round trip through the HTTP client.

mod common;

use common::mock_service::{MockResponse, MockService};
use common::{channel_sink, service_config, summary, ScriptedService};
use email_summary::client::{
    SummarizeError, SummarizerClient, SummaryService, VALIDATION_MESSAGE,
};
use email_summary::ui::editor::EXAMPLE_TEXT;
use email_summary::ui::summary::{
    plain_text, FailureKind, Resolution, SubmissionController, SubmitOutcome, SummaryState,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

fn controller(
    service: Arc<dyn SummaryService>,
) -> (
    SubmissionController,
    tokio::sync::mpsc::UnboundedReceiver<Resolution>,
) {
    let (sink, rx) = channel_sink();
    (
        SubmissionController::new(service, Handle::current(), sink),
        rx,
    )
}

async fn next_resolution(rx: &mut tokio::sync::mpsc::UnboundedReceiver<Resolution>) -> Resolution {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("resolution timed out")
        .expect("sink closed")
}

#[tokio::test]
async fn test_blank_input_fails_without_request() {
    let service = Arc::new(ScriptedService::new());
    let (mut ctl, _rx) = controller(service.clone());

    for text in ["", " ", "\n\n", "\t  \r\n"] {
        assert_eq!(ctl.submit(text), SubmitOutcome::Rejected);
        let failure = ctl.state().failure().expect("failure");
        assert_eq!(failure.kind, FailureKind::Validation);
        assert_eq!(failure.message, VALIDATION_MESSAGE);
    }

    assert_eq!(service.calls(), 0);
}

#[tokio::test]
async fn test_submit_while_pending_is_ignored() {
    let service = Arc::new(ScriptedService::gated());
    service.push(Ok(summary("first", &["a"])));
    let (mut ctl, mut rx) = controller(service.clone());

    let first = ctl.submit("first text");
    let SubmitOutcome::Dispatched { request_id } = first else {
        panic!("expected dispatch, got {first:?}");
    };
    assert!(ctl.state().is_pending());

    assert_eq!(ctl.submit("second text"), SubmitOutcome::Ignored);
    assert_eq!(ctl.submit("   "), SubmitOutcome::Ignored);
    assert_eq!(ctl.state().request_id(), Some(request_id));

    tokio::task::yield_now().await;
    service.release();
    let resolution = next_resolution(&mut rx).await;
    assert!(ctl.resolve(resolution));

    assert_eq!(service.calls(), 1);
    assert_eq!(service.texts(), vec!["first text".to_string()]);
    assert_eq!(
        ctl.state().result().map(|r| r.summary.as_str()),
        Some("first")
    );
}

#[tokio::test]
async fn test_resubmit_clears_previous_outcome() {
    let service = Arc::new(ScriptedService::new());
    service.push(Err(SummarizeError::ServiceRejection {
        status: 503,
        message: "busy".to_string(),
    }));
    service.push(Ok(summary("done", &["x"])));
    let (mut ctl, mut rx) = controller(service.clone());

    ctl.submit("one");
    let resolution = next_resolution(&mut rx).await;
    ctl.resolve(resolution);
    assert_eq!(ctl.state().error_message(), Some("busy"));

    ctl.submit("two");
    assert!(ctl.state().is_pending());
    assert!(ctl.state().failure().is_none());
    assert!(ctl.state().result().is_none());

    let resolution = next_resolution(&mut rx).await;
    ctl.resolve(resolution);
    assert!(ctl.state().failure().is_none());
    assert_eq!(ctl.state().result().map(|r| r.summary.as_str()), Some("done"));

    // A validation failure replaces the previous result too.
    ctl.submit("");
    assert!(ctl.state().result().is_none());
    assert_eq!(ctl.state().error_message(), Some(VALIDATION_MESSAGE));
}

#[tokio::test]
async fn test_stale_resolution_is_dropped() {
    let service = Arc::new(ScriptedService::gated());
    let (mut ctl, _rx) = controller(service.clone());

    let SubmitOutcome::Dispatched { request_id } = ctl.submit("text") else {
        panic!("expected dispatch");
    };

    let stale = Resolution {
        request_id: request_id + 100,
        outcome: Ok(summary("stale", &[])),
    };
    assert!(!ctl.resolve(stale));
    assert_eq!(
        ctl.state(),
        &SummaryState::Pending {
            request_id,
            animation_tick: 0
        }
    );
}

#[tokio::test]
async fn test_request_ids_increase_across_submissions() {
    let service = Arc::new(ScriptedService::new());
    let (mut ctl, mut rx) = controller(service.clone());

    let SubmitOutcome::Dispatched { request_id: first } = ctl.submit("a") else {
        panic!("expected dispatch");
    };
    let resolution = next_resolution(&mut rx).await;
    ctl.resolve(resolution);

    ctl.submit(" ");
    let SubmitOutcome::Dispatched { request_id: second } = ctl.submit("b") else {
        panic!("expected dispatch");
    };
    assert!(second > first);

    // The first request's id no longer matches anything in flight.
    let late = Resolution {
        request_id: first,
        outcome: Ok(summary("late", &[])),
    };
    assert!(!ctl.resolve(late));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_example_emails_end_to_end() {
    const SUMMARY: &str = "Three emails cover a meeting reminder, a project status update, \
                           and a budget approval request.";
    let mock = MockService::start().await;
    mock.enqueue_response(
        MockResponse::summary(
            SUMMARY,
            &[
                "Attend 10 AM meeting",
                "Review Q4 status",
                "Approve budget proposal",
            ],
        )
        .with_delay(50),
    )
    .await;

    let client = SummarizerClient::new(&service_config(&mock.base_url())).expect("client");
    let (mut ctl, mut rx) = controller(Arc::new(client));

    assert!(matches!(
        ctl.submit(EXAMPLE_TEXT),
        SubmitOutcome::Dispatched { .. }
    ));
    assert!(plain_text(ctl.state()).contains("Generowanie podsumowania"));

    let resolution = next_resolution(&mut rx).await;
    assert!(ctl.resolve(resolution));

    assert_eq!(ctl.state().result().expect("succeeded").summary, SUMMARY);

    let rendered = plain_text(ctl.state());
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(&lines[..3], ["Podsumowanie", "Streszczenie", SUMMARY]);
    let heading = lines
        .iter()
        .position(|line| *line == "Najważniejsze zadania")
        .expect("actions heading");
    assert_eq!(
        &lines[heading + 1..],
        [
            "1. Attend 10 AM meeting",
            "2. Review Q4 status",
            "3. Approve budget proposal",
        ]
    );

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].json()["text"], EXAMPLE_TEXT);
}
