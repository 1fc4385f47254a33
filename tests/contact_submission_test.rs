use anyhow::Result;
use butterfly_site::domain::model::{ContactPayload, SubmissionOutcome};
use butterfly_site::{ContactForm, FormStatus, HttpSubmission, SimulatedSubmission, SiteError};
use httpmock::prelude::*;
use std::time::Duration;
use tokio_test::assert_ok;

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field("name", "A").unwrap();
    form.set_field("email", "a@b.com").unwrap();
    form.set_field("message", "hi").unwrap();
    form
}

#[tokio::test]
async fn test_simulated_submission_accepts_and_clears_form() -> Result<()> {
    let service = SimulatedSubmission::new(Duration::from_millis(10));
    let mut form = filled_form();

    let receipt = assert_ok!(form.submit(&service).await);

    assert_eq!(receipt.outcome, SubmissionOutcome::Accepted);
    assert_eq!(form.status(), FormStatus::Success);
    assert_eq!(form.fields(), &ContactPayload::default());
    Ok(())
}

#[tokio::test]
async fn test_http_submission_posts_json() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/contact")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "name": "A",
                "email": "a@b.com",
                "message": "hi"
            }));
        then.status(201);
    });

    let service = HttpSubmission::new(server.url("/contact"), Duration::from_secs(5))?;
    let mut form = filled_form();
    let receipt = form.submit(&service).await?;

    mock.assert();
    assert_eq!(receipt.outcome, SubmissionOutcome::Accepted);
    assert!(form.fields().is_blank());
    Ok(())
}

#[tokio::test]
async fn test_http_client_error_is_a_rejection() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/contact");
        then.status(422);
    });

    let service = HttpSubmission::new(server.url("/contact"), Duration::from_secs(5))?;
    let mut form = filled_form();
    let receipt = form.submit(&service).await?;

    mock.assert();
    assert_eq!(receipt.outcome, SubmissionOutcome::Rejected);
    assert_eq!(form.status(), FormStatus::Error);
    assert_eq!(form.fields().email, "a@b.com");
    Ok(())
}

#[tokio::test]
async fn test_http_server_error_is_a_submission_error() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/contact");
        then.status(503);
    });

    let service = HttpSubmission::new(server.url("/contact"), Duration::from_secs(5))?;
    let mut form = filled_form();
    let err = form.submit(&service).await.unwrap_err();

    mock.assert();
    assert!(matches!(err, SiteError::SubmissionError { .. }));
    assert_eq!(form.status(), FormStatus::Error);
    assert_eq!(
        form.status().message(),
        Some("Something went wrong. Please try again.")
    );
    Ok(())
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_submission_error() -> Result<()> {
    // Port 9 (discard) is essentially never listening on test machines.
    let service = HttpSubmission::new("http://127.0.0.1:9/contact", Duration::from_secs(2))?;
    let mut form = filled_form();

    let err = form.submit(&service).await.unwrap_err();
    assert!(matches!(err, SiteError::SubmissionError { .. }));
    Ok(())
}

#[tokio::test]
async fn test_invalid_email_is_caught_before_sending() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/contact");
        then.status(200);
    });

    let service = HttpSubmission::new(server.url("/contact"), Duration::from_secs(5))?;
    let mut form = filled_form();
    form.set_field("email", "not-an-address")?;

    let err = form.submit(&service).await.unwrap_err();

    mock.assert_hits(0);
    assert!(matches!(err, SiteError::ValidationError { .. }));
    Ok(())
}
