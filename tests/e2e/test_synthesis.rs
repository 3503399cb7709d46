use crate::helpers::{
    stubs::{expected_audio_for, EchoTtsRepository, FailingTtsRepository},
    TestContext,
};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn it_should_synthesize_sinhala_text() {
    let ctx = TestContext::new(Arc::new(EchoTtsRepository)).await;

    let response = ctx
        .client
        .post("/synthesize", &json!({ "text": "අම" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.header("content-type").map(String::as_str),
        Some("audio/mpeg")
    );
    response.assert_header_exists("x-character-count");
    // The handler extracts the RequestId extension, so the middleware must
    // have run and tagged the response as well.
    response.assert_header_exists("x-request-id");

    // The echo stub returns the SSML that reached the provider: "අම"
    // transliterates to "ama" and is wrapped in a single prosody element.
    assert_eq!(
        String::from_utf8(response.body_bytes.clone()).unwrap(),
        "<speak><prosody pitch=\"0.5st\">ama</prosody></speak>"
    );
}

#[tokio::test]
async fn it_should_pass_unmapped_characters_through() {
    let ctx = TestContext::new(Arc::new(EchoTtsRepository)).await;

    let response = ctx
        .client
        .post("/synthesize", &json!({ "text": "ka ta" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body_bytes, expected_audio_for("ka ta"));
}

#[tokio::test]
async fn it_should_reject_empty_text() {
    let ctx = TestContext::new(Arc::new(EchoTtsRepository)).await;

    let response = ctx
        .client
        .post("/synthesize", &json!({ "text": "" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_message("Text cannot be empty");
}

#[tokio::test]
async fn it_should_reject_whitespace_only_text() {
    let ctx = TestContext::new(Arc::new(EchoTtsRepository)).await;

    let response = ctx
        .client
        .post("/synthesize", &json!({ "text": "   " }))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn it_should_reject_a_missing_text_field() {
    let ctx = TestContext::new(Arc::new(EchoTtsRepository)).await;

    let response = ctx
        .client
        .post("/synthesize", &json!({ "body": "අම" }))
        .await
        .unwrap();

    // Json extractor rejection; any 4xx is acceptable, never a 500.
    assert!(
        response.status.is_client_error(),
        "expected client error, got {}",
        response.status
    );
}

#[tokio::test]
async fn it_should_return_500_with_a_generic_message_on_provider_failure() {
    let ctx = TestContext::new(Arc::new(FailingTtsRepository)).await;

    let response = ctx
        .client
        .post("/synthesize", &json!({ "text": "අම" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_error_message("Error synthesizing speech");

    // The provider's failure detail stays server-side.
    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert!(!body.contains("quota"));
}

#[tokio::test]
async fn it_should_isolate_concurrent_requests() {
    let ctx = TestContext::new(Arc::new(EchoTtsRepository)).await;

    let texts = ["අම", "ක", "ග", "අආ", "මම", "සස", "හහ", "අඉඋ"];

    let responses = futures::future::join_all(texts.iter().map(|text| {
        let client = ctx.client.clone();
        async move {
            let response = client
                .post("/synthesize", &json!({ "text": text }))
                .await
                .unwrap();
            (*text, response)
        }
    }))
    .await;

    for (text, response) in responses {
        response.assert_status(StatusCode::OK);
        assert_eq!(
            response.body_bytes,
            expected_audio_for(text),
            "response for {text:?} carried another request's audio"
        );
    }
}
