// Describe flow tests against a mock OpenAI endpoint
// Author: kelexine (https://github.com/kelexine)

mod support;

use image_describer::openai::image_data_uri;
use image_describer::{Credential, DescribeError, Description};
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_returns_first_completion() {
    let mut server = support::start().await;
    let mock = server
        .mock("POST", support::COMPLETIONS_PATH)
        .match_header("authorization", "Bearer sk-test")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(support::APPLE_RESPONSE)
        .expect(1)
        .create_async()
        .await;

    let requester = support::requester_for(&server);
    let credential = Credential::new("sk-test");
    let description = requester
        .describe(support::JPEG_BYTES, Some(&credential))
        .await
        .unwrap();

    assert_eq!(description, Description::Text("A red apple on a table.".to_string()));
    assert_eq!(description.as_str(), "A red apple on a table.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_embeds_image_and_fixed_limits() {
    let image: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();

    let mut server = support::start().await;
    let mock = server
        .mock("POST", support::COMPLETIONS_PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({
                "model": "gpt-4o-mini",
                "max_tokens": 3000,
            })),
            Matcher::Regex(regex::escape(&image_data_uri(&image))),
            Matcher::Regex(r#""detail":"high""#.to_string()),
        ]))
        .with_status(200)
        .with_body(support::APPLE_RESPONSE)
        .expect(1)
        .create_async()
        .await;

    let requester = support::requester_for(&server);
    let credential = Credential::new("sk-test");
    let description = requester.describe(&image, Some(&credential)).await.unwrap();

    assert!(description.is_available());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_choices_yields_sentinel() {
    let mut server = support::start().await;
    let mock = server
        .mock("POST", support::COMPLETIONS_PATH)
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let requester = support::requester_for(&server);
    let credential = Credential::new("sk-test");
    let description = requester
        .describe(support::JPEG_BYTES, Some(&credential))
        .await
        .unwrap();

    assert_eq!(description, Description::Unavailable);
    assert_eq!(description.to_string(), "Description not available");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upstream_error_body_yields_sentinel() {
    let mut server = support::start().await;
    let _mock = server
        .mock("POST", support::COMPLETIONS_PATH)
        .with_status(401)
        .with_body(r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#)
        .create_async()
        .await;

    let requester = support::requester_for(&server);
    let credential = Credential::new("sk-wrong");
    let description = requester
        .describe(support::JPEG_BYTES, Some(&credential))
        .await
        .unwrap();

    assert_eq!(description, Description::Unavailable);
}

#[tokio::test]
async fn test_non_json_body_yields_sentinel() {
    let mut server = support::start().await;
    let _mock = server
        .mock("POST", support::COMPLETIONS_PATH)
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let requester = support::requester_for(&server);
    let credential = Credential::new("sk-test");
    let description = requester
        .describe(support::JPEG_BYTES, Some(&credential))
        .await
        .unwrap();

    assert!(!description.is_available());
}

#[tokio::test]
async fn test_empty_content_is_a_real_description() {
    let mut server = support::start().await;
    let _mock = server
        .mock("POST", support::COMPLETIONS_PATH)
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":""}}]}"#)
        .create_async()
        .await;

    let requester = support::requester_for(&server);
    let credential = Credential::new("sk-test");
    let description = requester
        .describe(support::JPEG_BYTES, Some(&credential))
        .await
        .unwrap();

    assert_eq!(description, Description::Text(String::new()));
}

#[tokio::test]
async fn test_missing_credential_makes_no_call() {
    let mut server = support::start().await;
    let mock = server
        .mock("POST", support::COMPLETIONS_PATH)
        .expect(0)
        .create_async()
        .await;

    let requester = support::requester_for(&server);

    let err = requester.describe(support::JPEG_BYTES, None).await.unwrap_err();
    assert!(matches!(err, DescribeError::MissingCredential));

    let blank = Credential::new("");
    let err = requester
        .describe(support::JPEG_BYTES, Some(&blank))
        .await
        .unwrap_err();
    assert!(matches!(err, DescribeError::MissingCredential));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_image_makes_no_call() {
    let mut server = support::start().await;
    let mock = server
        .mock("POST", support::COMPLETIONS_PATH)
        .expect(0)
        .create_async()
        .await;

    let requester = support::requester_for(&server);
    let credential = Credential::new("sk-test");
    let err = requester.describe(b"", Some(&credential)).await.unwrap_err();

    assert!(matches!(err, DescribeError::InvalidInput(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_refused_connection_is_transport_error() {
    let requester = support::requester_at(&support::refused_base_url());
    let credential = Credential::new("sk-test");

    let err = requester
        .describe(support::JPEG_BYTES, Some(&credential))
        .await
        .unwrap_err();

    assert!(matches!(err, DescribeError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_concurrent_calls_share_one_requester() {
    let mut server = support::start().await;
    let mock = server
        .mock("POST", support::COMPLETIONS_PATH)
        .with_status(200)
        .with_body(support::APPLE_RESPONSE)
        .expect(4)
        .create_async()
        .await;

    let requester = support::requester_for(&server);
    let mut handles = Vec::new();
    for _ in 0..4 {
        let requester = requester.clone();
        handles.push(tokio::spawn(async move {
            let credential = Credential::new("sk-test");
            requester.describe(support::JPEG_BYTES, Some(&credential)).await
        }));
    }

    for handle in handles {
        let description = handle.await.unwrap().unwrap();
        assert_eq!(description.as_str(), "A red apple on a table.");
    }
    mock.assert_async().await;
}
