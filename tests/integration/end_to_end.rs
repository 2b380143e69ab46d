//! Dispatcher over the model-backed executor and a mock OpenAI-compatible server.

use super::test_utils::thirteen_tags;
use brandkit::provider::OpenAIClient;
use brandkit::request::{CaptionsRequest, ListingRequest, ProductRequest};
use brandkit::{Dispatcher, GenerationResult, ModelPromptExecutor};
use mockito::Matcher;
use std::sync::Arc;

fn chat_body(content: &serde_json::Value) -> String {
    serde_json::json!({
        "model": "gpt-4o-mini",
        "choices": [{
            "message": {"role": "assistant", "content": content.to_string()},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

fn dispatcher(server: &mockito::ServerGuard) -> Dispatcher {
    let client = OpenAIClient::new(
        "gpt-4o-mini".to_string(),
        None,
        "test-key".to_string(),
        Some(server.url()),
    )
    .unwrap();
    Dispatcher::new(Arc::new(ModelPromptExecutor::new(Arc::new(client))))
}

#[tokio::test]
async fn test_captions_round_trip_through_provider() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "temperature": 0.7,
            "max_tokens": 500
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_body(&serde_json::json!({
            "captions": ["One #mug", "Two #coffee", "Three #handmade"]
        })))
        .expect(1)
        .create_async()
        .await;

    let result = dispatcher(&server)
        .generate_captions(&CaptionsRequest {
            product_name: "Speckled Mug".to_string(),
            tone: "Persuasive".to_string(),
            platform: "Instagram".to_string(),
        })
        .await;

    assert_eq!(
        result,
        GenerationResult::Data(vec![
            "One #mug".to_string(),
            "Two #coffee".to_string(),
            "Three #handmade".to_string()
        ])
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_etsy_listing_with_wrong_tag_count_falls_back() {
    let mut server = mockito::Server::new_async().await;
    let mut tags = thirteen_tags();
    tags.pop();
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_body(&serde_json::json!({
            "etsyTitle": "Speckled Mug",
            "etsyTags": tags
        })))
        .create_async()
        .await;

    let result = dispatcher(&server)
        .generate_etsy_listing(&ListingRequest {
            product_name: "Speckled Mug".to_string(),
            product_description: "Stoneware".to_string(),
        })
        .await;

    assert_eq!(
        result.error(),
        Some("Failed to generate Etsy listing. Please try again.")
    );
}

#[tokio::test]
async fn test_etsy_listing_with_thirteen_tags_succeeds() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_body(&serde_json::json!({
            "etsyTitle": "Speckled Mug",
            "etsyTags": thirteen_tags()
        })))
        .create_async()
        .await;

    let result = dispatcher(&server)
        .generate_etsy_listing(&ListingRequest {
            product_name: "Speckled Mug".to_string(),
            product_description: "Stoneware".to_string(),
        })
        .await;

    let listing = result.data().expect("listing");
    assert_eq!(listing.title, "Speckled Mug");
    assert_eq!(listing.tags.len(), 13);
}

#[tokio::test]
async fn test_provider_auth_failure_hides_details() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body("invalid api key sk-live-123")
        .create_async()
        .await;

    let result = dispatcher(&server)
        .generate_description(&ProductRequest::new("Mug"))
        .await;

    assert_eq!(
        result,
        GenerationResult::Error("Failed to generate description. Please try again.".to_string())
    );
}

#[tokio::test]
async fn test_image_without_data_uses_empty_image_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/images/generations")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":[{"revised_prompt":"filtered"}]}"#)
        .create_async()
        .await;

    let result = dispatcher(&server)
        .generate_image(&ProductRequest::new("Mug"))
        .await;

    assert_eq!(
        result.error(),
        Some("Failed to generate image. Please try a different product name.")
    );
}
