//! Provider clients against a mock HTTP server.

use brandkit::provider::{
    ChatMessage, CompletionOptions, GeminiClient, ModelProviderClient, OllamaClient, OpenAIClient,
};
use brandkit::ApiError;
use mockito::Matcher;

fn messages() -> Vec<ChatMessage> {
    vec![ChatMessage::system("Answer in JSON."), ChatMessage::user("Describe a mug")]
}

fn openai(server: &mockito::ServerGuard) -> OpenAIClient {
    OpenAIClient::new(
        "gpt-4o-mini".to_string(),
        None,
        "test-key".to_string(),
        Some(server.url()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_openai_completion_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "model": "gpt-4o-mini",
            "response_format": {"type": "json_object"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"model":"gpt-4o-mini","choices":[{"message":{"role":"assistant","content":"{\"productDescription\":\"A mug.\"}"},"finish_reason":"stop"}],"usage":{"prompt_tokens":12,"completion_tokens":8,"total_tokens":20}}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let options = CompletionOptions {
        json_output: true,
        ..Default::default()
    };
    let response = openai(&server).complete(messages(), options).await.unwrap();

    assert_eq!(response.content, r#"{"productDescription":"A mug."}"#);
    assert_eq!(response.usage.total_tokens, 20);
    assert_eq!(response.finish_reason.as_deref(), Some("stop"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_openai_status_codes_map_to_errors() {
    let mut server = mockito::Server::new_async().await;
    let client = openai(&server);

    let _auth = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body("invalid api key")
        .create_async()
        .await;
    let err = client
        .complete(messages(), CompletionOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::ProviderAuthFailed(_)), "{:?}", err);

    server.reset_async().await;
    let _rate = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body("slow down")
        .create_async()
        .await;
    let err = client
        .complete(messages(), CompletionOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::ProviderRateLimit(_)), "{:?}", err);
}

#[tokio::test]
async fn test_openai_image_returns_decoded_bytes() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/images/generations")
        .match_body(Matcher::PartialJson(serde_json::json!({"n": 1})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":[{"b64_json":"iVBORw0KGgo="}]}"#)
        .create_async()
        .await;

    let image = openai(&server)
        .generate_image("A mug")
        .await
        .unwrap()
        .expect("image");
    assert_eq!(image.mime_type, "image/png");
    assert_eq!(image.to_data_uri(), "data:image/png;base64,iVBORw0KGgo=");
}

#[tokio::test]
async fn test_openai_image_without_data_is_none() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/images/generations")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    assert!(openai(&server).generate_image("A mug").await.unwrap().is_none());
}

#[tokio::test]
async fn test_gemini_completion_and_missing_model() {
    let mut server = mockito::Server::new_async().await;
    let client = GeminiClient::new(
        "gemini-2.5-flash".to_string(),
        None,
        "g-key".to_string(),
        Some(server.url()),
    )
    .unwrap();

    let _ok = server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .match_header("x-goog-api-key", "g-key")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "generationConfig": {"responseMimeType": "application/json"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"{\"captions\":"},{"text":"[\"a\",\"b\",\"c\"]}"}]},"finishReason":"STOP"}],"usageMetadata":{"promptTokenCount":5,"candidatesTokenCount":7,"totalTokenCount":12}}"#,
        )
        .create_async()
        .await;

    let options = CompletionOptions {
        json_output: true,
        ..Default::default()
    };
    let response = client.complete(messages(), options).await.unwrap();
    assert_eq!(response.content, r#"{"captions":["a","b","c"]}"#);
    assert_eq!(response.usage.total_tokens, 12);
    assert_eq!(response.model, "gemini-2.5-flash");

    server.reset_async().await;
    let _missing = server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .with_status(404)
        .with_body("model not found")
        .create_async()
        .await;
    let err = client
        .complete(messages(), CompletionOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::ProviderModelNotFound(_)), "{:?}", err);
}

#[tokio::test]
async fn test_gemini_image_prediction() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/imagen-4.0-fast-generate-001:predict")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"predictions":[{"bytesBase64Encoded":"AQID","mimeType":"image/jpeg"}]}"#)
        .create_async()
        .await;

    let client = GeminiClient::new(
        "gemini-2.5-flash".to_string(),
        None,
        "g-key".to_string(),
        Some(server.url()),
    )
    .unwrap();
    let image = client.generate_image("A mug").await.unwrap().expect("image");
    assert_eq!(image.to_data_uri(), "data:image/jpeg;base64,AQID");
}

#[tokio::test]
async fn test_ollama_cannot_generate_images() {
    let client = OllamaClient::new("llama3.1".to_string(), None).unwrap();
    let err = client.generate_image("A mug").await.unwrap_err();
    assert!(matches!(err, ApiError::ProviderUnsupported { .. }), "{:?}", err);
}
