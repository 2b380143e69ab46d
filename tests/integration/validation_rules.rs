//! Validation of wire-shaped (camelCase JSON) requests through the public API.

use super::test_utils::StubExecutor;
use brandkit::request::{BrandStoryRequest, GenerationRequest, ListingRequest, MarketTrendsRequest};
use brandkit::validation::validate;
use brandkit::{Dispatcher, GenerationOutput, GenerationResult, OperationKind};

#[test]
fn test_brand_story_reports_first_violation_only() {
    let request: BrandStoryRequest =
        serde_json::from_str(r#"{"brandName":"A","businessType":"B"}"#).unwrap();
    let err = validate(&request).unwrap_err();
    assert_eq!(err.message(), "Brand name must be at least 2 characters.");

    let request: BrandStoryRequest =
        serde_json::from_str(r#"{"brandName":"Acme","businessType":"B"}"#).unwrap();
    let err = validate(&request).unwrap_err();
    assert_eq!(err.message(), "Business type must be at least 2 characters.");
}

#[test]
fn test_listing_fields_in_declaration_order() {
    let request: ListingRequest =
        serde_json::from_str(r#"{"productName":"","productDescription":""}"#).unwrap();
    assert_eq!(
        validate(&request).unwrap_err().message(),
        "Product name must be at least 2 characters."
    );

    let request: ListingRequest =
        serde_json::from_str(r#"{"productName":"Mug","productDescription":"   "}"#).unwrap();
    assert_eq!(
        validate(&request).unwrap_err().message(),
        "Product description cannot be empty."
    );
}

#[test]
fn test_missing_fields_deserialize_as_empty_and_fail_validation() {
    let request: MarketTrendsRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(
        validate(&request).unwrap_err().message(),
        "Product or industry must be at least 2 characters."
    );
}

#[test]
fn test_normalized_values_are_trimmed() {
    let request: MarketTrendsRequest =
        serde_json::from_str(r#"{"productOrIndustry":"  Candles  "}"#).unwrap();
    assert_eq!(validate(&request).unwrap().product_or_industry, "Candles");
}

#[tokio::test]
async fn test_tagged_request_with_invalid_platform_is_rejected() {
    let stub = StubExecutor::returning(GenerationOutput::Captions(vec![]));
    let dispatcher = Dispatcher::new(stub.clone());

    let request: GenerationRequest = serde_json::from_str(
        r#"{"operation":"captions","productName":"Mug","tone":"Creative","platform":"TikTok"}"#,
    )
    .unwrap();
    assert_eq!(request.operation(), OperationKind::Captions);

    let result = dispatcher.dispatch(&request).await;
    assert_eq!(
        result,
        GenerationResult::Error(
            "Platform must be one of: General, Instagram, X (Twitter), LinkedIn.".to_string()
        )
    );
    assert_eq!(stub.calls(), 0);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"error": "Platform must be one of: General, Instagram, X (Twitter), LinkedIn."})
    );
}
