//! Dispatcher contract: validation gates execution, payloads pass through
//! untouched, and failures become the operation's fallback message.

use super::test_utils::{thirteen_tags, StubExecutor};
use brandkit::prompt::output::{ColorSwatch, EtsyListing, MarketTrends, ShopifyListing};
use brandkit::request::{
    BrandStoryRequest, CaptionsRequest, EmailReplyRequest, ListingRequest, MarketTrendsRequest,
    Platform, ProductRequest, Tone, TranslationRequest,
};
use brandkit::{Dispatcher, GenerationInput, GenerationOutput, GenerationResult, OperationKind};

fn captions_payload() -> GenerationOutput {
    GenerationOutput::Captions(vec![
        "Sip slowly, live boldly.".to_string(),
        "Your new morning ritual is here.".to_string(),
        "Handmade for the coffee obsessed.".to_string(),
    ])
}

#[tokio::test]
async fn test_two_char_product_name_reaches_executor() {
    let stub = StubExecutor::returning(GenerationOutput::Description("A fine desk.".to_string()));
    let dispatcher = Dispatcher::new(stub.clone());

    let result = dispatcher
        .generate_description(&ProductRequest::new("AB"))
        .await;

    assert_eq!(result, GenerationResult::Data("A fine desk.".to_string()));
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn test_one_char_product_name_is_rejected_without_call() {
    let stub = StubExecutor::returning(GenerationOutput::Description("unused".to_string()));
    let dispatcher = Dispatcher::new(stub.clone());

    let result = dispatcher
        .generate_description(&ProductRequest::new("A"))
        .await;

    assert_eq!(
        result,
        GenerationResult::Error("Product name must be at least 2 characters.".to_string())
    );
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_captions_persuasive_instagram_yields_three() {
    let stub = StubExecutor::returning(captions_payload());
    let dispatcher = Dispatcher::new(stub.clone());

    let result = dispatcher
        .generate_captions(&CaptionsRequest {
            product_name: "Speckled Mug".to_string(),
            tone: "Persuasive".to_string(),
            platform: "Instagram".to_string(),
        })
        .await;

    let captions = result.data().expect("captions payload");
    assert_eq!(captions.len(), 3);
    assert!(captions.iter().all(|c| c.split_whitespace().count() < 70));

    match &stub.inputs()[0] {
        GenerationInput::Captions(input) => {
            assert_eq!(input.tone, Tone::Persuasive);
            assert_eq!(input.platform, Platform::Instagram);
        }
        other => panic!("unexpected input: {:?}", other),
    }
}

#[tokio::test]
async fn test_captions_missing_platform_defaults_to_general() {
    let stub = StubExecutor::returning(captions_payload());
    let dispatcher = Dispatcher::new(stub.clone());

    let request: CaptionsRequest =
        serde_json::from_str(r#"{"productName":"Desk","tone":"Creative"}"#).unwrap();
    assert!(dispatcher.generate_captions(&request).await.is_data());

    match &stub.inputs()[0] {
        GenerationInput::Captions(input) => assert_eq!(input.platform, Platform::General),
        other => panic!("unexpected input: {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_translation_content_is_rejected_without_call() {
    let stub = StubExecutor::returning(GenerationOutput::Translation("unused".to_string()));
    let dispatcher = Dispatcher::new(stub.clone());

    let result = dispatcher
        .translate(&TranslationRequest {
            content: String::new(),
            target_language: "Hindi".to_string(),
        })
        .await;

    assert_eq!(
        result.error(),
        Some("Content to translate cannot be empty.")
    );
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_etsy_listing_has_thirteen_tags() {
    let listing = EtsyListing {
        title: "Handmade Speckled Ceramic Coffee Mug".to_string(),
        tags: thirteen_tags(),
    };
    let stub = StubExecutor::returning(GenerationOutput::EtsyListing(listing.clone()));
    let dispatcher = Dispatcher::new(stub.clone());

    let result = dispatcher
        .generate_etsy_listing(&ListingRequest {
            product_name: "Speckled Mug".to_string(),
            product_description: "Wheel-thrown stoneware mug".to_string(),
        })
        .await;

    assert_eq!(result.data().map(|l| l.tags.len()), Some(13));
    assert_eq!(result, GenerationResult::Data(listing));
}

#[tokio::test]
async fn test_empty_image_is_error_not_success() {
    let stub = StubExecutor::returning(GenerationOutput::Image(String::new()));
    let dispatcher = Dispatcher::new(stub.clone());

    let result = dispatcher.generate_image(&ProductRequest::new("Mug")).await;

    assert_eq!(
        result,
        GenerationResult::Error(
            "Failed to generate image. Please try a different product name.".to_string()
        )
    );
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn test_image_data_uri_passes_through() {
    let uri = "data:image/png;base64,iVBORw0KGgo=".to_string();
    let stub = StubExecutor::returning(GenerationOutput::Image(uri.clone()));
    let dispatcher = Dispatcher::new(stub);

    let result = dispatcher.generate_image(&ProductRequest::new("Mug")).await;
    assert_eq!(result, GenerationResult::Data(uri));
}

#[tokio::test]
async fn test_every_operation_uses_its_own_fallback() {
    let stub = StubExecutor::failing();
    let dispatcher = Dispatcher::new(stub.clone());
    let product = ProductRequest::new("Walnut Desk");
    let listing = ListingRequest {
        product_name: "Walnut Desk".to_string(),
        product_description: "Solid walnut writing desk".to_string(),
    };

    let errors = vec![
        (
            OperationKind::Description,
            dispatcher.generate_description(&product).await.into_result().err(),
        ),
        (
            OperationKind::Captions,
            dispatcher
                .generate_captions(&CaptionsRequest {
                    product_name: "Walnut Desk".to_string(),
                    tone: "Professional".to_string(),
                    platform: "LinkedIn".to_string(),
                })
                .await
                .into_result()
                .err(),
        ),
        (
            OperationKind::Image,
            dispatcher.generate_image(&product).await.into_result().err(),
        ),
        (
            OperationKind::BrandStory,
            dispatcher
                .generate_brand_story(&BrandStoryRequest {
                    brand_name: "Oak & Ash".to_string(),
                    business_type: "Furniture studio".to_string(),
                })
                .await
                .into_result()
                .err(),
        ),
        (
            OperationKind::MarketTrends,
            dispatcher
                .analyze_market_trends(&MarketTrendsRequest {
                    product_or_industry: "Furniture".to_string(),
                })
                .await
                .into_result()
                .err(),
        ),
        (
            OperationKind::Translation,
            dispatcher
                .translate(&TranslationRequest {
                    content: "Hello".to_string(),
                    target_language: "French".to_string(),
                })
                .await
                .into_result()
                .err(),
        ),
        (
            OperationKind::EtsyListing,
            dispatcher
                .generate_etsy_listing(&listing)
                .await
                .into_result()
                .err(),
        ),
        (
            OperationKind::ShopifyListing,
            dispatcher
                .generate_shopify_listing(&listing)
                .await
                .into_result()
                .err(),
        ),
        (
            OperationKind::EmailReply,
            dispatcher
                .generate_email_reply(&EmailReplyRequest {
                    topic: "Order delayed".to_string(),
                    tone: "Direct".to_string(),
                })
                .await
                .into_result()
                .err(),
        ),
    ];

    assert_eq!(stub.calls(), 9);
    for (operation, error) in errors {
        assert_eq!(error.as_deref(), Some(operation.failure_message()));
    }
}

#[tokio::test]
async fn test_payloads_are_returned_unchanged() {
    let trends = MarketTrends {
        keywords: vec!["walnut desk".to_string()],
        color_palette: vec![ColorSwatch {
            name: "Walnut".to_string(),
            hex: "#5C4033".to_string(),
        }],
        style_suggestions: vec!["Mid-century legs".to_string()],
    };
    let dispatcher = Dispatcher::new(StubExecutor::returning(GenerationOutput::MarketTrends(
        trends.clone(),
    )));
    let result = dispatcher
        .analyze_market_trends(&MarketTrendsRequest {
            product_or_industry: "Home office".to_string(),
        })
        .await;
    assert_eq!(result, GenerationResult::Data(trends));

    let shopify = ShopifyListing {
        title: "Walnut Writing Desk".to_string(),
        meta_description: "Solid walnut desk, handmade.".to_string(),
        tags: vec!["desk".to_string(), "walnut".to_string()],
    };
    let dispatcher = Dispatcher::new(StubExecutor::returning(GenerationOutput::ShopifyListing(
        shopify.clone(),
    )));
    let result = dispatcher
        .generate_shopify_listing(&ListingRequest {
            product_name: "Desk".to_string(),
            product_description: "Walnut".to_string(),
        })
        .await;
    assert_eq!(result, GenerationResult::Data(shopify));
}

#[tokio::test]
async fn test_email_tone_is_case_sensitive() {
    let stub = StubExecutor::returning(GenerationOutput::EmailReply("unused".to_string()));
    let dispatcher = Dispatcher::new(stub.clone());

    let result = dispatcher
        .generate_email_reply(&EmailReplyRequest {
            topic: "Refund request".to_string(),
            tone: "friendly".to_string(),
        })
        .await;

    assert_eq!(
        result.error(),
        Some("Tone must be one of: Formal, Friendly, Direct.")
    );
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_generate_all_runs_three_operations() {
    let stub = StubExecutor::returning(captions_payload());
    let dispatcher = Dispatcher::new(stub.clone());

    let result = dispatcher
        .generate_all(&CaptionsRequest {
            product_name: "Mug".to_string(),
            tone: "Creative".to_string(),
            platform: "X (Twitter)".to_string(),
        })
        .await;

    assert_eq!(stub.calls(), 3);
    // The stub answers captions for every operation; only captions conform.
    assert!(result.captions.is_data());
    assert_eq!(
        result.description.error(),
        Some("Failed to generate description. Please try again.")
    );
    assert_eq!(
        result.image.error(),
        Some("Failed to generate image. Please try again.")
    );
}

#[tokio::test]
async fn test_repeated_calls_conform_in_shape() {
    let stub = StubExecutor::returning(captions_payload());
    let dispatcher = Dispatcher::new(stub.clone());
    let request = CaptionsRequest {
        product_name: "Mug".to_string(),
        tone: "Creative".to_string(),
        platform: String::new(),
    };

    for _ in 0..3 {
        let result = dispatcher.generate_captions(&request).await;
        assert_eq!(result.data().map(Vec::len), Some(3));
    }
    assert_eq!(stub.calls(), 3);
}
