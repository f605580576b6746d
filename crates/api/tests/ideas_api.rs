//! HTTP-level integration tests for the `/api/ideas` endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json, post_raw};
use ideaplanner_core::catalog::Catalog;
use serde_json::{json, Value};

fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("expected an array")
        .iter()
        .map(|v| v.as_str().expect("expected a string").to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Test: the worked example from the planner docs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn gaming_tiktok_expert_fast() {
    let response = post_json(
        build_test_app(),
        "/api/ideas",
        json!({ "theme": "gaming", "platform": "tiktok", "tone": "expert", "pacing": "fast" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let idea = body_json(response).await;
    assert_eq!(
        idea["platform"],
        json!({
            "name": "TikTok",
            "duration": "35-50 seconds",
            "cta": "Prompt viewers to stitch their attempt and follow for part two",
        })
    );
    assert_eq!(idea["pacing"], "Fast-paced");
    assert_eq!(
        idea["tone"],
        "Deliver fast-paced breakdowns with data or references to stand out."
    );

    let catalog = Catalog::builtin();
    let gaming = catalog.theme("gaming").unwrap();
    let outline = idea["outline"].as_array().unwrap();
    assert_eq!(outline.len(), 4);
    for (i, step) in outline.iter().enumerate() {
        assert_eq!(step["step"], i + 1);
        assert_eq!(step["description"], gaming.beats[i]);
        let label = step["estimated_time"].as_str().unwrap();
        assert!(label.ends_with("s of the 35-50 seconds runtime"), "{label}");
    }

    let hook = idea["hook"].as_str().unwrap();
    assert!(gaming.hooks.contains(&hook));
    let summary = idea["summary"].as_str().unwrap().replace('\n', " ");
    assert!(summary.contains("TikTok"));
    assert!(summary.contains(hook));

    assert_eq!(strings(&idea["visuals"]), gaming.visuals);
    assert_eq!(strings(&idea["audio"]), gaming.audio);
}

// ---------------------------------------------------------------------------
// Test: response has every documented field
// ---------------------------------------------------------------------------

#[tokio::test]
async fn idea_has_all_fields() {
    let idea = body_json(post_json(build_test_app(), "/api/ideas", json!({})).await).await;

    for field in [
        "title",
        "hook",
        "platform",
        "tone",
        "pacing",
        "summary",
        "outline",
        "visuals",
        "audio",
        "call_to_action",
        "generated_at",
    ] {
        assert!(!idea[field].is_null(), "missing field {field}");
    }

    let generated_at = idea["generated_at"].as_str().unwrap();
    assert!(generated_at.ends_with('Z'), "{generated_at}");
    assert!(generated_at.contains('T'), "{generated_at}");

    let cta = idea["call_to_action"].as_str().unwrap();
    assert!(Catalog::builtin().calls_to_action().contains(&cta));
}

// ---------------------------------------------------------------------------
// Test: empty, absent, and malformed bodies fall back to the defaults
// ---------------------------------------------------------------------------

fn assert_default_idea(idea: &Value) {
    assert_eq!(idea["platform"]["name"], "YouTube");
    assert_eq!(idea["platform"]["duration"], "6-8 minutes");
    assert_eq!(
        idea["tone"],
        "Keep explanations crystal clear and friendly for first-time viewers."
    );
    assert_eq!(idea["pacing"], "Balanced");

    let education = Catalog::builtin();
    let education = education.theme("education").unwrap();
    assert_eq!(idea["outline"][0]["description"], education.beats[0]);
    assert!(education.hooks.contains(&idea["hook"].as_str().unwrap()));
}

#[tokio::test]
async fn empty_body_uses_defaults() {
    let response = post_raw(build_test_app(), "/api/ideas", "").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_default_idea(&body_json(response).await);
}

#[tokio::test]
async fn malformed_body_uses_defaults() {
    for body in ["{not json", "[]", "null", "42"] {
        let response = post_raw(build_test_app(), "/api/ideas", body).await;
        assert_eq!(response.status(), StatusCode::OK, "body {body:?}");
        assert_default_idea(&body_json(response).await);
    }
}

#[tokio::test]
async fn explicit_defaults_match_empty_body() {
    let explicit = body_json(
        post_json(
            build_test_app(),
            "/api/ideas",
            json!({ "theme": "education", "platform": "youtube", "tone": "beginner", "pacing": "steady" }),
        )
        .await,
    )
    .await;
    let empty = body_json(post_json(build_test_app(), "/api/ideas", json!({})).await).await;

    for field in ["outline", "visuals", "audio", "platform", "pacing", "tone"] {
        assert_eq!(explicit[field], empty[field], "{field} differs");
    }
}

// ---------------------------------------------------------------------------
// Test: partial selection keeps the supplied fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn partial_selection_merges_defaults() {
    let idea = body_json(
        post_json(
            build_test_app(),
            "/api/ideas",
            json!({ "platform": "reels", "pacing": "calm" }),
        )
        .await,
    )
    .await;

    assert_eq!(idea["platform"]["name"], "Instagram Reels");
    assert_eq!(idea["pacing"], "Calming");
    assert_eq!(
        idea["tone"],
        "Keep explanations crystal clear and friendly for first-time viewers."
    );
}

// ---------------------------------------------------------------------------
// Test: unknown values are rejected with 400 naming the value
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_option_returns_400_for_each_field() {
    let cases = [
        ("theme", "sports"),
        ("platform", "myspace"),
        ("tone", "casual"),
        ("pacing", "glacial"),
    ];

    for (field, value) in cases {
        let mut body = serde_json::Map::new();
        body.insert(field.to_string(), json!(value));
        let response = post_json(build_test_app(), "/api/ideas", body.into()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{field}={value}");

        let json = body_json(response).await;
        assert_eq!(json["error"], format!("Unknown option: {value}"));
        assert_eq!(json["code"], "UNKNOWN_OPTION");
    }
}

#[tokio::test]
async fn non_string_option_returns_400() {
    let response = post_json(build_test_app(), "/api/ideas", json!({ "tone": 3 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Unknown option: 3");
}

// ---------------------------------------------------------------------------
// Test: identifiers are case-sensitive
// ---------------------------------------------------------------------------

#[tokio::test]
async fn identifiers_are_case_sensitive() {
    let response = post_json(build_test_app(), "/api/ideas", json!({ "theme": "Gaming" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: POST /api/ideas/surprise returns a resolvable selection and its idea
// ---------------------------------------------------------------------------

#[tokio::test]
async fn surprise_returns_selection_and_idea() {
    let response = post_raw(build_test_app(), "/api/ideas/surprise", "").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let catalog = Catalog::builtin();

    let selection = &json["selection"];
    let platform = catalog
        .platform(selection["platform"].as_str().unwrap())
        .expect("surprise platform should be in the catalog");
    let pacing = catalog
        .pacing(selection["pacing"].as_str().unwrap())
        .expect("surprise pacing should be in the catalog");
    let tone = catalog
        .tone(selection["tone"].as_str().unwrap())
        .expect("surprise tone should be in the catalog");
    let theme = catalog
        .theme(selection["theme"].as_str().unwrap())
        .expect("surprise theme should be in the catalog");

    let idea = &json["idea"];
    assert_eq!(idea["platform"]["name"], platform.name);
    assert_eq!(idea["pacing"], pacing.label);
    assert_eq!(idea["tone"], tone.hint);
    assert_eq!(strings(&idea["visuals"]), theme.visuals);
}
