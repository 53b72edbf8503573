//! Integration tests for HttpService against a real server.
//!
//! Each test spawns an in-process axum server on 127.0.0.1:0, then exercises
//! the HTTP client layer through the full request/response cycle.

use mvpcoach_core::{CoachRequest, ConversationTurn, Stage};
use mvpcoach_service::{CoachService, HttpService, ServiceError};

async fn spawn_server() -> String {
    let server = mvpcoach_server::test_helpers::spawn_test_server().await;
    server.base_url
}

fn coach_request(stage: &str, message: &str) -> CoachRequest {
    CoachRequest {
        message: message.into(),
        current_stage: stage.into(),
        conversation_history: Vec::new(),
    }
}

#[tokio::test]
async fn health_check_via_http() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);
    svc.health_check().await.unwrap();
}

#[tokio::test]
async fn root_serves_the_api_banner() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);
    let info = svc.api_info().await.unwrap();
    assert_eq!(info, "AI MVP Coach API - POST to /coach/ to start");
}

#[tokio::test]
async fn full_coaching_walk_via_http() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);

    let answers = [
        "hi, I want to validate an idea",
        "an AI meal planner for families",
        "that people will trust AI-generated meal plans",
        "no",
        "show mock plans to 20 parents and ask if they'd pay",
        "a Figma mockup and a landing page",
        "50 waitlist signups in a week",
    ];

    let mut stage = Some(Stage::Welcome);
    let mut history = Vec::new();
    let mut exchanges = 0;

    while let Some(current) = stage {
        let req = CoachRequest {
            message: answers[exchanges].into(),
            current_stage: current.as_str().into(),
            conversation_history: history,
        };
        let resp = svc.advance(&req).await.unwrap();
        assert_eq!(resp.next_stage, current.definition().next_stage);
        assert_eq!(resp.conversation_history.len(), exchanges + 1);
        assert_eq!(resp.conversation_history.last().unwrap().user, answers[exchanges]);

        history = resp.conversation_history;
        stage = resp.next_stage;
        exchanges += 1;
    }

    assert_eq!(exchanges, Stage::ALL.len());
    // the success-criteria answer was folded into the resolved action plan
    let plan = &history[history.len() - 2].coach;
    assert!(plan.contains("Measure: 50 waitlist signups in a week"));
}

#[tokio::test]
async fn success_criteria_answer_resolves_the_plan() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);

    let resp = svc
        .advance(&coach_request("success_criteria", "10 signups"))
        .await
        .unwrap();
    assert_eq!(resp.next_stage, Some(Stage::Conclusion));
    assert!(resp.message.contains("Measure: 10 signups"));
    assert!(!resp.message.contains("{success_criteria}"));
}

#[tokio::test]
async fn unknown_stage_is_a_bad_request() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);

    let err = svc
        .advance(&coach_request("brainstorm", "x"))
        .await
        .unwrap_err();
    match err {
        ServiceError::InvalidInput(msg) => assert!(msg.contains("invalid stage: brainstorm")),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn history_passes_through_unchanged() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);

    let history = vec![
        ConversationTurn {
            user: "hi".into(),
            coach: "what's your product about?".into(),
        },
        ConversationTurn {
            user: "a meal planner".into(),
            coach: "what's the riskiest assumption?".into(),
        },
    ];
    let req = CoachRequest {
        message: "that parents will pay".into(),
        current_stage: "assumption_validation".into(),
        conversation_history: history.clone(),
    };
    let resp = svc.advance(&req).await.unwrap();
    assert_eq!(resp.conversation_history.len(), 3);
    assert_eq!(&resp.conversation_history[..2], &history[..]);
}

// ---- Raw-body tests (wire shapes the typed client can't produce) ----

#[tokio::test]
async fn minimal_body_gets_welcome_defaults() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{url}/coach/"))
        .json(&serde_json::json!({ "message": "hi" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["next_stage"], "riskiest_assumption");
    let history = body["conversation_history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["user"], "hi");
}

#[tokio::test]
async fn conclusion_returns_null_next_stage_on_the_wire() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{url}/coach/"))
        .json(&serde_json::json!({ "message": "yes", "current_stage": "conclusion" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body.get("next_stage").unwrap().is_null());
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{url}/coach/"))
        .json(&serde_json::json!({ "message": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
}
