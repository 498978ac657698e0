mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use prepnexus::upstream::HttpQuestionSink;
use serde_json::json;

use common::{
    app, app_with_sink, get, post_json, send, spawn_question_service, RecordingSink,
};

#[tokio::test]
async fn health_reports_loaded_banks() {
    let app = app().await;
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["banks"]["dsa_questions"], 12);
    assert_eq!(body["banks"]["aptitude_tests"], 1);
    assert_eq!(body["question_sink"], "recording");
}

#[tokio::test]
async fn csv_parse_pads_short_rows() {
    let app = app().await;
    let (status, body) = send(
        &app,
        post_json(
            "/api/v1/csv/parse",
            json!({ "raw_text": "role, order ,question\nBackend,1\n\nBackend,2,Why Rust?,extra" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["headers"], json!(["role", "order", "question"]));
    assert_eq!(body["total"], 2);
    assert_eq!(body["records"][0]["question"], "");
    assert_eq!(body["records"][1]["question"], "Why Rust?");
}

#[tokio::test]
async fn csv_parse_rejects_multi_char_delimiter() {
    let app = app().await;
    let (status, body) = send(
        &app,
        post_json(
            "/api/v1/csv/parse",
            json!({ "raw_text": "a;b", "delimiter": ";;" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn options_preview_extracts_inline_options() {
    let app = app().await;
    let (status, body) = send(
        &app,
        post_json(
            "/api/v1/aptitude/options/preview",
            json!({ "options_text": "(a) 10 (B) 20 (c) 30\n(D) 40 (correct)" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correct_source"], "marked");
    assert_eq!(body["options"][3]["id"], "d");
    assert_eq!(body["options"][3]["text"], "40");
    assert_eq!(body["options"][3]["is_correct"], true);
    assert_eq!(body["options"][0]["is_correct"], false);
    assert!(body["problem"].is_null());
}

#[tokio::test]
async fn submit_question_forwards_draft_to_sink() {
    let sink = Arc::new(RecordingSink::default());
    let app = app_with_sink(sink.clone()).await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/v1/aptitude/questions",
            json!({
                "question_text": "What is 15% of 200?",
                "options_text": "(A) 15\n(B) 20\n(C) 30 [correct]\n(D) 35",
                "category": "Numerical",
                "difficulty": "Easy",
                "time_limit": 60,
                "points": 2
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["receipt"]["upstream_id"], "q1");
    assert_eq!(body["draft"]["options"][2]["is_correct"], true);

    let drafts = sink.drafts.lock().unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].difficulty, "Easy");
    assert_eq!(drafts[0].correct_option().unwrap().text, "30");
}

#[tokio::test]
async fn submit_question_reports_validation_code() {
    let sink = Arc::new(RecordingSink::default());
    let app = app_with_sink(sink.clone()).await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/v1/aptitude/questions",
            json!({
                "question_text": "Pick one",
                "options_text": "(A) 1\n(B) 2\n(C) 3"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "WRONG_OPTION_COUNT");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("found 3"));
    assert!(sink.drafts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn submit_question_rejected_upstream_is_bad_gateway() {
    let url = spawn_question_service(
        StatusCode::BAD_REQUEST,
        json!({ "detail": "Duplicate question" }),
    )
    .await;
    let app = app_with_sink(Arc::new(HttpQuestionSink::new(&url).unwrap())).await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/v1/aptitude/questions",
            json!({
                "question_text": "What is 15% of 200?",
                "options_text": "(A) 15\n(B) 20\n(C) 30 [correct]\n(D) 35"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn submit_question_requires_question_text() {
    let app = app().await;
    let (status, body) = send(
        &app,
        post_json(
            "/api/v1/aptitude/questions",
            json!({ "options_text": "(A) 1\n(B) 2\n(C) 3\n(D) 4" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "EMPTY_QUESTION_TEXT");
}

#[tokio::test]
async fn aptitude_test_hides_answers_and_scores() {
    let app = app().await;

    let (status, body) = send(&app, get("/api/v1/aptitude/tests/test1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 2);
    assert!(body["questions"][0].get("correct_answer").is_none());

    let (status, body) = send(
        &app,
        post_json(
            "/api/v1/aptitude/tests/test1/submit",
            json!({ "answers": { "q1": "b", "q2": "a" } }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correct_answers"], 1);
    assert_eq!(body["score"], 50.0);
    assert_eq!(body["passed"], false);
}

#[tokio::test]
async fn unknown_aptitude_test_is_not_found() {
    let app = app().await;
    let (status, body) = send(&app, get("/api/v1/aptitude/tests/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn dsa_questions_filter_and_paginate() {
    let app = app().await;

    let (status, body) = send(
        &app,
        get("/api/v1/dsa/questions?difficulty=medium&per_page=2&page=2"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 6);
    assert_eq!(body["total_pages"], 3);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["items"][0]["title"], "Binary Tree Level Order Traversal");

    let (_, body) = send(&app, get("/api/v1/dsa/questions?search=linked&category=linked%20list")).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["title"], "Reverse Linked List");
}

#[tokio::test]
async fn dsa_categories_in_file_order() {
    let app = app().await;
    let (_, body) = send(&app, get("/api/v1/dsa/categories")).await;
    assert_eq!(body[0], "Arrays");
    assert_eq!(body.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn interview_questions_for_role_in_order() {
    let app = app().await;
    let (status, body) = send(
        &app,
        get("/api/v1/interview/questions?role=data%20analyst"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let orders: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["order"].as_u64().unwrap())
        .collect();
    assert_eq!(orders, vec![1, 2, 3]);

    let (_, roles) = send(&app, get("/api/v1/interview/roles")).await;
    assert_eq!(roles.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn interview_questions_without_role_is_json_error() {
    let app = app().await;

    for uri in ["/api/v1/interview/questions", "/api/v1/interview/questions?role=%20"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "role is required");
    }
}

#[tokio::test]
async fn dsa_questions_huge_page_is_empty() {
    let app = app().await;
    let (status, body) = send(
        &app,
        get("/api/v1/dsa/questions?page=18446744073709551615&per_page=2"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!([]));
    assert_eq!(body["total"], 12);
}
