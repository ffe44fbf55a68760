use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use jsonwebtoken::{encode, EncodingKey, Header};
use tempfile::tempdir;
use tower::ServiceExt;

use waitumusic_server::api::app_router;
use waitumusic_server::auth::Claims;
use waitumusic_server::config::Config;
use waitumusic_server::build_state;

const SECRET: &str = "integration-test-secret";

async fn build_test_router(db_dir: &tempfile::TempDir) -> axum::Router {
    std::env::set_var("WTM_DB_PATH", db_dir.path().join("test.db"));
    std::env::set_var("WTM_SECRET_KEY", SECRET);

    let config = Config::from_env();
    let state = build_state(&config).await.unwrap();
    app_router(state)
}

fn token(user_id: i64, role: &str) -> String {
    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        exp: 4102444800, // 2100-01-01
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    bearer: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn objectives_end_to_end() {
    let tmp = tempdir().unwrap();
    let app = build_test_router(&tmp).await;

    let admin = token(10, "admin");
    let superadmin = token(11, "superadmin");
    let fan = token(12, "fan");

    // Liveness endpoint needs no auth.
    let (status, health) = send(&app, Method::GET, "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");

    // Objectives routes do.
    let (status, _) = send(
        &app,
        Method::GET,
        "/api/internal-objectives/booking/1",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // First read of a booking materializes the standard five-objective plan.
    let (status, listed) = send(
        &app,
        Method::GET,
        "/api/internal-objectives/booking/1",
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["success"], true);
    let objectives = listed["objectives"].as_array().unwrap();
    assert_eq!(objectives.len(), 5);
    assert!(objectives.iter().all(|o| o["confidential"] == true));
    assert!(objectives.iter().all(|o| o["bookingId"] == 1));
    assert!(objectives.iter().all(|o| o["createdBy"] == 10));

    // The plan is stored, not fabricated: a second read returns the same rows.
    let (_, listed_again) = send(
        &app,
        Method::GET,
        "/api/internal-objectives/booking/1",
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(listed_again["objectives"], listed["objectives"]);

    // Report over the seeded plan.
    let (status, reported) = send(
        &app,
        Method::GET,
        "/api/internal-objectives/booking/1/report",
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let report = &reported["report"];
    assert_eq!(report["totalObjectives"], 5);
    assert_eq!(report["pendingObjectives"], 5);
    assert_eq!(report["completedObjectives"], 0);
    assert_eq!(report["completionRate"], 0.0);
    // photography 500 + social_media 300 + videography 1000 + revenue 1000
    // + strategic 200
    assert_eq!(report["estimatedRoi"], 3000);
    assert_eq!(report["professionalInvolvement"]["photographers"], 1);
    assert_eq!(reported["bookingId"], 1);

    // Creation forces confidentiality and the caller's identity.
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/internal-objectives/create",
        Some(&superadmin),
        Some(serde_json::json!({
            "bookingId": 2,
            "objectiveType": "marketing",
            "title": "Press outreach",
            "description": "Pitch the show to local press",
            "priority": "high",
            "confidential": false,
            "createdBy": 999,
            "tags": ["press"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["success"], true);
    let objective = &created["objective"];
    assert_eq!(objective["confidential"], true);
    assert_eq!(objective["createdBy"], 11);
    assert_eq!(objective["status"], "planning");
    let objective_id = objective["id"].as_i64().unwrap();

    // Status update mutates the stored row.
    let (status, updated) = send(
        &app,
        Method::PATCH,
        &format!("/api/internal-objectives/{objective_id}/status"),
        Some(&superadmin),
        Some(serde_json::json!({"status": "completed"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["objective"]["status"], "completed");

    let (_, reported) = send(
        &app,
        Method::GET,
        "/api/internal-objectives/booking/2/report",
        Some(&admin),
        None,
    )
    .await;
    let report = &reported["report"];
    assert_eq!(report["totalObjectives"], 1);
    assert_eq!(report["completedObjectives"], 1);
    assert_eq!(report["completionRate"], 100.0);
    assert_eq!(report["estimatedRoi"], 750);

    // Bad status values are rejected before they reach the store.
    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/api/internal-objectives/{objective_id}/status"),
        Some(&superadmin),
        Some(serde_json::json!({"status": "done"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/api/internal-objectives/{objective_id}/status"),
        Some(&superadmin),
        Some(serde_json::json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/internal-objectives/424242/status",
        Some(&superadmin),
        Some(serde_json::json!({"status": "completed"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Auto-generation is a no-op for non-managed artists.
    let (status, generated) = send(
        &app,
        Method::POST,
        "/api/internal-objectives/auto-generate",
        Some(&admin),
        Some(serde_json::json!({
            "bookingId": 3,
            "artistUserId": 30,
            "bookingType": "concert",
            "artistManagedStatus": false
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(generated["success"], true);
    assert_eq!(generated["objectives"].as_array().unwrap().len(), 0);

    // Managed artists get exactly three stored objectives.
    let (status, generated) = send(
        &app,
        Method::POST,
        "/api/internal-objectives/auto-generate",
        Some(&admin),
        Some(serde_json::json!({
            "bookingId": 3,
            "artistUserId": 30,
            "bookingType": "concert",
            "artistManagedStatus": true
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let generated_objectives = generated["objectives"].as_array().unwrap();
    assert_eq!(generated_objectives.len(), 3);
    assert!(generated_objectives.iter().all(|o| o["bookingId"] == 3));
    assert!(generated_objectives.iter().all(|o| o["confidential"] == true));
    assert!(generated_objectives.iter().all(|o| o["createdBy"] == 10));

    // Templates are readable by any authenticated caller, fans included.
    let (status, templates) = send(
        &app,
        Method::GET,
        "/api/internal-objectives/templates",
        Some(&fan),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(templates["templates"].as_array().unwrap().len(), 3);

    for key in ["WTM_DB_PATH", "WTM_SECRET_KEY"] {
        std::env::remove_var(key);
    }
}
