use expense_adapters::config::AllowedOrigins;

use crate::helpers::TestApp;

const ALLOWED_ORIGIN: &str = "https://app.example.com";
const ALLOW_ORIGIN_HEADER: &str = "access-control-allow-origin";

fn allowed_origins() -> AllowedOrigins {
    AllowedOrigins::try_from(vec![ALLOWED_ORIGIN.to_owned()]).unwrap()
}

#[tokio::test]
async fn should_echo_allowed_origin_on_preflight_and_post() {
    let app = TestApp::with_allowed_origins(allowed_origins()).await;

    let preflight = app.preflight("/api/auth/login", ALLOWED_ORIGIN).await;

    assert_eq!(preflight.status().as_u16(), 200);
    assert_eq!(
        preflight.headers().get(ALLOW_ORIGIN_HEADER).unwrap(),
        ALLOWED_ORIGIN
    );

    let response = app
        .http_client
        .post(format!("{}/api/auth/register", &app.address))
        .header("origin", ALLOWED_ORIGIN)
        .json(&serde_json::json!({
            "name": "A",
            "email": crate::helpers::get_random_email(),
            "password": "p1",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers().get(ALLOW_ORIGIN_HEADER).unwrap(),
        ALLOWED_ORIGIN
    );
}

#[tokio::test]
async fn should_not_allow_foreign_origin() {
    let app = TestApp::with_allowed_origins(allowed_origins()).await;

    let preflight = app
        .preflight("/api/auth/login", "https://evil.example.com")
        .await;

    assert!(preflight.headers().get(ALLOW_ORIGIN_HEADER).is_none());
}

#[tokio::test]
async fn should_not_add_cors_headers_when_no_origins_configured() {
    let app = TestApp::with_allowed_origins(AllowedOrigins::default()).await;

    let preflight = app.preflight("/api/auth/login", ALLOWED_ORIGIN).await;

    assert!(
        preflight
            .headers()
            .keys()
            .all(|name| !name.as_str().starts_with("access-control-"))
    );
}
