use crate::helpers::TestApp;
use expense_adapters::http::routes::{ErrorResponse, UserResponse};

#[tokio::test]
async fn register_conflict_login_and_rejected_login() {
    let app = TestApp::new().await;
    let registration = serde_json::json!({
        "name": "A",
        "email": "a@x.com",
        "password": "p1",
    });

    let response = app.post_register(&registration).await;
    assert_eq!(response.status().as_u16(), 200);
    let user = response.json::<UserResponse>().await.unwrap();
    assert_eq!(user.email, "a@x.com");
    assert!(!user.id.is_nil());

    let response = app.post_register(&registration).await;
    assert_eq!(response.status().as_u16(), 409);

    let response = app
        .post_login(&serde_json::json!({ "email": "a@x.com", "password": "p1" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let token = app.login_token(response).await;
    assert!(!token.is_empty());

    let response = app
        .post_login(&serde_json::json!({ "email": "a@x.com", "password": "wrong" }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response.json::<ErrorResponse>().await.unwrap().message,
        "Invalid user credentials."
    );
}
