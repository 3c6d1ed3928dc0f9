use expense_adapters::{
    config::{AllowedOrigins, test},
    http::routes::{TokenResponse, UserResponse},
    password::Argon2PasswordHasher,
    persistence::HashMapUserStore,
    token::{Claims, JwtAuthConfig, JwtTokenIssuer},
};
use expense_api::AuthService;
use expense_core::UserStore;
use fake::{Fake, faker::internet::en::SafeEmail, faker::name::en::Name};
use secrecy::Secret;
use serde::Serialize;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    token_issuer: JwtTokenIssuer,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_user_store(HashMapUserStore::new()).await
    }

    pub async fn with_user_store<U>(user_store: U) -> Self
    where
        U: UserStore + Clone + 'static,
    {
        Self::spawn(user_store, None).await
    }

    pub async fn with_allowed_origins(allowed_origins: AllowedOrigins) -> Self {
        Self::spawn(HashMapUserStore::new(), Some(allowed_origins)).await
    }

    async fn spawn<U>(user_store: U, allowed_origins: Option<AllowedOrigins>) -> Self
    where
        U: UserStore + Clone + 'static,
    {
        let token_issuer = JwtTokenIssuer::new(JwtAuthConfig {
            jwt_secret: Secret::from("test-secret".to_owned()),
            token_ttl_in_seconds: 600,
            issuer: "expense-tracker-test".to_owned(),
        });
        // Cheap argon2 parameters keep the suite fast
        let password_hasher = Argon2PasswordHasher::new(8, 1, 1);

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let service = AuthService::new(user_store, password_hasher, token_issuer.clone());
        tokio::spawn(service.run_standalone(listener, allowed_origins));

        Self {
            address,
            http_client: reqwest::Client::new(),
            token_issuer,
        }
    }

    pub async fn post_register<Body: Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/auth/register", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login<Body: Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/auth/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// CORS preflight for a POST to `path` sent from `origin`.
    pub async fn preflight(&self, path: &str, origin: &str) -> reqwest::Response {
        self.http_client
            .request(reqwest::Method::OPTIONS, format!("{}{}", &self.address, path))
            .header("origin", origin)
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> reqwest::Response {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Register a fresh random user and return it with its plaintext password.
    pub async fn register_random_user(&self) -> (UserResponse, String) {
        let password = "correct horse battery staple".to_owned();
        let response = self
            .post_register(&serde_json::json!({
                "name": get_random_name(),
                "email": get_random_email(),
                "password": password,
            }))
            .await;
        assert_eq!(response.status().as_u16(), 200);

        let user = response
            .json::<UserResponse>()
            .await
            .expect("Could not deserialize response body to UserResponse");
        (user, password)
    }

    pub async fn login_token(&self, response: reqwest::Response) -> String {
        response
            .json::<TokenResponse>()
            .await
            .expect("Could not deserialize response body to TokenResponse")
            .token
    }

    pub fn decode_token(&self, token: &str) -> Claims {
        self.token_issuer.decode(token).expect("Token should be valid")
    }
}

pub fn get_random_email() -> String {
    let email: String = SafeEmail().fake();
    // Faker emails repeat quickly, prefix keeps them unique
    format!("{}.{}", uuid::Uuid::new_v4().simple(), email)
}

pub fn get_random_name() -> String {
    Name().fake()
}
