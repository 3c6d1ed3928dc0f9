use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    routing::post,
};
use expense_adapters::{
    config::AllowedOrigins,
    http::routes::{login, register},
};
use expense_core::{PasswordHasher, TokenIssuer, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// Authentication service exposing `/api/auth/register` and `/api/auth/login`
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService from its collaborators
    ///
    /// # Arguments
    /// * `user_store` - Store for user records (must be Clone)
    /// * `password_hasher` - Hasher used both at registration and login
    /// * `token_issuer` - Issuer of session tokens for logged-in users
    ///
    /// Each route is given only the state it needs.
    pub fn new<U, H, T>(user_store: U, password_hasher: H, token_issuer: T) -> Self
    where
        U: UserStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        T: TokenIssuer + Clone + 'static,
    {
        let auth_routes = Router::new()
            // Register needs user store and hasher
            .route("/register", post(register::<U, H>))
            .with_state((user_store.clone(), password_hasher.clone()))
            // Login additionally needs the token issuer
            .route("/login", post(login::<U, H, T>))
            .with_state((user_store, password_hasher, token_issuer));

        let router = Router::new().nest("/api/auth", auth_routes);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::POST])
                .allow_headers([header::CONTENT_TYPE])
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server until ctrl-c
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
