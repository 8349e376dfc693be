use axum::{
    routing::{get, post},
    Router,
};
use dotenvy::dotenv;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

mod handlers {
    pub mod quiz_handlers;
}
mod utils {
    pub mod openai_utils;
}

use handlers::quiz_handlers;

async fn health_check() -> &'static str {
    "OK"
}

pub fn validate_env() {
    let _ = std::env::var("OPENROUTER_API_KEY")
        .expect("OPENROUTER_API_KEY must be set");
    let _ = std::env::var("ENVIRONMENT") // for dev its 'development' and for prod anything else
        .expect("ENVIRONMENT must be set");
    let _ = std::env::var("FRONTEND_URL") // frontend url
        .expect("FRONTEND_URL must be set");
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    validate_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    // Create router with CORS
    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/quiz/generate", post(quiz_handlers::generate_quiz))
        .route("/api/quiz/score", post(quiz_handlers::score_quiz))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // Be cautious with `Any` in production; restrict to your frontend origin
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE]),
        );

    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:3001").await.unwrap();
    axum::serve(listener, app.into_make_service()).await.unwrap();
}
