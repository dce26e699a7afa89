use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use nicky_saturn_api::api::handlers::signup;
use nicky_saturn_api::config::SupabaseConfig;
use nicky_saturn_api::infrastructure::repositories::SupabaseMailingListRepository;
use nicky_saturn_api::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Load Supabase configuration; without it no request may reach the store
    let supabase_config = match SupabaseConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Supabase URL or key is missing: {}", e);
            std::process::exit(1);
        }
    };

    // Construct the store client once, shared by all requests
    let mailing_list = Arc::new(SupabaseMailingListRepository::new(&supabase_config));
    let app_state = AppState::new(mailing_list);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(signup::health_check))
        // Signup route
        .route("/api/signup", post(signup::signup))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(app_state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
