mod routes;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use resource_cors::{CorsLayer, PolicyTable};
use tracing_subscriber::EnvFilter;

const CORS_CONFIG: &str = r#"{
    "/greet": {
        "origins": ["http://localhost:3000"],
        "methods": ["GET", "POST"],
        "headers": ["content-type", "x-requested-with"],
        "credentials": true
    },
    "/public": {
        "origins": ["*"],
        "methods": ["GET"]
    }
}"#;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let table = PolicyTable::from_json_str(CORS_CONFIG).expect("valid CORS configuration");

    let app = Router::new()
        .route("/greet", get(routes::greet).options(routes::preflight))
        .route("/public", get(routes::public).options(routes::preflight))
        .layer(CorsLayer::from_table(table));

    let addr: SocketAddr = "127.0.0.1:5001".parse().unwrap();
    println!("Axum example running on http://{addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
