//! Actix API Key Demo Application
//!
//! Serves a small API behind the API key gate.
//!
//! ```bash
//! # Rejected with 401
//! curl -i http://127.0.0.1:8080/api/me
//!
//! # Admitted
//! curl -H "X-API-KEY: sk_live_abc123" http://127.0.0.1:8080/api/me
//!
//! # Excluded from the gate
//! curl http://127.0.0.1:8080/health
//! ```


use std::env;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use log::info;

use actix_api_key_core::http::security::ApiKeyGate;

use crate::accounts::{find_account, Account};

/// Context key the demo stores the resolved account under.
pub const CONTEXT_KEY: &str = "account.api.key";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Builds the API key gate for the demo routes.
fn api_key_gate() -> Result<ApiKeyGate<Account>, std::io::Error> {
    ApiKeyGate::builder()
        .context_key(CONTEXT_KEY)
        .exclude("^/health$")
        .exclude("^/public/")
        .lookup(find_account)
        .build()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let gate = api_key_gate()?;

    info!("=== Actix API Key Demo ===");
    info!("Server: http://{}", bind_addr);
    info!("Keys: sk_live_abc123, sk_live_admin_key (header {})", gate.header_name().as_str());
    info!("Routes: GET /api/me, GET /api/data (gated); GET /health, GET /public/info (open)");

    HttpServer::new(move || {
        App::new()
            .wrap(gate.clone())
            .wrap(Logger::default())
            .service(handlers::public::health)
            .service(handlers::public::info)
            .service(handlers::api::me)
            .service(handlers::api::data)
    })
    .bind(bind_addr)?
    .run()
    .await
}
