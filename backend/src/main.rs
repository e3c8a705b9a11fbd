//! Resume Backend - Main Entry Point
//!
//! Starts the web API server for uploading and parsing resumes.

use resume_backend::{api::run_server, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    println!("╔════════════════════════════════════════════════╗");
    println!("║   Resume Parser - candidate field extraction   ║");
    println!("║   Upload → Extract → Store                     ║");
    println!("╚════════════════════════════════════════════════╝");
    println!();

    let config = ServerConfig::from_env();
    run_server(config).await
}
