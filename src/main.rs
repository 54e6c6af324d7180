//! CineDesk
//!
//! Desktop admin console for a movie catalog.
//!
//! This is the main entry point for the Dioxus Desktop application.

use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env before anything reads the environment (CINEDESK_API_URL)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .pretty()
        .init();

    // Print startup banner
    println!();
    println!("╔═══════════════════════════════════════════════╗");
    println!("║                                               ║");
    println!("║   🎬 CineDesk                                 ║");
    println!("║   Movie Catalog Admin Console                 ║");
    println!("║                                               ║");
    println!("╚═══════════════════════════════════════════════╝");
    println!();

    // Launch the Dioxus desktop application
    cinedesk_ui::launch();
}
