//! Quick Start - verify a key and classify one comment
//!
//! ## Setup
//! ```bash
//! export AKISMET_KEY="your-key"
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=akismet=debug cargo run --example quick_start
//! ```

use akismet::prelude::*;
use tracing_subscriber::EnvFilter;

const BLOG: &str = "https://example.com";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // The key is read from AKISMET_KEY when not set here.
    let client = AkismetClient::builder().http_debug(true).build()?;

    match client.verify_key(BLOG).await {
        Ok(()) => println!("🔑 Key is valid for {BLOG}"),
        Err(AkismetError::InvalidKey { message, debug_help }) => {
            println!("❌ Key rejected: {message}");
            if let Some(help) = debug_help {
                println!("   {help}");
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let comment = Comment::new(BLOG, "192.0.2.1")
        .with_comment_type(CommentType::Comment)
        .with_comment_author("viagra-test-123")
        .with_comment_author_email("akismet-guaranteed-spam@example.com")
        .with_comment_content("Buy now!")
        .with_is_test(true);

    let result = client.check_comment(&comment).await?;
    if result.discard {
        println!("🗑️ Blatant spam, safe to drop");
    } else if result.spam {
        println!("🚫 Spam");
    } else {
        println!("✅ Ham");
    }

    Ok(())
}
