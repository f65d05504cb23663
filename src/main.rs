//! Food Diary
//!
//! An MCP server for food diary CSV import and export.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use food_diary::build_info;
use food_diary::config::DiaryConfig;
use food_diary::mcp::DiaryService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays reserved for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("food_diary=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let config = DiaryConfig::from_env()?;
    eprintln!("Default offset: {}", config.default_offset);

    let service = DiaryService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
