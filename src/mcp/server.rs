//! Food Diary MCP Server Implementation
//!
//! Exposes the diary CSV tools over MCP.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::DiaryConfig;
use crate::models::DiaryEntryRecord;
use crate::tools::diary_csv::{self, CsvSource};
use crate::tools::status::StatusTracker;

/// Food Diary MCP Service
#[derive(Clone)]
pub struct DiaryService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Arc<DiaryConfig>,
    tool_router: ToolRouter<DiaryService>,
}

impl DiaryService {
    pub fn new(config: DiaryConfig) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config.clone()))),
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExportEntriesCsvParams {
    /// Diary entries, each with consumed_at, servings and a nutrition_item or recipe
    pub entries: Vec<DiaryEntryRecord>,
    /// Also write the CSV to this path (optional)
    pub output_path: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ImportEntriesCsvParams {
    /// CSV text including the header row (use this or file_path)
    pub csv_text: Option<String>,
    /// Full path to a CSV file (use this or csv_text)
    pub file_path: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DailyNutritionTotalsParams {
    /// Diary entries to total per day
    pub entries: Vec<DiaryEntryRecord>,
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl DiaryService {
    #[tool(description = "Get the current status of the food diary service including build info, configuration, and process information")]
    async fn diary_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for exporting, importing and totalling diary entries. Call this when unsure how to use the CSV tools.")]
    fn csv_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CSV_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CSV_INSTRUCTIONS)]))
    }

    #[tool(description = "Export diary entries to CSV. One row per nutrition item; recipes expand to one row per ingredient with servings multiplied. Optionally writes the CSV to output_path.")]
    fn export_entries_csv(&self, Parameters(p): Parameters<ExportEntriesCsvParams>) -> Result<CallToolResult, McpError> {
        let result = diary_csv::export_entries_csv(&self.config, &p.entries, p.output_path.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Import a diary CSV (inline text or file path) into new diary entries. Invalid rows are reported with row numbers and do not stop the import.")]
    fn import_entries_csv(&self, Parameters(p): Parameters<ImportEntriesCsvParams>) -> Result<CallToolResult, McpError> {
        let source = CsvSource::from_params(p.csv_text.as_deref(), p.file_path.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        let result = diary_csv::import_entries_csv(&self.config, source)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Total nutrition per day for a list of diary entries, scaled by servings")]
    fn daily_nutrition_totals(&self, Parameters(p): Parameters<DailyNutritionTotalsParams>) -> Result<CallToolResult, McpError> {
        let result = diary_csv::daily_nutrition_totals(&self.config, &p.entries);
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for DiaryService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "food-diary".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Food Diary".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Food Diary - CSV import/export of diary entries. \
                 Call csv_instructions before first use. \
                 Export: export_entries_csv. Import: import_entries_csv (csv_text or file_path). \
                 Trends: daily_nutrition_totals. Status: diary_status."
                    .into(),
            ),
        }
    }
}
