//! Stdio tool server.
//!
//! Line-delimited JSON for non-HTTP callers: each request line is
//! `{"tool": "<name>"}` and each response line is
//! `{"ok": true, "result": ...}` or `{"ok": false, "error": "..."}`.
//! Logging goes to stderr; stdout carries only the protocol.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::app::App;
use crate::use_cases::collections;

#[derive(Debug, Deserialize)]
struct ToolRequest {
    tool: String,
}

/// Run the tool loop until stdin closes.
pub async fn run(app: Arc<App>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = dispatch(&app, &line).await;
        let mut out = response.to_string();
        out.push('\n');
        stdout.write_all(out.as_bytes()).await?;
        stdout.flush().await?;
    }

    Ok(())
}

async fn dispatch(app: &App, line: &str) -> Value {
    let request: ToolRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => return error_response(format!("malformed request: {e}")),
    };

    match request.tool.as_str() {
        "getEdges" => match app.use_cases.catalog.list(collections::EDGES).await {
            Ok(edges) => json!({ "ok": true, "result": edges }),
            Err(e) => {
                tracing::error!(error = %e, "getEdges failed");
                error_response(e.to_string())
            }
        },
        other => error_response(format!("unknown tool: {other}")),
    }
}

fn error_response(error: String) -> Value {
    json!({ "ok": false, "error": error })
}
