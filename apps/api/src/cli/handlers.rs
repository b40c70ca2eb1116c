use axum::{extract::State, Json};
use serde::Deserialize;

use crate::cli::{respond, CliReply};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CliRequest {
    pub command: String,
}

/// POST /api/v1/cli
/// Evaluates one CLI-mode input line. Blank input gets a silent empty reply,
/// matching the site's behavior of ignoring an empty prompt.
pub async fn handle_cli_command(
    State(state): State<AppState>,
    Json(req): Json<CliRequest>,
) -> Json<CliReply> {
    if req.command.trim().is_empty() {
        return Json(CliReply {
            lines: vec![],
            effect: None,
        });
    }
    Json(respond(&req.command, &state.content))
}
