use axum::{
    extract::{Query, State},
    response::Json,
};
use marquee_core::{MediaKind, Reply};
use serde::Deserialize;
use tracing::info;

use crate::{AppState, errors::AppResult};

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    #[serde(default)]
    pub title: String,
}

pub async fn movie_handler(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> AppResult<Json<Reply>> {
    run_command(&state, MediaKind::Movie, &query.title).await
}

pub async fn show_handler(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> AppResult<Json<Reply>> {
    run_command(&state, MediaKind::Show, &query.title).await
}

async fn run_command(
    state: &AppState,
    kind: MediaKind,
    title: &str,
) -> AppResult<Json<Reply>> {
    let reply = state.commands.execute(kind, title).await?;
    info!(command = %kind, title = %reply.title, "reply rendered");
    Ok(Json(reply))
}
