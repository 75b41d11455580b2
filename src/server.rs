use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use std::{net::SocketAddr, sync::Arc};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::{AlmanacQuery, ApiFortuneRequest, ApiTodayResponse};
use mahjong_fortune::almanac::{Almanac, AlmanacSummary};
use mahjong_fortune::config::FortuneConfig;
use mahjong_fortune::scoring::ScoreRules;
use mahjong_fortune::{generate_fortune_at, sanitize_result, FortuneResult};

#[derive(Clone)]
struct AppState {
    rules: Arc<ScoreRules>,
}

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    let (config, config_path) = FortuneConfig::load(args.config)?;
    if let Some(path) = config_path.as_ref().filter(|path| path.exists()) {
        tracing::info!(path = %path.display(), "loaded config");
    }

    let host = args.host.unwrap_or(config.server.host);
    let port = args.port.unwrap_or(config.server.port);
    let web_root = args.web_root.unwrap_or(config.server.web_root);

    let state = AppState {
        rules: Arc::new(config.scoring),
    };

    let index_path = web_root.join("index.html");
    let static_service = ServeDir::new(&web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/fortune", post(fortune_handler))
        .route("/api/almanac", get(almanac_handler))
        .route("/api/today", get(today_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    tracing::info!(%addr, web_root = %web_root.display(), "serving");
    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| {
        tracing::error!(error = %err, "server stopped");
        format!("server error: {}", err)
    })?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn fortune_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiFortuneRequest>,
) -> Result<Json<FortuneResult>, (StatusCode, String)> {
    let input = request
        .into_input()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    let result = generate_fortune_at(&input, Local::now().date_naive(), &state.rules);
    tracing::info!(date = %result.date_key, score = result.score, "fortune served");
    Ok(Json(sanitize_result(result)))
}

async fn almanac_handler(
    Query(query): Query<AlmanacQuery>,
) -> Result<Json<AlmanacSummary>, (StatusCode, String)> {
    let almanac = query
        .resolve(Local::now().date_naive())
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    Ok(Json(almanac.summary()))
}

async fn today_handler() -> Json<ApiTodayResponse> {
    let almanac = Almanac::nearest(Local::now().date_naive());
    Json(ApiTodayResponse::from_almanac(&almanac))
}
