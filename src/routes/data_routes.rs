use axum::{
    routing::{delete, get, post},
    Router,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
    extract::{
        Path,
        State,
        ws::WebSocketUpgrade,
    },
};

use std::sync::Arc;

use tracing::{info, debug, error};
use serde::{Serialize, Deserialize};

use crate::state::app_state::{unique_name, AppState, LoadedFile, SignalInfo};
use ea3_reader::{handle_ws_fetch, to_csv, Ea3Error, Ea3Reader};

#[derive(Serialize)]
pub struct ReaderSummary {
    pub id: String,
    pub name: String,
    pub signals_count: usize,
    pub headers: Vec<String>,
}

/// Response for GET /readers/{id}/headers
#[derive(Serialize)]
pub struct ReaderHeaders {
    pub id: String,
    pub headers: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct FileReadRequest {
    pub mode: String, // "online" | "offline"
    pub path: String,
}

#[derive(Serialize, Debug)]
pub struct FileReadResponse {
    pub id: String,
    pub name: String,
    pub path: String,
    pub source: String,
    pub headers: Option<Vec<String>>,
    pub desc: Option<String>,
    pub tags: Option<Vec<String>>,
    pub created_at: Option<String>,
    pub source_url: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// =======================
/// ROUTER
/// =======================

pub fn data_routes(state: AppState) -> Router {
    Router::new()
        .route("/read-file", post(read_file))
        .route("/fetch/{signal}", get(ws_fetch))
        .route("/readers", get(list_readers))
        .route("/readers/{id}", delete(unload_reader))
        .route("/readers/{id}/headers", get(reader_headers))
        .route("/readers/{id}/metadata", get(reader_metadata))
        .route("/readers/{id}/csv", get(reader_csv))
        .with_state(state)
}

fn decode_error_response(err: &Ea3Error) -> Response {
    let status = match err {
        Ea3Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound => StatusCode::NOT_FOUND,
        Ea3Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    };

    (status, Json(ErrorBody { error: err.to_string() })).into_response()
}

/// Title and comment joined for display; `None` when both are empty.
fn describe(reader: &Ea3Reader) -> Option<String> {
    let meta = reader.metadata();
    match (meta.title.is_empty(), meta.comment.is_empty()) {
        (true, true) => None,
        (false, true) => Some(meta.title.clone()),
        (true, false) => Some(meta.comment.clone()),
        (false, false) => Some(format!("{} - {}", meta.title, meta.comment)),
    }
}

/// =======================
/// HANDLERS
/// =======================

async fn read_file(
    State(state): State<AppState>,
    Json(request): Json<FileReadRequest>,
) -> Response {
    debug!("Reading file: mode={}, path={}", request.mode, request.path);

    let path = request.path.clone();
    let opened = tokio::task::spawn_blocking(move || Ea3Reader::open(path)).await;

    let reader = match opened {
        Ok(Ok(r)) => Arc::new(r),
        Ok(Err(e)) => {
            error!("Failed to open file {}: {}", request.path, e);
            return decode_error_response(&e);
        }
        Err(e) => {
            error!("Decode task failed for {}: {}", request.path, e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let file_id = uuid::Uuid::new_v4().to_string();
    let file_name = reader
        .path()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string());

    let mut exposed_headers = Vec::new();
    {
        let mut signals = state.signals.write().await;

        for (_id, name) in reader.list_signals() {
            let final_name = unique_name(&*signals, name);
            info!("Register signal: {} (original: {})", final_name, name);

            signals.insert(
                final_name.clone(),
                SignalInfo {
                    reader: reader.clone(),
                    file_id: file_id.clone(),
                    original_name: name.to_string(),
                },
            );

            exposed_headers.push(final_name);
        }
    }

    state.files.write().await.insert(
        file_id.clone(),
        LoadedFile {
            reader: reader.clone(),
            name: file_name.clone(),
            headers: exposed_headers.clone(),
        },
    );

    Json(FileReadResponse {
        id: file_id,
        name: file_name,
        path: request.path.clone(),
        source: request.path,
        headers: Some(exposed_headers),
        desc: describe(&reader),
        tags: Some(vec!["ea3".to_string()]),
        created_at: Some(chrono::Utc::now().to_rfc3339()),
        source_url: None,
    })
    .into_response()
}

async fn ws_fetch(
    State(state): State<AppState>,
    Path(signal_name): Path<String>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    let signal_info = {
        let signals = state.signals.read().await;
        signals.get(&signal_name).cloned()
    };

    let signal_info = match signal_info {
        Some(info) => info,
        None => {
            error!("Signal not found: {}", signal_name);
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    debug!("ws_fetch {} from file {}", signal_name, signal_info.file_id);

    ws.on_upgrade(move |socket| {
        handle_ws_fetch(socket, signal_info.reader, signal_info.original_name)
    })
}

async fn list_readers(
    State(state): State<AppState>,
) -> impl IntoResponse {
    let files = state.files.read().await;

    let mut out: Vec<ReaderSummary> = files
        .iter()
        .map(|(id, file)| ReaderSummary {
            id: id.clone(),
            name: file.name.clone(),
            signals_count: file.headers.len(),
            headers: file.headers.clone(),
        })
        .collect();
    out.sort_by(|a, b| a.name.cmp(&b.name));

    Json(out)
}

async fn find_file(state: &AppState, file_id: &str) -> Option<LoadedFile> {
    state.files.read().await.get(file_id).cloned()
}

/// Drop a file and every signal registered from it.
async fn unload_reader(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
) -> StatusCode {
    let Some(file) = state.files.write().await.remove(&file_id) else {
        return StatusCode::NOT_FOUND;
    };

    let mut signals = state.signals.write().await;
    for name in &file.headers {
        signals.remove(name);
    }

    info!("Unloaded {} ({} signals)", file.name, file.headers.len());
    StatusCode::NO_CONTENT
}

async fn reader_headers(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
) -> impl IntoResponse {
    let Some(file) = find_file(&state, &file_id).await else {
        return StatusCode::NOT_FOUND.into_response();
    };

    Json(ReaderHeaders {
        id: file_id,
        headers: file.headers,
    }).into_response()
}

async fn reader_metadata(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
) -> impl IntoResponse {
    let Some(file) = find_file(&state, &file_id).await else {
        return StatusCode::NOT_FOUND.into_response();
    };

    Json(file.reader.metadata().clone()).into_response()
}

async fn reader_csv(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
) -> impl IntoResponse {
    let Some(file) = find_file(&state, &file_id).await else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let body = to_csv(file.reader.series(), file.reader.metadata().valid_point_count);
    ([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], body).into_response()
}
