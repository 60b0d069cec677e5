//! HTTP Handlers for the Bookmarks API

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use super::{Bookmarks, validate};
use crate::handler::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorMessage,
}

#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

fn error_body(msg: &str) -> Json<ErrorBody> {
    Json(ErrorBody {
        error: ErrorMessage {
            message: msg.to_string(),
        },
    })
}

fn not_found(msg: &str) -> Response {
    (StatusCode::NOT_FOUND, error_body(msg)).into_response()
}

fn bad_request(msg: &str) -> Response {
    (StatusCode::BAD_REQUEST, error_body(msg)).into_response()
}

fn internal_error(msg: &str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, error_body(msg)).into_response()
}

// ============================================================================
// Bookmark Handlers
// ============================================================================

pub async fn list_bookmarks(State(state): State<AppState>) -> Response {
    let store = Bookmarks::new(state.db.connection());

    match store.list().await {
        Ok(bookmarks) => (StatusCode::OK, Json(bookmarks)).into_response(),
        Err(e) => {
            tracing::error!("Failed to list bookmarks: {}", e);
            internal_error("Failed to list bookmarks")
        }
    }
}

pub async fn get_bookmark(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    let store = Bookmarks::new(state.db.connection());

    match store.get(id).await {
        Ok(Some(bookmark)) => (StatusCode::OK, Json(bookmark)).into_response(),
        Ok(None) => not_found("Bookmark doesn't exist"),
        Err(e) => {
            tracing::error!("Failed to get bookmark {}: {}", id, e);
            internal_error("Failed to get bookmark")
        }
    }
}

pub async fn create_bookmark(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Response {
    let input = match validate(&payload) {
        Ok(input) => input,
        Err(e) => return bad_request(&e.to_string()),
    };

    let store = Bookmarks::new(state.db.connection());

    match store.create(input).await {
        Ok(bookmark) => {
            let location = format!("/bookmarks/{}", bookmark.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(bookmark),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create bookmark: {}", e);
            internal_error("Failed to create bookmark")
        }
    }
}

pub async fn delete_bookmark(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    let store = Bookmarks::new(state.db.connection());

    match store.delete(id).await {
        Ok(true) => (StatusCode::NO_CONTENT, ()).into_response(),
        Ok(false) => not_found("Bookmark doesn't exist"),
        Err(e) => {
            tracing::error!("Failed to delete bookmark {}: {}", id, e);
            internal_error("Failed to delete bookmark")
        }
    }
}
