use axum::{Extension, Json, extract::State};
use carta_core::{ApiResponse, OperatorSession};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

impl From<OperatorSession> for SessionResponse {
    fn from(session: OperatorSession) -> Self {
        Self {
            token: session.token,
            email: session.email,
            expires_at: session.expires_at,
        }
    }
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<SessionResponse>>> {
    let session = state
        .gate
        .sign_in(&request.email, &request.password)
        .await
        .map_err(|_| AppError::unauthorized("invalid credentials"))?;

    Ok(Json(ApiResponse::success(session.into())))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<OperatorSession>,
) -> Json<ApiResponse<()>> {
    state.gate.sign_out(&session.token).await;
    Json(ApiResponse::success(()).with_message("signed out".to_string()))
}

#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

/// Lets the operator UI settle its unchecked state on load.
pub async fn session_status(
    Extension(session): Extension<OperatorSession>,
) -> Json<ApiResponse<SessionStatus>> {
    Json(ApiResponse::success(SessionStatus {
        email: session.email,
        expires_at: session.expires_at,
    }))
}
