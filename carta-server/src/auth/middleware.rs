use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::infra::{app_state::AppState, errors::AppError};

/// Gate for every mutating route. Resolves the bearer token to an operator
/// session and injects it as an extension; anything else is a 401 before
/// the handler (and thus the store) is ever reached.
pub async fn operator_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request);
    let session = state
        .gate
        .authorize(token.as_deref())
        .await
        .map_err(|_| AppError::unauthorized("authorization required"))?;

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<String> {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;
    header
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}
