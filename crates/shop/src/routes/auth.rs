//! Authentication route handlers.
//!
//! Registration, login, and logout against the in-memory credential store.

use axum::{Json, extract::State, http::StatusCode};
use bodega_core::Role;
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::state::AppState;

/// Registration and login form data.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

/// Register a new account.
///
/// New accounts always get the `Customer` role; the admin account is
/// seeded from configuration at startup, not registered through here.
pub async fn register(
    State(state): State<AppState>,
    Json(form): Json<CredentialsForm>,
) -> Result<StatusCode> {
    state
        .credentials()
        .write()
        .await
        .register(&form.username, &form.password, Role::Customer)?;

    tracing::info!(username = %form.username, "account registered");
    Ok(StatusCode::CREATED)
}

/// Log in, stamping the session with the credential's identity and role.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<CredentialsForm>,
) -> Result<Json<CurrentUser>> {
    let role = {
        let credentials = state.credentials().read().await;
        if !credentials.verify(&form.username, &form.password) {
            return Err(AppError::InvalidCredentials);
        }
        credentials
            .role(&form.username)
            .ok_or(AppError::InvalidCredentials)?
    };

    let user = CurrentUser {
        username: form.username,
        role,
    };
    set_current_user(&session, &user).await?;

    tracing::info!(username = %user.username, "login");
    Ok(Json(user))
}

/// Log out, clearing the session identity.
///
/// The session's cart survives logout; only the identity is dropped.
pub async fn logout(session: Session) -> Result<StatusCode> {
    clear_current_user(&session).await?;
    Ok(StatusCode::NO_CONTENT)
}
