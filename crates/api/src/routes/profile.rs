//! Profile route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use safecart_core::{ProfileUpdate, User};

use crate::auth::Identity;
use crate::db::{RepositoryError, UserRepository};
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::validate::validate_profile_update;

/// Return the caller's profile, creating it on first sight.
///
/// Profile existence is an implicit side effect of authentication: a new
/// subject gets a row seeded from its claims, an existing one gets its
/// `last_login` advanced.
#[instrument(skip_all, fields(subject = %identity.subject))]
pub async fn get_profile(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<User>> {
    let user = UserRepository::new(state.pool())
        .sync_on_auth(&identity.subject, &identity.claims)
        .await?;

    Ok(Json(user))
}

/// Update the caller's mutable profile fields.
///
/// Unlike the read path this does NOT upsert: editing a profile that was
/// never created is a 404.
#[instrument(skip_all, fields(subject = %identity.subject))]
pub async fn update_profile(
    State(state): State<AppState>,
    identity: Identity,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<User>> {
    let cleaned = validate_profile_update(&update).map_err(AppError::Validation)?;

    let user = UserRepository::new(state.pool())
        .update_contact(&identity.subject, &cleaned)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound("User not found".to_owned()),
            other => AppError::Database(other),
        })?;

    Ok(Json(user))
}
