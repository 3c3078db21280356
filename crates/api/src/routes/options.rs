//! Options catalog route handler.

use axum::Json;

use crate::catalog::{self, Options};

/// Serve the static enumerations that drive the client's selection widgets.
///
/// Requires no credential, matching the original API: the catalog is public
/// and carries nothing user-specific.
pub async fn get_options() -> Json<Options> {
    Json(catalog::options())
}
