//! User profile wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::UserId;
use super::subject::SubjectId;

/// A user profile record.
///
/// Created implicitly the first time a verified subject identifier is seen;
/// the identity provider's claims supply the defaults. Only `contact_number`
/// and `country` are user-editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct User {
    /// Internal user ID.
    pub id: UserId,
    /// Identity-provider subject identifier (unique).
    pub subject: SubjectId,
    /// Display username (nickname, falling back to email, then name).
    pub username: String,
    /// Full name.
    pub name: String,
    /// Email address as asserted by the identity provider.
    pub email: String,
    /// Optional contact number.
    pub contact_number: Option<String>,
    /// Optional country.
    pub country: Option<String>,
    /// When the profile was first created.
    pub created_at: DateTime<Utc>,
    /// When the user last authenticated.
    pub last_login: DateTime<Utc>,
}

/// Body of a profile edit request.
///
/// Both fields are optional; an omitted field clears the stored value,
/// matching the original API's replace semantics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New contact number, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    /// New country, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
