//! User directory repository.
//!
//! Maps identity-provider subjects to profile rows. Profile existence is an
//! implicit side effect of authentication: the first verified request from a
//! new subject creates the row, every later one refreshes `last_login`.

use sqlx::PgPool;

use safecart_core::{ProfileUpdate, SubjectId, User};

use super::RepositoryError;
use crate::auth::Claims;

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Upsert the caller's profile from verified claims.
    ///
    /// A single statement keyed on the unique `subject` column: inserts with
    /// claim-derived defaults on first sight, otherwise advances
    /// `last_login`. Racing first-login requests collapse onto one row via
    /// the unique constraint.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn sync_on_auth(
        &self,
        subject: &SubjectId,
        claims: &Claims,
    ) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r"
            INSERT INTO users (subject, username, name, email)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (subject) DO UPDATE SET last_login = NOW()
            RETURNING id, subject, username, name, email,
                      contact_number, country, created_at, last_login
            ",
        )
        .bind(subject)
        .bind(claims.username())
        .bind(claims.display_name())
        .bind(claims.email_or_default())
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Look up a profile by subject identifier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_subject(
        &self,
        subject: &SubjectId,
    ) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r"
            SELECT id, subject, username, name, email,
                   contact_number, country, created_at, last_login
            FROM users
            WHERE subject = $1
            ",
        )
        .bind(subject)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Replace the mutable profile fields (contact number, country).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no profile exists for the
    /// subject, `RepositoryError::Database` for other failures.
    pub async fn update_contact(
        &self,
        subject: &SubjectId,
        update: &ProfileUpdate,
    ) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r"
            UPDATE users
            SET contact_number = $2, country = $3
            WHERE subject = $1
            RETURNING id, subject, username, name, email,
                      contact_number, country, created_at, last_login
            ",
        )
        .bind(subject)
        .bind(update.contact_number.as_deref())
        .bind(update.country.as_deref())
        .fetch_optional(self.pool)
        .await?;

        user.ok_or(RepositoryError::NotFound)
    }
}
