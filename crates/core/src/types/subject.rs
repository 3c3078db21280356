//! Subject identifier issued by the external identity provider.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`SubjectId`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SubjectIdError {
    /// The input string is empty.
    #[error("subject identifier cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("subject identifier must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a control character.
    #[error("subject identifier contains a control character")]
    ControlCharacter,
}

/// The stable unique identifier the identity provider assigns to a user.
///
/// Typically of the form `provider|opaque-id` (e.g. `auth0|65f2c...`), but the
/// exact shape is the issuer's business - we only require a non-empty,
/// reasonably sized, control-character-free string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
    /// Maximum length of a subject identifier.
    pub const MAX_LENGTH: usize = 255;

    /// Parse a `SubjectId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 255 characters, or
    /// contains control characters.
    pub fn parse(s: &str) -> Result<Self, SubjectIdError> {
        if s.is_empty() {
            return Err(SubjectIdError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SubjectIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if s.chars().any(char::is_control) {
            return Err(SubjectIdError::ControlCharacter);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the subject identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `SubjectId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SubjectId {
    type Err = SubjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for SubjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for SubjectId {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for SubjectId {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for SubjectId {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_subjects() {
        assert!(SubjectId::parse("auth0|65f2c4a1b2").is_ok());
        assert!(SubjectId::parse("google-oauth2|103254").is_ok());
        assert!(SubjectId::parse("plain-id").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(SubjectId::parse(""), Err(SubjectIdError::Empty)));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(256);
        assert!(matches!(
            SubjectId::parse(&long),
            Err(SubjectIdError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_control_character() {
        assert!(matches!(
            SubjectId::parse("auth0|abc\ndef"),
            Err(SubjectIdError::ControlCharacter)
        ));
    }

    #[test]
    fn test_serde_transparent() {
        let subject = SubjectId::parse("auth0|abc").unwrap();
        let json = serde_json::to_string(&subject).unwrap();
        assert_eq!(json, "\"auth0|abc\"");
    }
}
