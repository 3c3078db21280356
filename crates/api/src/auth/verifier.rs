//! Bearer credential verification against the external issuer.
//!
//! Credentials are RS256 JWTs. Signing keys come from the issuer's JWKS
//! document, fetched lazily over HTTPS and cached with a TTL; a credential
//! naming an unseen `kid` forces one refetch before being rejected, so key
//! rotation does not strand callers for the cache lifetime.

use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use moka::future::Cache;

use super::claims::Claims;
use super::error::AuthError;
use crate::config::AuthConfig;

/// How long a fetched JWKS document is trusted.
const JWKS_TTL: Duration = Duration::from_secs(60 * 60);

/// Verifies bearer credentials against the configured issuer.
pub struct TokenVerifier {
    http: reqwest::Client,
    jwks_url: String,
    validation: Validation,
    keys: Cache<String, Arc<JwkSet>>,
}

impl TokenVerifier {
    /// Create a verifier for the configured issuer and audience.
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[config.audience.clone()]);
        validation.set_issuer(&[config.issuer.clone()]);

        Self {
            http: reqwest::Client::new(),
            jwks_url: config.jwks_url(),
            validation,
            keys: Cache::builder()
                .time_to_live(JWKS_TTL)
                .max_capacity(2)
                .build(),
        }
    }

    /// Verify a bearer token and return its profile claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` for signature/claim/expiry
    /// failures, `MissingKeyId`/`UnknownKeyId` for key mismatches, and
    /// `KeyDiscovery` if the JWKS document cannot be fetched.
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header =
            decode_header(token).map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        let kid = header.kid.ok_or(AuthError::MissingKeyId)?;

        let jwk = match self.jwk_set().await?.find(&kid) {
            Some(jwk) => jwk.clone(),
            None => {
                // Possibly a rotated key: drop the cache and try once more.
                self.keys.invalidate(&self.jwks_url).await;
                self.jwk_set()
                    .await?
                    .find(&kid)
                    .cloned()
                    .ok_or(AuthError::UnknownKeyId(kid))?
            }
        };

        let key =
            DecodingKey::from_jwk(&jwk).map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        self.decode_with_key(token, &key)
    }

    /// Decode and validate a token against a known key.
    ///
    /// Split out from [`verify`](Self::verify) so the claim checks are
    /// exercisable without key discovery.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` if any check fails.
    pub fn decode_with_key(&self, token: &str, key: &DecodingKey) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        Ok(data.claims)
    }

    async fn jwk_set(&self) -> Result<Arc<JwkSet>, AuthError> {
        if let Some(set) = self.keys.get(&self.jwks_url).await {
            return Ok(set);
        }

        let set: JwkSet = self
            .http
            .get(&self.jwks_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let set = Arc::new(set);
        self.keys.insert(self.jwks_url.clone(), set.clone()).await;
        Ok(set)
    }
}
