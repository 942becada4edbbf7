//! `LoginWidget` — HMAC verification of a [`LoginClaim`].

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::error::VerifyError;
use crate::login::LoginClaim;

type HmacSha256 = Hmac<Sha256>;

/// Verifier bound to one bot's access token.
///
/// Stateless after construction; safe to share across tasks.
#[derive(Clone)]
pub struct LoginWidget {
    /// SHA-256 of the bot token (raw digest bytes).
    secret_key: [u8; 32],
}

impl LoginWidget {
    pub fn new(bot_token: &str) -> Self {
        Self {
            secret_key: Sha256::digest(bot_token.as_bytes()).into(),
        }
    }

    /// Lowercase hex HMAC-SHA-256 of the claim's data-check string.
    pub fn sign(&self, claim: &LoginClaim) -> Result<String, VerifyError> {
        let mut mac = HmacSha256::new_from_slice(&self.secret_key)
            .map_err(|e| VerifyError::Internal(e.to_string()))?;
        mac.update(claim.data_check_string().as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Check the claim's `hash` against its data.
    ///
    /// `Ok(false)` is a clean mismatch. `Err(VerifyError::MissingClaim)`
    /// means there was nothing to verify.
    pub fn check_authorization(&self, claim: Option<&LoginClaim>) -> Result<bool, VerifyError> {
        let claim = claim.ok_or(VerifyError::MissingClaim)?;
        let expected = self.sign(claim)?;
        let ok: bool = expected.as_bytes().ct_eq(claim.hash.as_bytes()).into();
        if !ok {
            tracing::debug!(id = claim.id, "Login claim hash mismatch");
        }
        Ok(ok)
    }

    /// [`check_authorization`](Self::check_authorization), additionally
    /// rejecting claims whose `auth_date` is more than `max_age` before `now`.
    ///
    /// Claims dated in the future pass the age check.
    pub fn check_authorization_at(
        &self,
        claim: Option<&LoginClaim>,
        now: DateTime<Utc>,
        max_age: Duration,
    ) -> Result<bool, VerifyError> {
        if !self.check_authorization(claim)? {
            return Ok(false);
        }
        let claim = claim.ok_or(VerifyError::MissingClaim)?;
        let fresh = match claim.auth_time() {
            Some(auth_time) => now.signed_duration_since(auth_time) <= max_age,
            None => false,
        };
        if !fresh {
            tracing::debug!(id = claim.id, auth_date = claim.auth_date, "Login claim expired");
        }
        Ok(fresh)
    }
}

impl fmt::Debug for LoginWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginWidget")
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
