use chrono::{DateTime, Duration, Utc};
use configuration::settings::AuthSettings;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::sync::Arc;

type HmacSha256 = Hmac<Sha256>;

/// Session tokens never outlive a year, whatever the configuration says.
const MAX_TOKEN_TTL_SECS: u64 = 366 * 24 * 3600;

/// A signed session token handed out on successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Checks dashboard credentials and issues session tokens.
pub trait CredentialVerifier: Send + Sync {
    /// Returns a token when the credentials match, `None` otherwise.
    fn verify(&self, username: &str, password: &str, now: DateTime<Utc>) -> Option<SessionToken>;
}

/// Rejects every login. Used when no credentials are configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledLogin;

impl CredentialVerifier for DisabledLogin {
    fn verify(
        &self,
        _username: &str,
        _password: &str,
        _now: DateTime<Utc>,
    ) -> Option<SessionToken> {
        None
    }
}

/// Verifies against one configured user whose password is stored as a SHA-256 digest.
///
/// Tokens have the form `<username>.<expiry epoch>.<hex HMAC-SHA256 of the first two parts>`.
pub struct DigestCredentialVerifier {
    username: String,
    password_digest: Vec<u8>,
    signing_key: Vec<u8>,
    ttl: Duration,
}

impl DigestCredentialVerifier {
    pub fn new(
        username: &str,
        password_sha256_hex: &str,
        signing_key: &str,
        ttl: Duration,
    ) -> Result<Self, hex::FromHexError> {
        Ok(Self {
            username: username.to_string(),
            password_digest: hex::decode(password_sha256_hex.trim())?,
            signing_key: signing_key.as_bytes().to_vec(),
            ttl,
        })
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.signing_key).expect("HMAC can take key of any size")
    }

    fn sign(&self, payload: &str) -> String {
        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Returns the username a token was issued to, if its signature holds and it has not expired.
    pub fn validate_token(&self, token: &str, now: DateTime<Utc>) -> Option<String> {
        let (payload, signature) = token.rsplit_once('.')?;
        let (username, expiry) = payload.rsplit_once('.')?;
        let expiry: i64 = expiry.parse().ok()?;

        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        mac.verify_slice(&hex::decode(signature).ok()?).ok()?;

        (now.timestamp() < expiry).then(|| username.to_string())
    }
}

impl CredentialVerifier for DigestCredentialVerifier {
    fn verify(&self, username: &str, password: &str, now: DateTime<Utc>) -> Option<SessionToken> {
        let digest = Sha256::digest(password.as_bytes());
        if username != self.username || digest.as_slice() != self.password_digest.as_slice() {
            tracing::warn!(username, "Rejected login.");
            return None;
        }

        let expires_at = now + self.ttl;
        let payload = format!("{}.{}", self.username, expires_at.timestamp());
        let signature = self.sign(&payload);
        tracing::info!(username, %expires_at, "Issued session token.");

        Some(SessionToken {
            token: format!("{payload}.{signature}"),
            expires_at,
        })
    }
}

/// Builds the verifier described by the settings. Login stays disabled unless
/// the username, the password digest and the signing key are all present.
pub fn verifier_from_settings(
    settings: &AuthSettings,
) -> Result<Arc<dyn CredentialVerifier>, hex::FromHexError> {
    match (&settings.username, &settings.password_sha256, &settings.signing_key) {
        (Some(username), Some(digest), Some(key)) => {
            let ttl = Duration::seconds(settings.token_ttl_secs.min(MAX_TOKEN_TTL_SECS) as i64);
            Ok(Arc::new(DigestCredentialVerifier::new(username, digest, key, ttl)?))
        }
        _ => {
            tracing::info!("No dashboard credentials configured, login is disabled.");
            Ok(Arc::new(DisabledLogin))
        }
    }
}
