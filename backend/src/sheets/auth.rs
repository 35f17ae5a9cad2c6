//! Service-account authentication against the Google OAuth token endpoint.
//!
//! Every call builds and signs a fresh RS256 assertion and exchanges it for
//! a bearer token. Tokens are deliberately not cached: each incoming
//! request re-authenticates, the same way each request re-fetches rows.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::AppError;

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

pub async fn access_token(http: &reqwest::Client, config: &Config) -> Result<String, AppError> {
    let key = EncodingKey::from_rsa_pem(config.private_key.as_bytes())
        .map_err(|e| AppError::Configuration(format!("invalid service account key: {e}")))?;

    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        iss: &config.service_account_email,
        scope: SPREADSHEETS_SCOPE,
        aud: TOKEN_URL,
        iat: now,
        exp: now + ASSERTION_LIFETIME_SECS,
    };
    let assertion = encode(&Header::new(Algorithm::RS256), &claims, &key)
        .map_err(|e| AppError::Upstream(format!("failed to sign auth assertion: {e}")))?;

    let response = http
        .post(TOKEN_URL)
        .form(&[
            ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
            ("assertion", assertion.as_str()),
        ])
        .send()
        .await
        .map_err(|e| AppError::Upstream(format!("token request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(AppError::Upstream(format!(
            "token request rejected with status {}",
            response.status()
        )));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| AppError::Upstream(format!("unreadable token response: {e}")))?;
    Ok(token.access_token)
}
