use std::env;

use crate::error::AppError;

/// Runtime configuration. The three Google credentials are required and
/// their absence is a startup failure; `PUBLIC_BASE_URL` only feeds the
/// profile/QR links handed out to clients.
#[derive(Clone)]
pub struct Config {
    pub service_account_email: String,
    pub private_key: String,
    pub spreadsheet_id: String,
    pub public_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            service_account_email: required("GOOGLE_SERVICE_ACCOUNT_EMAIL")?,
            // Deployment environments store the PEM with escaped newlines.
            private_key: required("GOOGLE_PRIVATE_KEY")?.replace("\\n", "\n"),
            spreadsheet_id: required("GOOGLE_SHEETS_ID")?,
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
        })
    }
}

fn required(key: &str) -> Result<String, AppError> {
    env::var(key)
        .map_err(|_| AppError::Configuration(format!("{key} environment variable is required")))
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test so the env mutations stay sequential.
    #[test]
    fn from_env_requires_google_credentials() {
        env::remove_var("GOOGLE_SERVICE_ACCOUNT_EMAIL");
        env::remove_var("GOOGLE_PRIVATE_KEY");
        env::remove_var("GOOGLE_SHEETS_ID");
        env::remove_var("PUBLIC_BASE_URL");
        assert!(matches!(
            Config::from_env(),
            Err(AppError::Configuration(_))
        ));

        env::set_var("GOOGLE_SERVICE_ACCOUNT_EMAIL", "svc@example.iam.gserviceaccount.com");
        env::set_var("GOOGLE_PRIVATE_KEY", "line one\\nline two");
        env::set_var("GOOGLE_SHEETS_ID", "sheet-doc-id");

        let config = Config::from_env().unwrap();
        assert_eq!(config.private_key, "line one\nline two");
        assert_eq!(config.spreadsheet_id, "sheet-doc-id");
        assert_eq!(config.public_base_url, "http://127.0.0.1:8080");
    }
}
