use serde::Serialize;

/// The `{success, data}` / `{success, message}` envelope every JSON
/// endpoint responds with. Exactly one of `data` and `message` is present.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Body of `GET /api/auth/check`.
#[derive(Debug, Serialize)]
pub struct AuthCheck {
    pub authenticated: bool,
}

/// Links produced by the QR helper: the public profile page and the
/// third-party image URL that encodes it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrLinks {
    pub profile_url: String,
    pub qr_url: String,
}

/// Returned after a certificate template upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateUploaded {
    pub template_id: String,
}

/// Returned when a certificate-generation job is scheduled.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateScheduled {
    pub job_id: String,
}
