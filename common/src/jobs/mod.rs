use serde::Serialize;

/// Lifecycle of a background certificate-generation job.
///
/// `InProgress` carries a completion percentage. `Completed` carries the
/// download URL of the finished certificate image; `Failed` carries a
/// user-safe error message.
#[derive(Clone, Debug, Serialize)]
pub enum JobStatus {
    Pending,
    InProgress(u32),
    Completed(String),
    Failed(String),
}
