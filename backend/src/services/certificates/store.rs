use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

use crate::error::AppError;

/// On-disk storage for uploaded certificate templates. Files are named
/// `<uuid>.<ext>` inside one flat directory, so a template id never
/// addresses anything outside it.
#[derive(Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Persists template bytes and returns the generated template id.
    pub fn save(&self, bytes: &[u8], extension: &str) -> Result<String, AppError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| AppError::Upstream(format!("cannot create template dir: {e}")))?;

        let template_id = Uuid::new_v4().to_string();
        let path = self.dir.join(format!("{template_id}.{extension}"));
        fs::write(&path, bytes)
            .map_err(|e| AppError::Upstream(format!("cannot write template: {e}")))?;
        Ok(template_id)
    }

    /// Path of a stored template, or `None` if the id is unknown. Matches
    /// by file stem, so the caller does not need to know the extension.
    pub fn path_of(&self, template_id: &str) -> Option<PathBuf> {
        let entries = fs::read_dir(&self.dir).ok()?;
        entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .find(|path| {
                path.file_stem().and_then(|stem| stem.to_str()) == Some(template_id)
            })
    }
}
