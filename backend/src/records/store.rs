use async_trait::async_trait;

use crate::error::AppError;

/// Row-level access to the backing worksheet.
///
/// Rows are positional string cells in storage (append) order, with the
/// header row already excluded. The production implementor talks to the
/// remote spreadsheet; tests substitute an in-memory store.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Every data row currently in the sheet.
    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, AppError>;

    /// Appends one data row after the last occupied row.
    async fn append_row(&self, row: Vec<String>) -> Result<(), AppError>;

    /// Physically removes the data row at `index` (0-based, header excluded).
    async fn delete_row(&self, index: usize) -> Result<(), AppError>;
}
