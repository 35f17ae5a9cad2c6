//! The record operations consumed by the HTTP layer.
//!
//! Every call re-fetches the full row set from the store; there is no
//! cache and no cross-request coordination, so concurrent writers race the
//! same way two dashboard tabs would. Remote failures surface unretried.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use common::model::intern::InternRecord;
use log::warn;

use crate::error::AppError;
use crate::records::mapper;
use crate::records::store::RowStore;

#[derive(Clone)]
pub struct RecordService {
    store: Arc<dyn RowStore>,
}

impl RecordService {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self { store }
    }

    /// All decodable records in storage (append) order. Rows that fail to
    /// decode are logged and skipped rather than failing the whole listing.
    pub async fn list_all(&self) -> Result<Vec<InternRecord>, AppError> {
        let rows = self.store.fetch_rows().await?;
        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            match mapper::decode(row) {
                Ok(record) => records.push(record),
                Err(e) => warn!("skipping undecodable row {}: {e}", index + 2),
            }
        }
        Ok(records)
    }

    /// First record whose `id` matches exactly; `None` when absent.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<InternRecord>, AppError> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .find(|record| record.id == id))
    }

    /// Full-table substring search. `name`, `email` and the stint subject
    /// areas match case-insensitively; `phone` and `id` match verbatim.
    pub async fn search(&self, query: &str) -> Result<Vec<InternRecord>, AppError> {
        let needle = query.to_lowercase();
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .filter(|record| {
                record.name.to_lowercase().contains(&needle)
                    || record.email.to_lowercase().contains(&needle)
                    || record.phone.contains(query)
                    || record.id.contains(query)
                    || record
                        .internship_fields
                        .iter()
                        .any(|stint| stint.field.to_lowercase().contains(&needle))
            })
            .collect())
    }

    /// Stamps `createdAt` and appends one row. `id`, `name` and `email`
    /// must be present; nothing checks whether the id already exists, so
    /// duplicate ids remain possible.
    pub async fn add(&self, mut record: InternRecord) -> Result<InternRecord, AppError> {
        if record.id.trim().is_empty()
            || record.name.trim().is_empty()
            || record.email.trim().is_empty()
        {
            return Err(AppError::Validation(
                "id, name and email are required".to_string(),
            ));
        }

        record.created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let row = mapper::encode(&record)?;
        self.store.append_row(row).await?;
        Ok(record)
    }

    /// Removes the row whose `id` matches. Returns `false`, without
    /// touching the sheet, when no row matches.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let rows = self.store.fetch_rows().await?;
        let index = rows
            .iter()
            .position(|row| row.first().map(String::as_str) == Some(id));

        match index {
            Some(index) => {
                self.store.delete_row(index).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
