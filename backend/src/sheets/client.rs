use async_trait::async_trait;
use log::info;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::Config;
use crate::error::AppError;
use crate::records::mapper::HEADER;
use crate::records::store::RowStore;
use crate::sheets::auth;

/// Exact worksheet title the records live in. Lookup is by title, so a
/// manual rename in the document would trigger re-provisioning.
const SHEET_TITLE: &str = "Interns";

/// Data rows start under the header; column O is the 15th and last.
const DATA_RANGE: &str = "Interns!A2:O";
const APPEND_RANGE: &str = "Interns!A1";

const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Client for the remote spreadsheet. Each row operation independently
/// authenticates and resolves the worksheet, auto-provisioning the sheet
/// and its header row on first contact.
pub struct SheetsClient {
    http: reqwest::Client,
    config: Config,
}

#[derive(Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetProperties {
    sheet_id: i64,
    title: String,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Option<Vec<Vec<String>>>,
}

impl SheetsClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn document_url(&self) -> String {
        format!("{API_BASE}/{}", self.config.spreadsheet_id)
    }

    /// Resolves the `Interns` worksheet, creating it (plus the header row)
    /// if the document does not have one yet. Returns the numeric sheet id
    /// needed by row-deletion requests. Sheet creation and the header
    /// append are two separate remote calls; a failure between them leaves
    /// the sheet headerless.
    async fn ensure_sheet(&self, token: &str) -> Result<i64, AppError> {
        let meta: SpreadsheetMeta = self
            .get_json(&format!("{}?fields=sheets.properties", self.document_url()), token)
            .await?;

        if let Some(entry) = meta
            .sheets
            .iter()
            .find(|entry| entry.properties.title == SHEET_TITLE)
        {
            return Ok(entry.properties.sheet_id);
        }

        let body = json!({
            "requests": [{ "addSheet": { "properties": { "title": SHEET_TITLE } } }]
        });
        let reply: Value = self
            .post_json(&format!("{}:batchUpdate", self.document_url()), token, &body)
            .await?;
        let sheet_id = reply["replies"][0]["addSheet"]["properties"]["sheetId"]
            .as_i64()
            .ok_or_else(|| AppError::Upstream("addSheet reply missing sheetId".to_string()))?;

        self.append_values(token, HEADER.iter().map(|h| h.to_string()).collect())
            .await?;
        info!("Created new {SHEET_TITLE} sheet");
        Ok(sheet_id)
    }

    async fn append_values(&self, token: &str, row: Vec<String>) -> Result<(), AppError> {
        let url = format!(
            "{}/values/{APPEND_RANGE}:append?valueInputOption=RAW",
            self.document_url()
        );
        let body = json!({ "values": [row] });
        let _: Value = self.post_json(&url, token, &body).await?;
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, token: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("spreadsheet request failed: {e}")))?;
        Self::read_json(response).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        token: &str,
        body: &Value,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("spreadsheet request failed: {e}")))?;
        Self::read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "spreadsheet request rejected with status {}",
                response.status()
            )));
        }
        response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("unreadable spreadsheet response: {e}")))
    }
}

#[async_trait]
impl RowStore for SheetsClient {
    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, AppError> {
        let token = auth::access_token(&self.http, &self.config).await?;
        self.ensure_sheet(&token).await?;

        let url = format!("{}/values/{DATA_RANGE}", self.document_url());
        let range: ValueRange = self.get_json(&url, &token).await?;
        Ok(range.values.unwrap_or_default())
    }

    async fn append_row(&self, row: Vec<String>) -> Result<(), AppError> {
        let token = auth::access_token(&self.http, &self.config).await?;
        self.ensure_sheet(&token).await?;
        self.append_values(&token, row).await
    }

    async fn delete_row(&self, index: usize) -> Result<(), AppError> {
        let token = auth::access_token(&self.http, &self.config).await?;
        let sheet_id = self.ensure_sheet(&token).await?;

        // Grid indices are 0-based over the whole sheet, so data row N sits
        // at grid row N + 1 (the header occupies row 0).
        let body = json!({
            "requests": [{
                "deleteDimension": {
                    "range": {
                        "sheetId": sheet_id,
                        "dimension": "ROWS",
                        "startIndex": index + 1,
                        "endIndex": index + 2,
                    }
                }
            }]
        });
        let _: Value = self
            .post_json(&format!("{}:batchUpdate", self.document_url()), &token, &body)
            .await?;
        Ok(())
    }
}
