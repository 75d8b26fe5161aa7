use anyhow::{Context, Result, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use sheetline_core::row::{Cell, ExtractedRow};

const PDF_DATA_URI_PREFIX: &str = "data:application/pdf;base64,";

/// Connection settings for the extraction service.
#[derive(Debug, Clone)]
pub struct ExtractionClient {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

/// One extracted document: rows in statement order plus the document
/// currency (a three-letter code, display only).
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub rows: Vec<ExtractedRow>,
    pub currency: String,
}

#[derive(Serialize)]
struct ExtractReq {
    model: String,
    pdf_data_uri: String,
}

/// Wire shape of the service response. Fields are optional so a
/// structure mismatch becomes a clear error instead of a serde failure
/// buried in transport noise.
#[derive(Deserialize)]
struct ExtractResp {
    transactions: Option<Vec<Vec<WireCell>>>,
    currency: Option<String>,
}

#[derive(Deserialize)]
struct WireCell {
    key: String,
    value: String,
}

/// Wrap raw PDF bytes in the data URI format the service expects.
pub fn pdf_data_uri(bytes: &[u8]) -> String {
    format!("{PDF_DATA_URI_PREFIX}{}", BASE64.encode(bytes))
}

impl ExtractionClient {
    /// Submit raw PDF bytes for extraction.
    pub async fn extract(&self, pdf: &[u8]) -> Result<Extraction> {
        self.extract_data_uri(&pdf_data_uri(pdf)).await
    }

    /// Submit an already-encoded PDF data URI for extraction.
    ///
    /// One POST, one awaited JSON result. Transport and service errors
    /// surface verbatim; retry policy, if any, belongs to the caller.
    pub async fn extract_data_uri(&self, pdf_data_uri: &str) -> Result<Extraction> {
        if !pdf_data_uri.starts_with(PDF_DATA_URI_PREFIX) {
            bail!("invalid PDF data format (expected {PDF_DATA_URI_PREFIX}...)");
        }

        let body = ExtractReq {
            model: self.model.clone(),
            pdf_data_uri: pdf_data_uri.to_string(),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let url = format!("{}/v1/extract", self.base_url.trim_end_matches('/'));
        let client = reqwest::Client::new();
        let resp = client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .context("extraction request")?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("extraction service error: {status} {txt}");
        }

        let raw: ExtractResp = resp.json().await.context("parse extraction response")?;
        validate_response(raw)
    }
}

/// Parse an extraction payload from JSON text, e.g. a saved service
/// response re-fed through the pipeline without another extraction call.
pub fn parse_extraction_json(json: &str) -> Result<Extraction> {
    let raw: ExtractResp =
        serde_json::from_str(json).context("parse extraction JSON")?;
    validate_response(raw)
}

/// Boundary validation: reject malformed shapes here so the mapping core
/// only ever sees well-formed rows.
fn validate_response(raw: ExtractResp) -> Result<Extraction> {
    let (Some(transactions), Some(currency)) = (raw.transactions, raw.currency) else {
        bail!("the extraction service did not return the expected structure");
    };
    if currency.trim().is_empty() {
        bail!("the extraction service did not return a currency");
    }

    let rows: Vec<ExtractedRow> = transactions
        .into_iter()
        .map(|cells| {
            ExtractedRow::new(
                cells
                    .into_iter()
                    .map(|c| Cell {
                        key: c.key,
                        value: c.value,
                    })
                    .collect(),
            )
        })
        .filter(|row| !row.is_empty())
        .collect();

    if rows.is_empty() {
        bail!("the extraction service returned no transactions");
    }

    Ok(Extraction {
        rows,
        currency: currency.trim().to_string(),
    })
}
