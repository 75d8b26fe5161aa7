//! sheetline-extract: client for the external statement-extraction service.
//!
//! The service takes a bank-statement PDF (as a base64 data URI) and
//! returns rows of key/value cells plus the document currency. This crate
//! owns that boundary: one request, one awaited result, no retry, and
//! strict validation of the response shape before anything reaches the
//! mapping core.

pub mod client;

pub use client::{Extraction, ExtractionClient, parse_extraction_json, pdf_data_uri};
