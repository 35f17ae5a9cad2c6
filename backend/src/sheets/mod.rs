//! Google Sheets v4 REST client: service-account auth plus row-level
//! operations on the single `Interns` worksheet.

mod auth;
mod client;

pub use client::SheetsClient;
