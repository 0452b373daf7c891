//! JSON wire format of the backend and status-code classification.
//!
//! Kept free of browser types so decoding is testable natively.

use serde::{Deserialize, Serialize};

use super::Ack;
use crate::core::error::BrowserError;
use crate::models::{Entry, EntrySize, StorageSummary};

/// Listing body. `items` with `type` is the primary shape; the alternate
/// shape (`files` with `is_dir`) is accepted too.
#[derive(Deserialize)]
struct ListingBody {
    #[serde(alias = "files")]
    items: Vec<WireEntry>,
}

#[derive(Deserialize)]
struct WireEntry {
    name: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    is_dir: Option<bool>,
    #[serde(default)]
    size: Option<WireSize>,
    #[serde(default)]
    modified: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireSize {
    Bytes(u64),
    Label(String),
}

/// `{ message }` on success, `{ error }` (or `{ message }`) on failure.
#[derive(Deserialize, Default)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// JSON body of the folder-creation request.
#[derive(Serialize)]
pub(super) struct CreateFolderBody<'a> {
    pub name: &'a str,
    pub path: &'a str,
}

impl From<WireEntry> for Entry {
    fn from(wire: WireEntry) -> Self {
        let is_directory = wire
            .is_dir
            .unwrap_or_else(|| wire.kind.as_deref() == Some("folder"));
        let size = if is_directory {
            None
        } else {
            wire.size.and_then(|size| match size {
                WireSize::Bytes(bytes) => Some(EntrySize::Bytes(bytes)),
                WireSize::Label(label) => {
                    let label = label.trim();
                    if let Ok(bytes) = label.parse::<u64>() {
                        Some(EntrySize::Bytes(bytes))
                    } else if label.is_empty() || label == "—" {
                        None
                    } else {
                        Some(EntrySize::Label(label.to_string()))
                    }
                }
            })
        };
        Self {
            name: wire.name,
            is_directory,
            size,
            modified_at: wire.modified,
        }
    }
}

/// Map 401 and other non-2xx statuses to errors.
fn check_status(status: u16, body: &str) -> Result<(), BrowserError> {
    if status == 401 {
        return Err(BrowserError::AuthRequired);
    }
    if !(200..300).contains(&status) {
        let parsed: MessageBody = serde_json::from_str(body).unwrap_or_default();
        return Err(BrowserError::Backend {
            status,
            message: parsed.error.or(parsed.message),
        });
    }
    Ok(())
}

fn invalid_body(status: u16, err: serde_json::Error) -> BrowserError {
    log::error!("Unreadable response body: {}", err);
    BrowserError::Backend {
        status,
        message: Some("Invalid response from server".to_string()),
    }
}

pub(super) fn decode_listing(status: u16, body: &str) -> Result<Vec<Entry>, BrowserError> {
    check_status(status, body)?;
    let listing: ListingBody = serde_json::from_str(body).map_err(|e| invalid_body(status, e))?;
    Ok(listing.items.into_iter().map(Entry::from).collect())
}

pub(super) fn decode_ack(status: u16, body: &str) -> Result<Ack, BrowserError> {
    check_status(status, body)?;
    // A 2xx with an unreadable body still counts as success.
    let parsed: MessageBody = serde_json::from_str(body).unwrap_or_default();
    Ok(Ack {
        message: parsed.message,
    })
}

pub(super) fn decode_storage(status: u16, body: &str) -> Result<StorageSummary, BrowserError> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| invalid_body(status, e))
}
