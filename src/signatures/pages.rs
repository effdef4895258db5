/// Count discovery and the sequential page loop.
use std::io::Write;

use tracing::{debug, info, trace, warn};

use super::errors::SignatureError;
use super::normalize::clean_name;
use crate::api::{CountResponse, Fetch, SignaturePage, SignatureRecord, decode_object};

/// Fetch the base endpoint and return its non-zero `count`.
///
/// # Errors
///
/// Returns `SignatureError::NoSignatures` when the request fails, the body is
/// not a JSON object, or `count` is absent, malformed, or zero.
pub fn resolve_count(fetcher: &impl Fetch, base_url: &str) -> Result<u64, SignatureError> {
    let response: CountResponse = fetcher
        .fetch(base_url)
        .and_then(|body| decode_object::<CountResponse>(&body))
        .map_err(|err| {
            warn!(url = base_url, error = %err, "no usable count");
            SignatureError::NoSignatures
        })?;

    match response.count {
        Some(count) if count > 0 => Ok(count),
        _ => Err(SignatureError::NoSignatures),
    }
}

/// URL of one page of the signature list.
#[must_use]
pub fn page_url(base_url: &str, per_page: u64, page: u64) -> String {
    format!("{base_url}?per_page={per_page}&page={page}")
}

/// Fetch pages `1..=max_pages` in order and return every cleaned name.
///
/// A page that fails or carries no records is reported on `out` as
/// `No valid signatures on page N` and skipped. Records without a usable name
/// are dropped silently.
///
/// # Errors
///
/// Returns `std::io::Error` only if writing a skip notice fails.
pub fn collect_names<W: Write>(
    fetcher: &impl Fetch,
    base_url: &str,
    per_page: u64,
    max_pages: u64,
    out: &mut W,
) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();

    for page in 1..=max_pages {
        let url = page_url(base_url, per_page, page);
        let parsed = fetcher
            .fetch(&url)
            .and_then(|body| decode_object::<SignaturePage>(&body));

        let page_data = match parsed {
            Ok(page_data) => page_data,
            Err(err) => {
                warn!(page, error = %err, "skipping page");
                writeln!(out, "No valid signatures on page {page}")?;
                continue;
            }
        };

        let Some(records) = page_data.records() else {
            warn!(page, "skipping page without embedded records");
            writeln!(out, "No valid signatures on page {page}")?;
            continue;
        };

        let before = names.len();
        for record in records {
            let Some(raw) = SignatureRecord::from_value(record)
                .as_ref()
                .and_then(SignatureRecord::user_name)
                .map(str::to_owned)
            else {
                trace!(page, "record without a name");
                continue;
            };
            match clean_name(&raw) {
                Some(name) => names.push(name),
                None => trace!(page, name = %raw, "single-token name dropped"),
            }
        }
        debug!(page, kept = names.len() - before, "page processed");
    }

    info!(total = names.len(), "names collected");
    Ok(names)
}
