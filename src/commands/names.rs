/// Run the full signature name pipeline for one list.
use std::io::Write;

use tracing::info;

use crate::api::Fetch;
use crate::cli::{Cli, write_names};
use crate::config::ApiConfig;
use crate::signatures::{PetitionListId, SignatureError, collect_names, finalize, resolve_count};

/// Run `signature-names`.
///
/// The list id is validated before any request is made. Skip notices and the
/// final list are written to `out`. Returns the number of unique names
/// printed.
///
/// # Errors
///
/// - `SignatureError::Usage` — `--list_id` missing or not a positive integer
/// - `SignatureError::NoSignatures` — the base endpoint reported no signatures
/// - `SignatureError::Io` — writing to `out` failed
pub fn run<W: Write>(
    cli: &Cli,
    config: &ApiConfig,
    fetcher: &impl Fetch,
    out: &mut W,
) -> Result<usize, SignatureError> {
    let list_id = PetitionListId::parse(cli.list_id.as_deref())?;
    let base_url = config.signatures_url(list_id);

    let count = resolve_count(fetcher, &base_url)?;
    let max_pages = config.page_count(count);
    info!(list_id = list_id.get(), count, max_pages, "signature count resolved");

    let names = collect_names(fetcher, &base_url, config.per_page, max_pages, out)?;
    let unique = finalize(names);
    info!(unique = unique.len(), "writing names");

    write_names(out, &unique)?;
    Ok(unique.len())
}
