/// HTTP layer for the petitions API: fetching and response decoding.
pub mod client;
pub mod errors;
#[cfg(test)]
pub mod mock;
pub mod response;

pub use client::{Fetch, HttpFetcher};
pub use errors::ApiError;
pub use response::{CountResponse, SignaturePage, SignatureRecord, decode_object};
