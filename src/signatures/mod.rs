/// Signature domain layer: list ids, name cleanup, paging, aggregation.
pub mod collect;
pub mod errors;
pub mod list_id;
pub mod normalize;
pub mod pages;

pub use collect::finalize;
pub use errors::SignatureError;
pub use list_id::PetitionListId;
pub use pages::{collect_names, resolve_count};
