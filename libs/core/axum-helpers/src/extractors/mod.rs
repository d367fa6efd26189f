//! Custom extractors for Axum handlers.
//!
//! Each extractor rejects with a 400 failure envelope, so handlers only ever
//! see input that already passed validation.

pub mod id_path;
pub mod validated_json;
pub mod validated_query;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
