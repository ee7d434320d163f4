//! Request extractors that reject with [`common::AppError`].

mod path;
mod query;
mod validated_json;

pub use path::UuidPath;
pub use query::QueryParams;
pub use validated_json::ValidatedJson;
