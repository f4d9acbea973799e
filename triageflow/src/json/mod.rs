//! Native JSON tooling: document merge and schema validation.
//!
//! These are the two native skills at the tail of the pipeline. Both are
//! pure transformations of their text inputs; the async surfaces offload to
//! a blocking task and must be awaited before their results are used.

mod merge;
mod validate;

pub use merge::{combine, combine_documents};
pub use validate::{validate, validate_document};
