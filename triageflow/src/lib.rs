//! # Triageflow
//!
//! A customer-complaint triage pipeline that chains LLM prompt skills with
//! native JSON tooling.
//!
//! Triageflow runs a fixed four-stage sequence:
//!
//! - **Identify sentiment**: prompt skill turning a complaint text into a
//!   sentiment JSON document
//! - **Extract entities**: prompt skill turning a customer-info text into an
//!   entities JSON document
//! - **Combine**: native skill merging the two documents (arrays merge as a
//!   set union)
//! - **Validate**: native skill checking the merged document against a
//!   JSON Schema (draft-07), reporting `"True"` or `"False"`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use triageflow::prelude::*;
//! use std::sync::Arc;
//!
//! let provider = Arc::new(AzureChatClient::new(ModelConfig::from_env())?);
//! let registry = Arc::new(SkillRegistry::with_defaults(provider));
//! let pipeline = TriagePipeline::new(registry);
//!
//! let report = pipeline.run(complaint, customer_info).await?;
//! println!("{}", report.schema_valid);
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod completion;
pub mod config;
pub mod errors;
pub mod json;
pub mod pipeline;
pub mod skills;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::completion::{
        AzureChatClient, ChatCompletion, ChatMessage, CompletionRequest,
        CompletionResponse, MockChatClient, Role,
    };
    pub use crate::config::ModelConfig;
    pub use crate::errors::{CompletionError, JsonError, TriageflowError};
    pub use crate::json::{combine, combine_documents, validate, validate_document};
    pub use crate::pipeline::{PipelineReport, TriagePipeline, DEFAULT_SCHEMA};
    pub use crate::skills::{
        CombineJsonSkill, ExtractEntitiesSkill, IdentifySentimentSkill, Skill,
        SkillId, SkillInput, SkillRegistry, SkillRegistryBuilder, ValidateJsonSkill,
    };
}
