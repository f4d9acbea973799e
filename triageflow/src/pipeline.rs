//! The four-stage triage pipeline driver.

use crate::errors::TriageflowError;
use crate::skills::{SkillId, SkillInput, SkillRegistry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// The embedded reference schema for the merged triage document.
///
/// The required list capitalizes `Name` and `Sentiment` while every
/// upstream skill emits lower-case keys, so the reference run validates to
/// `"False"`. That mismatch is inherited behavior and is kept as-is.
pub const DEFAULT_SCHEMA: &str = r#"{
    "$schema": "http://json-schema.org/draft-07/schema#",
    "type": "object",
    "properties": {
        "name": { "type": "string" },
        "sentiment": { "type": "string" }
    },
    "required": ["Name", "Sentiment"]
}"#;

/// The result of one end-to-end pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Unique identifier of this run.
    pub run_id: Uuid,
    /// The sentiment-analysis JSON produced by the first stage.
    pub sentiment_json: String,
    /// The entity-extraction JSON produced by the second stage.
    pub entities_json: String,
    /// The merged JSON document (computed, not printed in the demo run).
    pub merged_json: String,
    /// The validation result, the literal `"True"` or `"False"`.
    pub schema_valid: String,
    /// Total run duration in milliseconds.
    pub duration_ms: f64,
}

/// Driver executing the fixed four-stage triage sequence.
///
/// Stages run strictly sequentially; each stage's output feeds the next as
/// an explicit value, and every run owns its intermediates exclusively.
#[derive(Debug)]
pub struct TriagePipeline {
    registry: Arc<SkillRegistry>,
    schema: String,
}

impl TriagePipeline {
    /// Creates a pipeline over a skill registry with the embedded schema.
    #[must_use]
    pub fn new(registry: Arc<SkillRegistry>) -> Self {
        Self {
            registry,
            schema: DEFAULT_SCHEMA.to_string(),
        }
    }

    /// Replaces the validation schema.
    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// Runs sentiment → entities → merge → validate on the given inputs.
    ///
    /// Any stage error aborts the run and propagates unchanged; there are
    /// no retries and no partial results.
    pub async fn run(
        &self,
        complaint: &str,
        customer_info: &str,
    ) -> Result<PipelineReport, TriageflowError> {
        let run_id = Uuid::new_v4();
        let start = Instant::now();

        tracing::info!(%run_id, "pipeline started");

        let sentiment_json = self
            .run_stage(run_id, SkillId::IdentifySentiment, SkillInput::text(complaint))
            .await?;
        let entities_json = self
            .run_stage(run_id, SkillId::ExtractEntities, SkillInput::text(customer_info))
            .await?;
        let merged_json = self
            .run_stage(
                run_id,
                SkillId::CombineJson,
                SkillInput::text(&sentiment_json).with_auxiliary(&entities_json),
            )
            .await?;
        let schema_valid = self
            .run_stage(
                run_id,
                SkillId::ValidateJson,
                SkillInput::text(&merged_json).with_auxiliary(&self.schema),
            )
            .await?;

        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(%run_id, duration_ms, valid = %schema_valid, "pipeline completed");

        Ok(PipelineReport {
            run_id,
            sentiment_json,
            entities_json,
            merged_json,
            schema_valid,
            duration_ms,
        })
    }

    async fn run_stage(
        &self,
        run_id: Uuid,
        id: SkillId,
        input: SkillInput,
    ) -> Result<String, TriageflowError> {
        let stage_start = Instant::now();
        tracing::debug!(%run_id, stage = %id, "stage started");

        match self.registry.invoke(id, input).await {
            Ok(output) => {
                tracing::debug!(
                    %run_id,
                    stage = %id,
                    duration_ms = stage_start.elapsed().as_secs_f64() * 1000.0,
                    "stage completed"
                );
                Ok(output)
            }
            Err(err) => {
                tracing::error!(%run_id, stage = %id, error = %err, "stage failed");
                Err(err)
            }
        }
    }
}
