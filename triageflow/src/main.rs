//! Demo binary: triage a customer complaint end to end.

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use triageflow::completion::AzureChatClient;
use triageflow::config::ModelConfig;
use triageflow::pipeline::TriagePipeline;
use triageflow::skills::SkillRegistry;

const COMPLAINT: &str = "I have a complaint! I want to speak to a manager!";
const CUSTOMER_INFO: &str = "It's about my order with the number 4711 and I'm John from Denver.";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ModelConfig::from_env();
    let provider = Arc::new(AzureChatClient::new(config)?);
    let registry = Arc::new(SkillRegistry::with_defaults(provider));
    let pipeline = TriagePipeline::new(registry);

    let report = pipeline.run(COMPLAINT, CUSTOMER_INFO).await?;

    println!("{}", report.sentiment_json);
    println!("{}", report.entities_json);
    println!("{}", report.schema_valid);

    Ok(())
}
