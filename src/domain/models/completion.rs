use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::GeneratedProject;

/// Plain text completion endpoint. Takes the fully composed prompt and
/// returns a single reply; streaming is out of scope.
#[async_trait]
pub trait TextCompletion {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// JSON-schema-constrained completion endpoint for project generation.
///
/// Implementations must return an error for any payload that does not parse
/// into a [`GeneratedProject`]; callers rely on that to skip the file merge
/// entirely rather than applying a partial one.
#[async_trait]
pub trait StructuredCompletion {
    async fn generate_project(&self, prompt: &str) -> Result<GeneratedProject>;
}

pub type TextCompletionRef = Arc<dyn TextCompletion + Send + Sync>;
pub type StructuredCompletionRef = Arc<dyn StructuredCompletion + Send + Sync>;
