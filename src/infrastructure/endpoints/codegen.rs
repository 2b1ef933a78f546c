#[cfg(test)]
#[path = "codegen_test.rs"]
mod tests;

use anyhow::Context;
use anyhow::Result;
use async_trait::async_trait;

use super::request_timeout;
use super::PromptRequest;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::GeneratedProject;
use crate::domain::models::StructuredCompletion;

/// Client for the JSON-schema-constrained project generation endpoint. Any
/// body that does not parse into a [`GeneratedProject`] is an error, so
/// callers never see a partial payload.
pub struct CodeGenEndpoint {
    url: String,
}

impl Default for CodeGenEndpoint {
    fn default() -> CodeGenEndpoint {
        return CodeGenEndpoint {
            url: Config::get(ConfigKey::CodeEndpointURL),
        };
    }
}

#[async_trait]
impl StructuredCompletion for CodeGenEndpoint {
    async fn generate_project(&self, prompt: &str) -> Result<GeneratedProject> {
        let req = PromptRequest {
            prompt: prompt.to_string(),
        };

        let body = reqwest::Client::new()
            .post(&self.url)
            .timeout(request_timeout()?)
            .json(&req)
            .send()
            .await?
            .text()
            .await?;

        let project = serde_json::from_str::<GeneratedProject>(&body).map_err(|err| {
            tracing::error!(error = ?err, "code generation endpoint returned a malformed body");
            return err;
        });

        return project.context("malformed structured response");
    }
}
