#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;

use super::request_timeout;
use super::PromptRequest;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::TextCompletion;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct CompletionResponse {
    result: Option<String>,
    error: Option<String>,
}

/// Client for the text completion endpoint. The contract is carried in the
/// body shape, not the HTTP status: a body with an `error` field, or without
/// a `result`, is a failure regardless of status code.
pub struct ChatEndpoint {
    url: String,
}

impl Default for ChatEndpoint {
    fn default() -> ChatEndpoint {
        return ChatEndpoint {
            url: Config::get(ConfigKey::ChatEndpointURL),
        };
    }
}

#[async_trait]
impl TextCompletion for ChatEndpoint {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let req = PromptRequest {
            prompt: prompt.to_string(),
        };

        let res = reqwest::Client::new()
            .post(&self.url)
            .timeout(request_timeout()?)
            .json(&req)
            .send()
            .await?
            .json::<CompletionResponse>()
            .await?;

        if let Some(err) = res.error {
            tracing::error!(error = err, "chat endpoint returned an error body");
            bail!("chat endpoint returned an error: {err}");
        }

        match res.result {
            Some(result) => return Ok(result),
            None => {
                tracing::error!("chat endpoint body had neither result nor error");
                bail!("chat endpoint returned an empty body");
            }
        }
    }
}
