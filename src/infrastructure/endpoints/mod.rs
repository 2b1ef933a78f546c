pub mod chat;
pub mod codegen;

use std::time::Duration;

use anyhow::Result;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct PromptRequest {
    pub prompt: String,
}

pub(crate) fn request_timeout() -> Result<Duration> {
    return Ok(Duration::from_millis(
        Config::get(ConfigKey::RequestTimeout).parse::<u64>()?,
    ));
}
