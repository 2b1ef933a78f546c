#[cfg(test)]
#[path = "workspace_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::FileMap;
use crate::domain::models::Message;
use crate::domain::models::WorkspaceDoc;
use crate::domain::models::WorkspaceStore;

#[derive(Debug, Clone, Serialize)]
struct UpdateMessagesRequest<'a> {
    messages: &'a [Message],
}

#[derive(Debug, Clone, Serialize)]
struct UpdateFilesRequest<'a> {
    files: &'a FileMap,
}

/// HTTP client for the remote workspace document store.
pub struct HttpWorkspaceStore {
    url: String,
}

impl Default for HttpWorkspaceStore {
    fn default() -> HttpWorkspaceStore {
        return HttpWorkspaceStore {
            url: Config::get(ConfigKey::StoreURL),
        };
    }
}

#[async_trait]
impl WorkspaceStore for HttpWorkspaceStore {
    async fn get(&self, workspace_id: &str) -> Result<Option<WorkspaceDoc>> {
        let res = reqwest::Client::new()
            .get(format!("{url}/workspace/{workspace_id}", url = self.url))
            .send()
            .await?;

        // A workspace that does not exist yet is a fresh workspace, not an
        // error. The store answers either 404 or a JSON null.
        if res.status().as_u16() == 404 {
            return Ok(None);
        }
        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "failed to fetch workspace");
            bail!("failed to fetch workspace {workspace_id}");
        }

        let doc = res.json::<Option<WorkspaceDoc>>().await?;
        return Ok(doc);
    }

    async fn update_messages(&self, workspace_id: &str, messages: &[Message]) -> Result<()> {
        let res = reqwest::Client::new()
            .post(format!(
                "{url}/workspace/{workspace_id}/messages",
                url = self.url
            ))
            .json(&UpdateMessagesRequest { messages })
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "failed to update workspace messages"
            );
            bail!("failed to update messages for workspace {workspace_id}");
        }

        return Ok(());
    }

    async fn update_files(&self, workspace_id: &str, files: &FileMap) -> Result<()> {
        let res = reqwest::Client::new()
            .post(format!(
                "{url}/workspace/{workspace_id}/files",
                url = self.url
            ))
            .json(&UpdateFilesRequest { files })
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "failed to update workspace files"
            );
            bail!("failed to update files for workspace {workspace_id}");
        }

        return Ok(());
    }
}
