//! Recording fakes for the collaborator traits used by service-level tests.

use std::sync::Arc;
use std::sync::Mutex;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::FileMap;
use crate::domain::models::GeneratedProject;
use crate::domain::models::Message;
use crate::domain::models::StructuredCompletion;
use crate::domain::models::TextCompletion;
use crate::domain::models::TokenLedger;
use crate::domain::models::UserProfile;
use crate::domain::models::WorkspaceDoc;
use crate::domain::models::WorkspaceStore;

#[derive(Default)]
pub struct FakeTextCompletion {
    pub reply: Mutex<Option<String>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeTextCompletion {
    pub fn replying(reply: &str) -> Arc<FakeTextCompletion> {
        let fake = FakeTextCompletion::default();
        *fake.reply.lock().unwrap() = Some(reply.to_string());
        return Arc::new(fake);
    }

    pub fn failing() -> Arc<FakeTextCompletion> {
        return Arc::new(FakeTextCompletion::default());
    }

    pub fn call_count(&self) -> usize {
        return self.calls.lock().unwrap().len();
    }
}

#[async_trait]
impl TextCompletion for FakeTextCompletion {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(prompt.to_string());

        if let Some(reply) = self.reply.lock().unwrap().clone() {
            return Ok(reply);
        }

        bail!("text completion endpoint unavailable");
    }
}

#[derive(Default)]
pub struct FakeStructuredCompletion {
    pub project: Mutex<Option<GeneratedProject>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeStructuredCompletion {
    pub fn replying(project: GeneratedProject) -> Arc<FakeStructuredCompletion> {
        let fake = FakeStructuredCompletion::default();
        *fake.project.lock().unwrap() = Some(project);
        return Arc::new(fake);
    }

    pub fn failing() -> Arc<FakeStructuredCompletion> {
        return Arc::new(FakeStructuredCompletion::default());
    }

    pub fn call_count(&self) -> usize {
        return self.calls.lock().unwrap().len();
    }
}

#[async_trait]
impl StructuredCompletion for FakeStructuredCompletion {
    async fn generate_project(&self, prompt: &str) -> Result<GeneratedProject> {
        self.calls.lock().unwrap().push(prompt.to_string());

        if let Some(project) = self.project.lock().unwrap().clone() {
            return Ok(project);
        }

        bail!("malformed structured response");
    }
}

#[derive(Default)]
pub struct RecordingWorkspaceStore {
    pub doc: Mutex<Option<WorkspaceDoc>>,
    pub message_updates: Mutex<Vec<Vec<Message>>>,
    pub file_updates: Mutex<Vec<FileMap>>,
}

impl RecordingWorkspaceStore {
    pub fn empty() -> Arc<RecordingWorkspaceStore> {
        return Arc::new(RecordingWorkspaceStore::default());
    }

    pub fn with_doc(doc: WorkspaceDoc) -> Arc<RecordingWorkspaceStore> {
        let store = RecordingWorkspaceStore::default();
        *store.doc.lock().unwrap() = Some(doc);
        return Arc::new(store);
    }
}

#[async_trait]
impl WorkspaceStore for RecordingWorkspaceStore {
    async fn get(&self, _workspace_id: &str) -> Result<Option<WorkspaceDoc>> {
        return Ok(self.doc.lock().unwrap().clone());
    }

    async fn update_messages(&self, _workspace_id: &str, messages: &[Message]) -> Result<()> {
        self.message_updates.lock().unwrap().push(messages.to_vec());
        return Ok(());
    }

    async fn update_files(&self, _workspace_id: &str, files: &FileMap) -> Result<()> {
        self.file_updates.lock().unwrap().push(files.clone());
        return Ok(());
    }
}

#[derive(Default)]
pub struct RecordingTokenLedger {
    pub updates: Mutex<Vec<(String, i64)>>,
}

impl RecordingTokenLedger {
    pub fn new() -> Arc<RecordingTokenLedger> {
        return Arc::new(RecordingTokenLedger::default());
    }
}

#[async_trait]
impl TokenLedger for RecordingTokenLedger {
    async fn update_tokens(&self, user_id: &str, token: i64) -> Result<()> {
        self.updates
            .lock()
            .unwrap()
            .push((user_id.to_string(), token));
        return Ok(());
    }
}

pub fn test_user(balance: i64) -> UserProfile {
    return UserProfile {
        id: "user-1".to_string(),
        email: "dev@example.com".to_string(),
        display_name: "Dev".to_string(),
        picture_url: "https://example.com/dev.png".to_string(),
        token_balance: balance,
    };
}
