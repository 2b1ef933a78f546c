#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::sync::Mutex;

use anyhow::Result;

use super::default_project;
use super::merge_files;
use crate::domain::models::FileMap;
use crate::domain::models::Message;
use crate::domain::models::UserProfile;
use crate::domain::models::WorkspaceStoreRef;

/// In-memory cache of one workspace plus the signed-in user, shared between
/// the two generators. This is a transient copy; the store owns the durable
/// document. Locks are never held across an await.
pub struct WorkspaceSession {
    workspace_id: String,
    user_id: String,
    messages: Mutex<Vec<Message>>,
    files: Mutex<FileMap>,
    token_balance: Mutex<i64>,
}

impl WorkspaceSession {
    pub fn new(workspace_id: &str, user: &UserProfile) -> WorkspaceSession {
        return WorkspaceSession {
            workspace_id: workspace_id.to_string(),
            user_id: user.id.to_string(),
            messages: Mutex::new(vec![]),
            files: Mutex::new(default_project()),
            token_balance: Mutex::new(user.token_balance),
        };
    }

    /// Fetches the workspace document and seeds the session from it. A
    /// missing document is a fresh workspace, not an error: the skeleton
    /// alone is used and the message list stays empty.
    pub async fn bootstrap(
        store: &WorkspaceStoreRef,
        workspace_id: &str,
        user: &UserProfile,
    ) -> Result<WorkspaceSession> {
        let session = WorkspaceSession::new(workspace_id, user);

        if let Some(doc) = store.get(workspace_id).await? {
            *session.messages.lock().unwrap() = doc.messages;
            *session.files.lock().unwrap() = merge_files(&default_project(), &doc.file_data);
        }

        return Ok(session);
    }

    pub fn workspace_id(&self) -> String {
        return self.workspace_id.to_string();
    }

    pub fn user_id(&self) -> String {
        return self.user_id.to_string();
    }

    pub fn messages(&self) -> Vec<Message> {
        return self.messages.lock().unwrap().clone();
    }

    pub fn append_message(&self, message: Message) {
        self.messages.lock().unwrap().push(message);
    }

    pub fn files(&self) -> FileMap {
        return self.files.lock().unwrap().clone();
    }

    pub fn set_files(&self, files: FileMap) {
        *self.files.lock().unwrap() = files;
    }

    pub fn token_balance(&self) -> i64 {
        return *self.token_balance.lock().unwrap();
    }

    pub fn set_token_balance(&self, balance: i64) {
        *self.token_balance.lock().unwrap() = balance;
    }
}
