use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::FileMap;
use super::Message;
use super::SignInProfile;
use super::UserProfile;
use super::WorkspaceDoc;

/// Remote document store holding each workspace's message list and file map.
/// The two update calls are separate mutations with no transactional linkage;
/// a crash between them leaves the workspace half-updated and that is
/// accepted in scope.
#[async_trait]
pub trait WorkspaceStore {
    /// Returns `None` when the workspace does not exist yet.
    async fn get(&self, workspace_id: &str) -> Result<Option<WorkspaceDoc>>;

    /// Replaces the stored message list with the full updated list.
    async fn update_messages(&self, workspace_id: &str, messages: &[Message]) -> Result<()>;

    /// Replaces the stored file map.
    async fn update_files(&self, workspace_id: &str, files: &FileMap) -> Result<()>;
}

/// Per-user token budget. `update_tokens` sets the absolute remaining
/// balance, it does not increment. Concurrent writers are last-write-wins.
#[async_trait]
pub trait TokenLedger {
    async fn update_tokens(&self, user_id: &str, token: i64) -> Result<()>;
}

/// Looks up or creates the user record backing an external sign-in. First
/// sign-in creates the record with [`super::INITIAL_TOKEN_GRANT`] tokens.
#[async_trait]
pub trait UserDirectory {
    async fn get_or_create(&self, profile: &SignInProfile) -> Result<UserProfile>;
}

pub type WorkspaceStoreRef = Arc<dyn WorkspaceStore + Send + Sync>;
pub type TokenLedgerRef = Arc<dyn TokenLedger + Send + Sync>;
pub type UserDirectoryRef = Arc<dyn UserDirectory + Send + Sync>;
