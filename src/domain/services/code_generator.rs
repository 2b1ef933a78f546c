#[cfg(test)]
#[path = "code_generator_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use super::compose_prompt;
use super::default_project;
use super::estimated_cost;
use super::merge_files;
use super::WorkspaceSession;
use super::CODE_GEN_PROMPT;
use crate::domain::models::Event;
use crate::domain::models::Generator;
use crate::domain::models::Notice;
use crate::domain::models::StructuredCompletionRef;
use crate::domain::models::TokenLedgerRef;
use crate::domain::models::WorkspaceStoreRef;

/// Regenerates the project file map from the conversation: requests a
/// structured payload, merges its files over the default skeleton, persists
/// the merged map, then debits the ledger.
pub struct CodeProjectGenerator {
    session: Arc<WorkspaceSession>,
    client: StructuredCompletionRef,
    store: WorkspaceStoreRef,
    ledger: TokenLedgerRef,
}

impl CodeProjectGenerator {
    pub fn new(
        session: Arc<WorkspaceSession>,
        client: StructuredCompletionRef,
        store: WorkspaceStoreRef,
        ledger: TokenLedgerRef,
    ) -> CodeProjectGenerator {
        return CodeProjectGenerator {
            session,
            client,
            store,
            ledger,
        };
    }

    /// Mirrors [`super::ChatReplyGenerator::generate`]: failures become
    /// notices, the finished event always fires.
    pub async fn generate(&self, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
        tx.send(Event::GenerationStarted(Generator::CodeProject))?;

        if let Err(err) = self.run(tx).await {
            tracing::error!(error = ?err, "code project generation failed");
            tx.send(Event::Notice(Notice::error(&format!(
                "Generating project code failed: {err}"
            ))))?;
        }

        // Always last, so the hosting UI can clear its in-progress indicator.
        tx.send(Event::GenerationFinished(Generator::CodeProject))?;

        return Ok(());
    }

    async fn run(&self, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
        let balance = self.session.token_balance();
        if balance <= 0 {
            tx.send(Event::Notice(Notice::insufficient_balance()))?;
            return Ok(());
        }

        let prompt = compose_prompt(&self.session.messages(), CODE_GEN_PROMPT)?;

        // A malformed payload errors out here, before any state is touched,
        // so the in-memory file map survives a bad response untouched.
        let project = self.client.generate_project(&prompt).await?;
        tracing::debug!(files = project.files.len(), "structured completion response");

        let merged = merge_files(&default_project(), &project.files);
        self.session.set_files(merged.clone());
        self.store
            .update_files(&self.session.workspace_id(), &merged)
            .await?;

        let cost = estimated_cost(&serde_json::to_string(&project)?);
        tracing::debug!(cost = cost, "code generation token usage");

        // Absolute set; the remainder is not clamped and may go negative.
        let remaining = balance - cost;
        self.ledger
            .update_tokens(&self.session.user_id(), remaining)
            .await?;
        self.session.set_token_balance(remaining);

        tx.send(Event::ProjectFiles(merged))?;
        tx.send(Event::TokenBalance(remaining))?;

        return Ok(());
    }
}
