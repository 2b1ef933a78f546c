#[cfg(test)]
#[path = "chat_generator_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use super::compose_prompt;
use super::estimated_cost;
use super::WorkspaceSession;
use super::CHAT_PROMPT;
use crate::domain::models::Event;
use crate::domain::models::Generator;
use crate::domain::models::Message;
use crate::domain::models::Notice;
use crate::domain::models::TextCompletionRef;
use crate::domain::models::TokenLedgerRef;
use crate::domain::models::WorkspaceStoreRef;

/// Produces the conversational reply to the latest user message: completes,
/// appends, persists the full list, then debits the ledger.
pub struct ChatReplyGenerator {
    session: Arc<WorkspaceSession>,
    client: TextCompletionRef,
    store: WorkspaceStoreRef,
    ledger: TokenLedgerRef,
}

impl ChatReplyGenerator {
    pub fn new(
        session: Arc<WorkspaceSession>,
        client: TextCompletionRef,
        store: WorkspaceStoreRef,
        ledger: TokenLedgerRef,
    ) -> ChatReplyGenerator {
        return ChatReplyGenerator {
            session,
            client,
            store,
            ledger,
        };
    }

    /// Never returns the underlying failure: errors are logged and surfaced
    /// as a [`Notice`], and the finished event always fires so the hosting UI
    /// can clear its in-progress indicator.
    pub async fn generate(&self, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
        tx.send(Event::GenerationStarted(Generator::ChatReply))?;

        if let Err(err) = self.run(tx).await {
            tracing::error!(error = ?err, "chat reply generation failed");
            tx.send(Event::Notice(Notice::error(&format!(
                "Generating a reply failed: {err}"
            ))))?;
        }

        // Always last, so the hosting UI can clear its in-progress indicator.
        tx.send(Event::GenerationFinished(Generator::ChatReply))?;

        return Ok(());
    }

    async fn run(&self, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
        let balance = self.session.token_balance();
        if balance <= 0 {
            tx.send(Event::Notice(Notice::insufficient_balance()))?;
            return Ok(());
        }

        let prompt = compose_prompt(&self.session.messages(), CHAT_PROMPT)?;
        let reply = self.client.complete(&prompt).await?;

        let message = Message::ai(&reply);
        self.session.append_message(message.clone());
        self.store
            .update_messages(&self.session.workspace_id(), &self.session.messages())
            .await?;

        let cost = estimated_cost(&serde_json::to_string(&message)?);
        tracing::debug!(cost = cost, "chat reply token usage");

        // Absolute set; the remainder is not clamped and may go negative.
        let remaining = balance - cost;
        self.ledger
            .update_tokens(&self.session.user_id(), remaining)
            .await?;
        self.session.set_token_balance(remaining);

        tx.send(Event::ChatReply(message))?;
        tx.send(Event::TokenBalance(remaining))?;

        return Ok(());
    }
}
