#[cfg(test)]
#[path = "generation_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use super::ChatReplyGenerator;
use super::CodeProjectGenerator;
use super::GenerationTrigger;
use super::WorkspaceSession;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Message;

/// Event loop tying user input to the two generators.
///
/// Each accepted prompt appends a user message and, when the trigger fires,
/// spawns one chat-reply attempt and one code-generation attempt on separate
/// tasks. The two run concurrently with no ordering between their
/// completions, and a failure in one never blocks the other.
pub struct GenerationService {}

impl GenerationService {
    pub async fn start(
        session: Arc<WorkspaceSession>,
        chat: Arc<ChatReplyGenerator>,
        code: Arc<CodeProjectGenerator>,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let mut trigger = GenerationTrigger::default();

        loop {
            let action = match rx.recv().await {
                Some(action) => action,
                None => return Ok(()),
            };

            match action {
                Action::SubmitPrompt(text) => {
                    session.append_message(Message::user(&text));

                    if !trigger.observe(&session.messages()) {
                        continue;
                    }

                    let chat_tx = tx.clone();
                    let chat_worker = chat.clone();
                    tokio::spawn(async move {
                        if let Err(err) = chat_worker.generate(&chat_tx).await {
                            tracing::warn!(error = ?err, "chat reply worker stopped");
                        }
                    });

                    let code_tx = tx.clone();
                    let code_worker = code.clone();
                    tokio::spawn(async move {
                        if let Err(err) = code_worker.generate(&code_tx).await {
                            tracing::warn!(error = ?err, "code project worker stopped");
                        }
                    });
                }
            }
        }
    }
}
