use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time::timeout;

use super::GenerationService;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::FileMap;
use crate::domain::models::FileRecord;
use crate::domain::models::GeneratedProject;
use crate::domain::models::Severity;
use crate::domain::services::fakes::test_user;
use crate::domain::services::fakes::FakeStructuredCompletion;
use crate::domain::services::fakes::FakeTextCompletion;
use crate::domain::services::fakes::RecordingTokenLedger;
use crate::domain::services::fakes::RecordingWorkspaceStore;
use crate::domain::services::ChatReplyGenerator;
use crate::domain::services::CodeProjectGenerator;
use crate::domain::services::WorkspaceSession;

fn todo_project() -> GeneratedProject {
    let mut files = FileMap::new();
    files.insert("/Todo.js".to_string(), FileRecord::new("todo list"));

    return GeneratedProject {
        files,
        project_title: None,
        explanation: None,
        generated_files: None,
    };
}

async fn wait_for_both_finished(rx: &mut mpsc::UnboundedReceiver<Event>) -> Result<Vec<Event>> {
    let mut events = vec![];
    let mut finished = 0;

    while finished < 2 {
        let event = timeout(Duration::from_secs(5), rx.recv())
            .await?
            .expect("event channel closed early");
        if matches!(event, Event::GenerationFinished(_)) {
            finished += 1;
        }
        events.push(event);
    }

    // Pick up anything emitted right after the finished markers.
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }

    return Ok(events);
}

#[tokio::test]
async fn it_dispatches_both_generators_once_per_user_prompt() -> Result<()> {
    let session = Arc::new(WorkspaceSession::new("workspace-1", &test_user(50_000)));
    let text_client = FakeTextCompletion::replying("Sure, here's a plan...");
    let structured_client = FakeStructuredCompletion::replying(todo_project());
    let store = RecordingWorkspaceStore::empty();
    let ledger = RecordingTokenLedger::new();

    let chat = Arc::new(ChatReplyGenerator::new(
        session.clone(),
        text_client.clone(),
        store.clone(),
        ledger.clone(),
    ));
    let code = Arc::new(CodeProjectGenerator::new(
        session.clone(),
        structured_client.clone(),
        store.clone(),
        ledger.clone(),
    ));

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
    let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();

    let loop_session = session.clone();
    let service = tokio::spawn(async move {
        let mut action_rx = action_rx;
        return GenerationService::start(loop_session, chat, code, event_tx, &mut action_rx).await;
    });

    action_tx.send(Action::SubmitPrompt("Build a todo app".to_string()))?;
    wait_for_both_finished(&mut event_rx).await?;

    // Exactly one attempt each.
    assert_eq!(text_client.call_count(), 1);
    assert_eq!(structured_client.call_count(), 1);

    // Both wrote their own result: a reply appended, files merged in.
    assert_eq!(session.messages().len(), 2);
    assert!(session.files().contains_key("/Todo.js"));

    // Two independent debits landed, one per generator.
    assert_eq!(ledger.updates.lock().unwrap().len(), 2);

    drop(action_tx);
    service.await??;

    return Ok(());
}

#[tokio::test]
async fn it_keeps_generators_independent_on_failure() -> Result<()> {
    let session = Arc::new(WorkspaceSession::new("workspace-1", &test_user(50_000)));
    let text_client = FakeTextCompletion::failing();
    let structured_client = FakeStructuredCompletion::replying(todo_project());
    let store = RecordingWorkspaceStore::empty();
    let ledger = RecordingTokenLedger::new();

    let chat = Arc::new(ChatReplyGenerator::new(
        session.clone(),
        text_client,
        store.clone(),
        ledger.clone(),
    ));
    let code = Arc::new(CodeProjectGenerator::new(
        session.clone(),
        structured_client,
        store.clone(),
        ledger.clone(),
    ));

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
    let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();

    let loop_session = session.clone();
    let service = tokio::spawn(async move {
        let mut action_rx = action_rx;
        return GenerationService::start(loop_session, chat, code, event_tx, &mut action_rx).await;
    });

    action_tx.send(Action::SubmitPrompt("Build a todo app".to_string()))?;
    let events = wait_for_both_finished(&mut event_rx).await?;

    // The chat failure surfaced as a notice while code generation landed.
    assert!(events.iter().any(|event| {
        return matches!(event, Event::Notice(notice) if notice.severity == Severity::Error);
    }));
    assert!(session.files().contains_key("/Todo.js"));
    assert_eq!(store.file_updates.lock().unwrap().len(), 1);
    assert_eq!(ledger.updates.lock().unwrap().len(), 1);

    drop(action_tx);
    service.await??;

    return Ok(());
}

#[tokio::test]
async fn it_ignores_a_resubmitted_identical_state() -> Result<()> {
    // Each SubmitPrompt appends a fresh user message with a fresh id, so the
    // trigger fires per prompt; idempotency against an unchanged list is
    // exercised directly in the trigger tests. This covers the service not
    // firing when the channel closes with nothing pending.
    let session = Arc::new(WorkspaceSession::new("workspace-1", &test_user(50_000)));
    let text_client = FakeTextCompletion::replying("Sure, here's a plan...");
    let structured_client = FakeStructuredCompletion::replying(todo_project());
    let store = RecordingWorkspaceStore::empty();
    let ledger = RecordingTokenLedger::new();

    let chat = Arc::new(ChatReplyGenerator::new(
        session.clone(),
        text_client.clone(),
        store.clone(),
        ledger.clone(),
    ));
    let code = Arc::new(CodeProjectGenerator::new(
        session.clone(),
        structured_client.clone(),
        store,
        ledger,
    ));

    let (event_tx, _event_rx) = mpsc::unbounded_channel::<Event>();
    let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
    drop(action_tx);

    let mut action_rx = action_rx;
    GenerationService::start(session, chat, code, event_tx, &mut action_rx).await?;

    assert_eq!(text_client.call_count(), 0);
    assert_eq!(structured_client.call_count(), 0);

    return Ok(());
}
