use super::FileMap;
use super::Message;
use super::Notice;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Generator {
    ChatReply,
    CodeProject,
}

/// Events emitted back to the hosting UI. Both generators share one channel;
/// their events interleave in completion order with no guarantees between
/// them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    ChatReply(Message),
    ProjectFiles(FileMap),
    TokenBalance(i64),
    GenerationStarted(Generator),
    GenerationFinished(Generator),
    Notice(Notice),
}
