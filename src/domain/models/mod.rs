mod action;
mod completion;
mod event;
mod message;
mod notice;
mod project;
mod role;
mod stores;
mod user;
mod workspace;

pub use action::*;
pub use completion::*;
pub use event::*;
pub use message::*;
pub use notice::*;
pub use project::*;
pub use role::*;
pub use stores::*;
pub use user::*;
pub use workspace::*;
