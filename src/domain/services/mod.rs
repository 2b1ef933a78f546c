mod chat_generator;
mod code_generator;
#[cfg(test)]
pub mod fakes;
mod generation;
mod prompts;
mod scaffold;
mod session;
mod tokens;
mod trigger;

pub use chat_generator::*;
pub use code_generator::*;
pub use generation::*;
pub use prompts::*;
pub use scaffold::*;
pub use session::*;
pub use tokens::*;
pub use trigger::*;
