pub mod conversation;
pub mod language;
pub mod pipeline;
pub mod preprocess;
pub mod prompt;
pub mod remote;
pub mod request;
pub mod resolve;
pub mod synthetic;

#[cfg(test)]
pub(crate) mod stubs;

pub use conversation::{ConversationSession, ConversationTurn};
pub use pipeline::ResolutionPipeline;
pub use request::{RequestError, TranslationRequest};
