mod action;
mod capability;
mod chat_record;
mod error;
mod event;
mod language;
mod outcome;
mod session_state;
mod slash_commands;

pub use action::*;
pub use capability::*;
pub use chat_record::*;
pub use error::*;
pub use event::*;
pub use language::*;
pub use outcome::*;
pub use session_state::*;
pub use slash_commands::*;
