pub mod actions;
mod debounce;
pub mod events;
#[cfg(test)]
pub mod fakes;
mod history;
mod local_storage;
mod orchestrator;
mod preferences;
pub mod summarizer;

pub use debounce::*;
pub use history::*;
pub use local_storage::*;
pub use orchestrator::*;
pub use preferences::*;
