pub mod cli;
pub mod config;
pub mod llm;
pub mod planner;
pub mod store;

pub use config::Config;
pub use llm::{CompletionModel, OpenRouterClient};
pub use planner::{build_prompt, split_response, JournalInput, Planner};
pub use store::{Entry, EntryFilter, EntryStore, NewEntry};
