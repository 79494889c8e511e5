//! Turning a morning journal into a saved reflection and day plan
//!
//! Flow: validate input → build prompt → model call → split response → store.
//! Nothing is stored unless the model call succeeds.

mod prompt;
mod response;

pub use prompt::build_prompt;
pub use response::{split_response, ParsedResponse};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::llm::CompletionModel;
use crate::store::{Entry, EntryStore, NewEntry};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("please fill all fields before generating: {0} is empty")]
    MissingField(&'static str),
}

/// The four fields the user fills in
#[derive(Debug, Clone, Default)]
pub struct JournalInput {
    pub journal: String,
    pub intention: String,
    pub dream: String,
    pub priorities: String,
}

impl JournalInput {
    /// Every field is required; whitespace-only counts as empty
    pub fn validate(&self) -> Result<(), PlanError> {
        let fields = [
            ("journal", &self.journal),
            ("intention", &self.intention),
            ("dream", &self.dream),
            ("priorities", &self.priorities),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(PlanError::MissingField(name));
            }
        }
        Ok(())
    }

    pub fn prompt(&self) -> String {
        build_prompt(&self.journal, &self.intention, &self.dream, &self.priorities)
    }
}

pub struct Planner<'a, M: CompletionModel> {
    store: &'a EntryStore,
    model: &'a M,
}

impl<'a, M: CompletionModel> Planner<'a, M> {
    pub fn new(store: &'a EntryStore, model: &'a M) -> Self {
        Self { store, model }
    }

    /// Generate a reflection and strategy for `input` and save the entry
    pub async fn generate(&self, input: JournalInput) -> Result<Entry> {
        input.validate()?;

        let raw = self
            .model
            .complete(&input.prompt())
            .await
            .context("failed to generate plan")?;

        let parsed = ParsedResponse::parse(&raw);
        if !parsed.is_split() {
            tracing::warn!("model response has no strategy section");
        }
        let (reflection, strategy) = parsed.into_parts();

        let new = NewEntry::today(
            input.journal,
            input.intention,
            input.dream,
            input.priorities,
            reflection,
            strategy,
        );
        let id = self.store.insert(&new)?;

        Ok(Entry {
            id,
            date: new.date,
            journal: new.journal,
            intention: new.intention,
            dream: new.dream,
            priorities: new.priorities,
            reflection: new.reflection,
            strategy: new.strategy,
        })
    }
}
