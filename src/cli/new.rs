//! New entry command

use anyhow::Result;

use super::render;
use crate::llm::CompletionModel;
use crate::planner::{JournalInput, Planner};
use crate::store::EntryStore;

pub async fn run<M: CompletionModel>(
    store: &EntryStore,
    model: &M,
    input: JournalInput,
) -> Result<()> {
    println!("Thinking...");
    let entry = Planner::new(store, model).generate(input).await?;

    render::plan(&mut std::io::stdout().lock(), &entry.reflection, &entry.strategy)?;
    println!("\nSaved as entry {} ({}).", entry.id, entry.date);
    Ok(())
}
