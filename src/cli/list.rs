//! List, latest and show commands

use anyhow::Result;
use std::io::Write;

use super::{parse_date, render};
use crate::store::{EntryFilter, EntryStore};

pub fn run(store: &EntryStore, date: Option<String>, keyword: Option<String>) -> Result<()> {
    let date = date.as_deref().map(parse_date).transpose()?;
    let entries = store.query(&EntryFilter {
        date,
        text: keyword,
    })?;

    let mut out = std::io::stdout().lock();
    if entries.is_empty() {
        writeln!(out, "No entries found.")?;
        return Ok(());
    }

    render::entry_table(&mut out, &entries)?;
    Ok(())
}

pub fn latest(store: &EntryStore) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match store.latest()? {
        Some(entry) => render::entry_detail(&mut out, &entry)?,
        None => writeln!(out, "No entries found.")?,
    }
    Ok(())
}

pub fn show(store: &EntryStore, id: i64) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match store.get(id)? {
        Some(entry) => render::entry_detail(&mut out, &entry)?,
        None => writeln!(out, "Entry {} not found.", id)?,
    }
    Ok(())
}
