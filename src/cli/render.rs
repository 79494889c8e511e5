//! Plain-text rendering of entries

use std::io::{self, Write};

use crate::store::Entry;

const EMPTY_STRATEGY: &str = "No separate strategy generated.";

pub(crate) fn entry_table(out: &mut impl Write, entries: &[Entry]) -> io::Result<()> {
    writeln!(
        out,
        "{:<6} {:<12} {:<30} {:<24} {}",
        "ID", "Date", "Journal", "Intention", "Priorities"
    )?;
    writeln!(out, "{}", "-".repeat(100))?;

    for entry in entries {
        writeln!(
            out,
            "{:<6} {:<12} {:<30} {:<24} {}",
            entry.id,
            entry.date,
            snippet(&entry.journal, 28),
            snippet(&entry.intention, 22),
            snippet(&entry.priorities, 30),
        )?;
    }
    Ok(())
}

pub(crate) fn entry_detail(out: &mut impl Write, entry: &Entry) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(80))?;
    writeln!(out, "Entry {} | {}", entry.id, entry.date)?;
    writeln!(out, "{}", "=".repeat(80))?;
    writeln!(out, "Journal:    {}", entry.journal)?;
    writeln!(out, "Intention:  {}", entry.intention)?;
    writeln!(out, "Dream:      {}", entry.dream)?;
    writeln!(out, "Priorities: {}", entry.priorities)?;
    plan(out, &entry.reflection, &entry.strategy)
}

pub(crate) fn plan(out: &mut impl Write, reflection: &str, strategy: &str) -> io::Result<()> {
    writeln!(out, "\n🪞 Reflection\n{}", reflection)?;
    let strategy = if strategy.is_empty() {
        EMPTY_STRATEGY
    } else {
        strategy
    };
    writeln!(out, "\n📅 Day Strategy\n{}", strategy)
}

/// First line of `text`, cut to `max` characters
fn snippet(text: &str, max: usize) -> String {
    let line = text.lines().next().unwrap_or("");
    if line.chars().count() > max {
        let cut: String = line.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        line.to_string()
    }
}
