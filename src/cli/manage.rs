//! Interactive entry manager
//!
//! A numbered text menu over the entry store, read line by line from any
//! `BufRead` so it can be driven from a script or a test.

use anyhow::Result;
use std::io::{BufRead, Write};

use super::{parse_date, render};
use crate::store::{EntryFilter, EntryStore};

const MENU: &str = "\n--- Day Planner Entry Manager ---
1. Show all entries
2. Show latest entry
3. Search by date
4. Search by keyword
5. Delete entry
6. Exit";

pub fn run<R: BufRead, W: Write>(store: &EntryStore, mut input: R, mut out: W) -> Result<()> {
    loop {
        writeln!(out, "{}", MENU)?;
        let Some(choice) = prompt(&mut input, &mut out, "Choose an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => show(store, &mut out, &EntryFilter::all())?,
            "2" => match store.latest()? {
                Some(entry) => {
                    writeln!(out, "\n--- Latest Entry ---")?;
                    render::entry_detail(&mut out, &entry)?;
                }
                None => writeln!(out, "⚠️ No entries found.")?,
            },
            "3" => {
                let Some(line) = prompt(&mut input, &mut out, "Enter date (YYYY-MM-DD): ")? else {
                    break;
                };
                match parse_date(&line) {
                    Ok(date) => show(store, &mut out, &EntryFilter::on_date(date))?,
                    Err(_) => writeln!(out, "❌ Invalid date format.")?,
                }
            }
            "4" => {
                let Some(keyword) = prompt(
                    &mut input,
                    &mut out,
                    "Enter keyword to search (Journal/Intention): ",
                )?
                else {
                    break;
                };
                show(store, &mut out, &EntryFilter::containing(keyword))?;
            }
            "5" => {
                let Some(line) = prompt(&mut input, &mut out, "Enter Entry ID to delete: ")? else {
                    break;
                };
                match line.parse::<i64>() {
                    Ok(id) => {
                        if store.delete(id)? {
                            writeln!(out, "✅ Entry {} deleted successfully!", id)?;
                        } else {
                            writeln!(out, "No entry with ID {}.", id)?;
                        }
                    }
                    Err(_) => writeln!(out, "❌ Invalid ID.")?,
                }
            }
            "6" => {
                writeln!(out, "Exiting...")?;
                break;
            }
            _ => writeln!(out, "❌ Invalid option. Try again.")?,
        }
    }

    Ok(())
}

fn show(store: &EntryStore, out: &mut impl Write, filter: &EntryFilter) -> Result<()> {
    let entries = store.query(filter)?;
    if entries.is_empty() {
        writeln!(out, "⚠️ No entries found.")?;
    } else {
        render::entry_table(out, &entries)?;
    }
    Ok(())
}

/// Print `label` and read one trimmed line; `None` at end of input
fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NewEntry;
    use std::io::Cursor;

    fn seeded_store() -> EntryStore {
        let store = EntryStore::open_in_memory().unwrap();
        for (date, journal) in [("2024-01-01", "gratitude list"), ("2024-01-02", "busy day")] {
            store
                .insert(&NewEntry {
                    date: date.to_string(),
                    journal: journal.to_string(),
                    intention: "be kind".to_string(),
                    dream: "none".to_string(),
                    priorities: "a, b, c".to_string(),
                    reflection: "ok".to_string(),
                    strategy: "- go".to_string(),
                })
                .unwrap();
        }
        store
    }

    fn drive(store: &EntryStore, script: &str) -> String {
        let mut out = Vec::new();
        run(store, Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_exit_option() {
        let store = seeded_store();
        let out = drive(&store, "6\n");
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let store = seeded_store();
        let out = drive(&store, "");
        assert!(out.contains("Choose an option: "));
        assert!(!out.contains("Exiting..."));
    }

    #[test]
    fn test_show_all_and_latest() {
        let store = seeded_store();
        let out = drive(&store, "1\n2\n6\n");
        assert!(out.contains("gratitude list"));
        assert!(out.contains("--- Latest Entry ---"));
        assert!(out.contains("Entry 2 | 2024-01-02"));
    }

    #[test]
    fn test_search_by_date_and_keyword() {
        let store = seeded_store();
        let out = drive(&store, "3\n2024-01-02\n4\nGRATITUDE\n3\nnot-a-date\n6\n");
        assert!(out.contains("busy day"));
        assert!(out.contains("gratitude list"));
        assert!(out.contains("❌ Invalid date format."));
    }

    #[test]
    fn test_delete_flow() {
        let store = seeded_store();
        let out = drive(&store, "5\n1\n5\n1\n5\nabc\n6\n");
        assert!(out.contains("✅ Entry 1 deleted successfully!"));
        assert!(out.contains("No entry with ID 1."));
        assert!(out.contains("❌ Invalid ID."));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_unknown_option() {
        let store = EntryStore::open_in_memory().unwrap();
        let out = drive(&store, "9\n1\n6\n");
        assert!(out.contains("❌ Invalid option. Try again."));
        assert!(out.contains("⚠️ No entries found."));
    }
}
