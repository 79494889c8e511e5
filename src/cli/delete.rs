use anyhow::Result;

use crate::store::EntryStore;

pub fn run(store: &EntryStore, id: i64) -> Result<()> {
    if store.delete(id)? {
        println!("✅ Entry {} deleted successfully!", id);
    } else {
        println!("No entry with ID {}; nothing deleted.", id);
    }
    Ok(())
}
