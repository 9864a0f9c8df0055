//! Report id allocation
//!
//! Ids follow `CV-<YYYYMMDD>-<NNN>` where the sequence starts at the number
//! of stored reports plus one. The sequence only reflects the in-memory
//! store, so it restarts with the process; when the candidate is already
//! taken the sequence is bumped until it is free.

use chrono::NaiveDate;

use crate::db::FixtureStore;

/// Format an id for `date` and a 1-based sequence (zero-padded to 3 digits)
pub fn format_report_id(date: NaiveDate, sequence: usize) -> String {
    format!("CV-{}-{:03}", date.format("%Y%m%d"), sequence)
}

/// Allocate the next id that is not present in `store`
pub fn allocate_report_id(store: &FixtureStore, date: NaiveDate) -> String {
    let mut sequence = store.len() + 1;
    loop {
        let id = format_report_id(date, sequence);
        if !store.contains_id(&id) {
            return id;
        }
        sequence += 1;
    }
}
