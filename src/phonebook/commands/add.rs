use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;
use tracing::{info, warn};

/// Appends `record` and persists the whole sequence.
///
/// On a failed save the record is popped again before the error is returned,
/// so `records` always matches what the store last accepted.
pub fn run<S: DataStore>(
    store: &mut S,
    records: &mut Vec<Record>,
    record: Record,
) -> Result<CmdResult> {
    if let Err(e) = record.validate() {
        warn!(error = %e, "rejected record");
        return Err(e);
    }

    records.push(record.clone());
    if let Err(e) = store.save(records) {
        records.pop();
        return Err(e);
    }

    info!(
        last_name = %record.last_name,
        count = records.len(),
        location = %store.location(),
        "added record"
    );

    let mut result = CmdResult::default().with_affected_records(vec![record]);
    result.add_message(CmdMessage::success("Entry added successfully!"));
    Ok(result)
}
