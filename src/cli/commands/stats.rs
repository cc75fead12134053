use crate::db::entries::EntryStore;
use crate::errors::AppResult;
use crate::models::entry::minutes_to_hours;

/// Print the total of unpaid hours.
pub fn handle(store: &EntryStore<'_>) -> AppResult<()> {
    let minutes = store.minutes_total(false)?;
    println!("Time worked (unpaid): {} hours", minutes_to_hours(minutes));
    Ok(())
}
