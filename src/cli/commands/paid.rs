use crate::db::entries::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::{deleted_paid, marked_paid};

pub fn mark(store: &EntryStore<'_>) -> AppResult<()> {
    marked_paid(store.mark_all_as_paid()?);
    Ok(())
}

pub fn delete(store: &EntryStore<'_>) -> AppResult<()> {
    deleted_paid(store.del_table_all_paid()?);
    Ok(())
}
