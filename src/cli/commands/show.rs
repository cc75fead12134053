use crate::config::Config;
use crate::db::entries::EntryStore;
use crate::errors::AppResult;
use crate::utils::table::render_entries;
use chrono::Local;

/// Print the entries matching `paid` (all of them when `None`) as a table.
pub fn handle(store: &EntryStore<'_>, cfg: &Config, paid: Option<bool>) -> AppResult<()> {
    let entries = store.show_entries(paid)?;
    print!("{}", render_entries(&entries, &Local, cfg.comment_width)?);
    Ok(())
}
