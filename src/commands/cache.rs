use crate::cache::UserStore;
use crate::error::Result;
use crate::output;

use super::users::UserRow;

pub fn show() -> Result<()> {
    let store = UserStore::load();

    if store.is_empty() {
        output::print_message("No cached users.");
        return Ok(());
    }

    output::print_table(store.users(), |u| UserRow::from(u));
    if !output::is_json_output() {
        output::print_message(&format!("{} cached users", store.len()));
    }

    Ok(())
}

pub fn clear() -> Result<()> {
    UserStore::clear()?;
    output::print_message("Cache cleared.");
    Ok(())
}

pub fn path() -> Result<()> {
    println!("{}", UserStore::store_path()?.display());
    Ok(())
}
