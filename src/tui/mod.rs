mod app;
mod events;
mod ui;

use app::App;

use crate::cache::UserStore;
use crate::client::RandomUserClient;
use crate::error::Result;

/// Run the interactive user browser.
///
/// The cached list is loaded before the terminal is even initialized, so the
/// first frame already shows the persisted users while page 1 is fetched in
/// the background.
pub async fn run(
    client: RandomUserClient,
    page_size: u32,
    seed: Option<String>,
    fresh: bool,
) -> Result<()> {
    let store_path = UserStore::store_path()?;
    let cached = if fresh {
        Vec::new()
    } else {
        UserStore::load_from(&store_path).into_users()
    };

    let terminal = ratatui::init();
    let result = App::new(client, cached, page_size, seed, store_path)
        .run(terminal)
        .await;
    ratatui::restore();
    result
}
