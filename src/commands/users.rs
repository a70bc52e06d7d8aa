use colored::Colorize;
use tabled::Tabled;

use crate::cache::UserStore;
use crate::cli::ListArgs;
use crate::client::RandomUserClient;
use crate::config::Config;
use crate::error::Result;
use crate::output;
use crate::types::User;

#[derive(Tabled)]
pub struct UserRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Born")]
    born: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Username")]
    username: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            name: user.full_name(),
            email: user.email.clone(),
            born: user.born(),
            phone: user.phone.clone(),
            username: user.login.username.clone(),
        }
    }
}

/// Fetch pages 1..=N, append onto the cached list, persist, and print.
///
/// Mirrors what the interactive browser does per scroll threshold, just
/// driven by a flag instead of scroll position. `--no-store` only skips the
/// cache write; the printed list always starts from the cached one.
pub async fn list(client: &RandomUserClient, config: &Config, args: ListArgs) -> Result<()> {
    let page_size = config.page_size(args.page_size);
    let seed = config.seed(args.seed);

    let cached = UserStore::load().into_users();
    let users = fetch_pages(client, cached, args.pages, page_size, seed.as_deref()).await?;

    if !args.no_store {
        if let Err(e) = UserStore::new(users.clone()).save() {
            eprintln!("{} failed to write cache: {e}", "warning:".yellow().bold());
        }
    }

    output::print_table(&users, |u| UserRow::from(u));

    Ok(())
}

/// Append pages 1..=N of results onto the accumulated list.
async fn fetch_pages(
    client: &RandomUserClient,
    mut users: Vec<User>,
    pages: u32,
    page_size: u32,
    seed: Option<&str>,
) -> Result<Vec<User>> {
    for page in 1..=pages {
        let batch = client.fetch_page(page, page_size, seed).await?;
        users.extend(batch);
    }
    Ok(users)
}
