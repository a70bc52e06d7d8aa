use std::path::PathBuf;

use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{error::TryRecvError, unbounded_channel, UnboundedReceiver};

use crate::cache::UserStore;
use crate::client::RandomUserClient;
use crate::error::Result;
use crate::tui::events::EventHandler;
use crate::tui::ui;
use crate::types::User;

type FetchOutcome = Result<Vec<User>>;

/// State for the single browsing screen.
///
/// The fetch loop mirrors the original client: page 1 is requested on
/// startup, every change of the page counter triggers one request, and the
/// results are appended to the accumulated list and mirrored to the cache.
/// At most one fetch is in flight; end-reached events while one is
/// outstanding do not advance the page counter.
pub struct App {
    client: RandomUserClient,
    pub users: Vec<User>,
    pub page: u32,
    pub page_size: u32,
    pub seed: Option<String>,
    pub selected: usize,
    pub loading: bool,
    pub pending_fetch: bool,
    pub should_quit: bool,
    pub status: Option<String>,
    pub tick: usize,
    store_path: PathBuf,
    fetch_rx: Option<UnboundedReceiver<FetchOutcome>>,
}

impl App {
    pub fn new(
        client: RandomUserClient,
        cached_users: Vec<User>,
        page_size: u32,
        seed: Option<String>,
        store_path: PathBuf,
    ) -> Self {
        Self {
            client,
            users: cached_users,
            page: 1,
            page_size,
            seed,
            store_path,
            selected: 0,
            loading: false,
            // Page 1 is fetched on startup even when the cache is warm.
            pending_fetch: true,
            should_quit: false,
            status: None,
            tick: 0,
            fetch_rx: None,
        }
    }

    pub async fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            self.tick = self.tick.wrapping_add(1);
            terminal.draw(|frame| ui::render(self, frame))?;
            self.handle_events()?;
            self.maybe_start_fetch();
            self.poll_fetch();
        }
        Ok(())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.users.is_empty() {
            // Nothing landed yet, so the current page is still owed.
            self.retry_current_page();
            return;
        }
        if self.selected + 1 < self.users.len() {
            self.selected += 1;
        }
        if self.selected + 1 >= self.users.len() {
            self.request_next_page();
        }
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(10);
    }

    pub fn page_down(&mut self) {
        for _ in 0..10 {
            self.move_down();
        }
    }

    pub fn go_top(&mut self) {
        self.selected = 0;
    }

    pub fn go_bottom(&mut self) {
        if self.users.is_empty() {
            self.retry_current_page();
            return;
        }
        self.selected = self.users.len() - 1;
        self.request_next_page();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // =========================================================================
    // Fetch loop
    // =========================================================================

    /// Advance the page counter and queue a fetch, unless one is already
    /// queued or in flight.
    pub fn request_next_page(&mut self) {
        if self.fetch_in_progress() {
            return;
        }
        self.page += 1;
        self.pending_fetch = true;
    }

    /// Re-queue the current page without advancing the counter.
    pub fn retry_current_page(&mut self) {
        if self.fetch_in_progress() {
            return;
        }
        self.status = None;
        self.pending_fetch = true;
    }

    pub fn fetch_in_progress(&self) -> bool {
        self.loading || self.pending_fetch || self.fetch_rx.is_some()
    }

    fn maybe_start_fetch(&mut self) {
        if !self.pending_fetch || self.fetch_rx.is_some() {
            return;
        }
        self.pending_fetch = false;
        self.loading = true;

        let (tx, rx) = unbounded_channel();
        self.fetch_rx = Some(rx);

        let client = self.client.clone();
        let page = self.page;
        let page_size = self.page_size;
        let seed = self.seed.clone();

        tokio::spawn(async move {
            let _ = tx.send(client.fetch_page(page, page_size, seed.as_deref()).await);
        });
    }

    fn poll_fetch(&mut self) {
        let Some(rx) = &mut self.fetch_rx else {
            return;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.fetch_rx = None;
                if self.apply_fetch(outcome) {
                    self.persist();
                }
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.fetch_rx = None;
                self.loading = false;
            }
        }
    }

    /// Fold a finished fetch into the list. Returns whether users were
    /// appended and the cache should be rewritten.
    fn apply_fetch(&mut self, outcome: FetchOutcome) -> bool {
        self.loading = false;
        match outcome {
            Ok(batch) => {
                self.status = None;
                self.users.extend(batch);
                true
            }
            Err(e) => {
                self.status = Some(format!("fetch failed: {e}"));
                false
            }
        }
    }

    fn persist(&mut self) {
        if let Err(e) = UserStore::new(self.users.clone()).save_to(&self.store_path) {
            self.status = Some(format!("cache write failed: {e}"));
        }
    }
}
