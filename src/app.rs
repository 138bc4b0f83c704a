//! Application state management for GameStore
//!
//! This module contains the main application state, handling keyboard input,
//! data loading through the gateway, and transitions between screens.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use crate::cli::StartupConfig;
use crate::contact::{ContactForm, FieldError};
use crate::data::{search_games, CatalogClient, Product, User, UsersClient};
use crate::gateway::{FetchError, Gateway, HttpTransport, Transport};
use crate::prefs::{PreferenceStore, Preferences, Theme};

/// Application state enum representing the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state while fetching data
    Loading,
    /// Product cards and community cards
    Products,
    /// Game title search
    Search,
    /// Contact form
    Contact,
}

/// Content of one page section
///
/// A failed fetch is kept apart from an empty result so the UI can tell
/// "nothing here" from "couldn't load".
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> Section<T> {
    /// The loaded items; empty while loading or after a failure
    pub fn items(&self) -> &[T] {
        match self {
            Section::Loaded(items) => items,
            Section::Loading | Section::Failed(_) => &[],
        }
    }

    fn from_result(result: Result<Vec<T>, FetchError>, what: &str) -> Self {
        match result {
            Ok(items) => Section::Loaded(items),
            Err(err) => {
                warn!(error = %err, "failed to load {}", what);
                Section::Failed(err.to_string())
            }
        }
    }
}

/// Everything fetched for a full page load
#[derive(Debug)]
pub struct PageData {
    pub products: Result<Vec<Product>, FetchError>,
    pub users: Result<Vec<User>, FetchError>,
    pub categories: Vec<String>,
}

/// Network work requested by a key press, run by the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Drop cached responses and reload the page
    Refresh,
    /// Reload products for the selected category
    LoadCategory,
}

/// Outcome of the last contact form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactStatus {
    Sent(String),
    Invalid(Vec<FieldError>),
}

/// Main application struct managing state and data
pub struct App<T: Transport = HttpTransport> {
    /// Current screen
    pub state: AppState,
    /// Product cards
    pub products: Section<Product>,
    /// Community member cards
    pub users: Section<User>,
    /// Category names from the catalog
    pub categories: Vec<String>,
    /// Selected category filter; 0 means all products
    pub category_index: usize,
    /// Index of the selected product card
    pub selected_index: usize,
    /// Products whose detail panel is open
    pub expanded: HashSet<u32>,
    /// Cart counter and theme
    pub prefs: Preferences,
    /// Text typed into the search box
    pub search_query: String,
    /// Contact form inputs
    pub contact: ContactForm,
    /// Result of the last submit
    pub contact_status: Option<ContactStatus>,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Network work for the event loop to run next
    pub pending: Option<PendingAction>,
    /// Timestamp of last data refresh
    pub last_refresh: Option<DateTime<Local>>,
    product_limit: u32,
    user_count: u32,
    gateway: Arc<Gateway<T>>,
    catalog: CatalogClient<T>,
    users_client: UsersClient<T>,
    store: Option<PreferenceStore>,
}

impl App {
    /// Creates a new App instance with default settings
    pub fn new() -> Self {
        Self::with_startup_config(StartupConfig::default())
    }

    /// Creates a new App instance with the given startup configuration,
    /// reading preferences from the default location.
    pub fn with_startup_config(config: StartupConfig) -> Self {
        Self::with_parts(config, PreferenceStore::new())
    }

    /// Creates a new App instance with an explicit preference store
    ///
    /// `None` keeps preferences in memory only.
    pub fn with_parts(config: StartupConfig, store: Option<PreferenceStore>) -> Self {
        let gateway = Arc::new(Gateway::with_config(config.gateway));
        Self::with_gateway(config, store, gateway)
    }
}

impl<T: Transport> App<T> {
    /// Creates a new App instance that fetches through an existing gateway
    ///
    /// The gateway's own timeout and freshness window apply; the gateway
    /// section of `config` is not used.
    pub fn with_gateway(
        config: StartupConfig,
        store: Option<PreferenceStore>,
        gateway: Arc<Gateway<T>>,
    ) -> Self {
        let mut prefs = store.as_ref().map(PreferenceStore::load).unwrap_or_default();
        if let Some(theme) = config.theme {
            prefs.theme = theme;
        }

        Self {
            state: AppState::Loading,
            products: Section::Loading,
            users: Section::Loading,
            categories: Vec::new(),
            category_index: 0,
            selected_index: 0,
            expanded: HashSet::new(),
            prefs,
            search_query: String::new(),
            contact: ContactForm::new(),
            contact_status: None,
            should_quit: false,
            show_help: false,
            pending: None,
            last_refresh: None,
            product_limit: config.product_limit,
            user_count: config.user_count,
            catalog: CatalogClient::new(Arc::clone(&gateway)),
            users_client: UsersClient::new(Arc::clone(&gateway)),
            gateway,
            store,
        }
    }

    /// Number of responses currently held by the gateway cache
    pub fn cached_responses(&self) -> usize {
        self.gateway.len()
    }

    /// Current color theme
    pub fn theme(&self) -> Theme {
        self.prefs.theme
    }

    /// Items in the cart
    pub fn cart_count(&self) -> u32 {
        self.prefs.cart_count
    }

    /// Product cards currently shown
    pub fn visible_products(&self) -> &[Product] {
        self.products.items()
    }

    /// The selected product card, if any
    pub fn selected_product(&self) -> Option<&Product> {
        self.visible_products().get(self.selected_index)
    }

    /// Whether a product's detail panel is open
    pub fn is_expanded(&self, product_id: u32) -> bool {
        self.expanded.contains(&product_id)
    }

    /// Name of the active category filter, `None` for all products
    pub fn current_category(&self) -> Option<&str> {
        self.category_index
            .checked_sub(1)
            .and_then(|i| self.categories.get(i))
            .map(String::as_str)
    }

    /// Titles matching the search box
    pub fn search_results(&self) -> Vec<&'static str> {
        search_games(&self.search_query)
    }

    /// Loads products, users and categories concurrently
    ///
    /// Transitions to the Products screen when complete.
    pub async fn load_all_data(&mut self) {
        let (products, users, categories) = futures::join!(
            self.catalog.try_products(Some(self.product_limit)),
            self.users_client.try_users(self.user_count),
            self.catalog.categories(),
        );

        self.apply_page_data(PageData {
            products,
            users,
            categories,
        });
    }

    /// Stores the result of a page load
    pub fn apply_page_data(&mut self, data: PageData) {
        self.products = Section::from_result(data.products, "products");
        self.users = Section::from_result(data.users, "users");
        self.categories = data.categories;
        if self.category_index > self.categories.len() {
            self.category_index = 0;
        }
        self.clamp_selection();

        info!(
            products = self.visible_products().len(),
            users = self.users.items().len(),
            categories = self.categories.len(),
            "page loaded"
        );

        self.last_refresh = Some(Local::now());
        if self.state == AppState::Loading {
            self.state = AppState::Products;
        }
    }

    /// Reloads product cards for the active category filter
    pub async fn load_category(&mut self) {
        let result = match self.current_category().map(str::to_string) {
            Some(category) => self.catalog.try_products_in_category(&category).await,
            None => self.catalog.try_products(Some(self.product_limit)).await,
        };
        self.products = Section::from_result(result, "category products");
        self.selected_index = 0;
        self.expanded.clear();
    }

    /// Drops every cached response and reloads the page
    pub async fn refresh(&mut self) {
        self.gateway.clear();
        self.load_all_data().await;
        if self.category_index != 0 {
            self.load_category().await;
        }
    }

    /// Runs the network work a key press asked for
    pub async fn run_pending(&mut self) {
        match self.pending.take() {
            Some(PendingAction::Refresh) => self.refresh().await,
            Some(PendingAction::LoadCategory) => self.load_category().await,
            None => {}
        }
    }

    /// Handles keyboard input and updates state accordingly
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            self.should_quit = true;
            return;
        }

        // Help overlay captures keys while shown
        if self.show_help {
            if matches!(key_event.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        match self.state {
            AppState::Loading => {
                if key_event.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            AppState::Products => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    self.move_selection_down();
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.move_selection_up();
                }
                KeyCode::Enter => {
                    self.toggle_details();
                }
                KeyCode::Char('a') => {
                    self.add_to_cart();
                }
                KeyCode::Char('x') => {
                    self.clear_cart();
                }
                KeyCode::Char('t') => {
                    self.toggle_theme();
                }
                KeyCode::Char('c') => {
                    self.next_category();
                }
                KeyCode::Char('r') => {
                    self.pending = Some(PendingAction::Refresh);
                }
                KeyCode::Char('/') => {
                    self.state = AppState::Search;
                }
                KeyCode::Char('m') => {
                    self.contact_status = None;
                    self.state = AppState::Contact;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::Search => match key_event.code {
                KeyCode::Esc => {
                    self.state = AppState::Products;
                }
                KeyCode::Backspace => {
                    self.search_query.pop();
                }
                KeyCode::Char(c) => {
                    self.search_query.push(c);
                }
                _ => {}
            },
            AppState::Contact => match key_event.code {
                KeyCode::Esc => {
                    self.state = AppState::Products;
                }
                KeyCode::Tab | KeyCode::Down => {
                    self.contact.focus = self.contact.focus.next();
                }
                KeyCode::BackTab | KeyCode::Up => {
                    self.contact.focus = self.contact.focus.previous();
                }
                KeyCode::Backspace => {
                    self.contact.backspace();
                }
                KeyCode::Enter => {
                    self.submit_contact();
                }
                KeyCode::Char(c) => {
                    self.contact.push_char(c);
                }
                _ => {}
            },
        }
    }

    /// Moves selection up in the product list (wraps to bottom)
    fn move_selection_up(&mut self) {
        let count = self.visible_products().len();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Moves selection down in the product list (wraps to top)
    fn move_selection_down(&mut self) {
        let count = self.visible_products().len();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_products().len();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    /// Opens or closes the detail panel of the selected product
    pub fn toggle_details(&mut self) {
        let Some(id) = self.selected_product().map(|p| p.id) else {
            return;
        };
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn add_to_cart(&mut self) {
        if self.selected_product().is_none() {
            return;
        }
        self.prefs.cart_count = self.prefs.cart_count.saturating_add(1);
        self.save_prefs();
    }

    pub fn clear_cart(&mut self) {
        self.prefs.cart_count = 0;
        self.save_prefs();
    }

    pub fn toggle_theme(&mut self) {
        self.prefs.theme = self.prefs.theme.toggled();
        self.save_prefs();
    }

    /// Steps the category filter: All, then each fetched category in turn
    fn next_category(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        self.category_index = (self.category_index + 1) % (self.categories.len() + 1);
        self.pending = Some(PendingAction::LoadCategory);
    }

    fn submit_contact(&mut self) {
        self.contact_status = Some(match self.contact.submit() {
            Ok(name) => {
                info!("contact form submitted");
                ContactStatus::Sent(name)
            }
            Err(errors) => ContactStatus::Invalid(errors),
        });
    }

    fn save_prefs(&self) {
        if let Some(store) = &self.store {
            if let Err(err) = store.save(&self.prefs) {
                warn!(error = %err, "failed to save preferences");
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
