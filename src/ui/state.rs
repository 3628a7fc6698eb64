// Application state management

use crate::routine::{Catalog, CompletionTracker, Period, Product, clock};
use crate::stats::ProfileStats;
use chrono::{DateTime, Local};
use ratatui::widgets::{ListState, TableState};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Routines,
    Products,
    Profile,
}

impl Screen {
    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Routines => "Routines",
            Screen::Products => "Products",
            Screen::Profile => "Profile",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Screen::Home => Screen::Routines,
            Screen::Routines => Screen::Products,
            Screen::Products => Screen::Profile,
            Screen::Profile => Screen::Home,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Screen::Home => Screen::Profile,
            Screen::Routines => Screen::Home,
            Screen::Products => Screen::Routines,
            Screen::Profile => Screen::Products,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "home" => Some(Screen::Home),
            "routines" => Some(Screen::Routines),
            "products" => Some(Screen::Products),
            "profile" => Some(Screen::Profile),
            _ => None,
        }
    }
}

/// State for the key-reference modal
#[derive(Debug, Clone, Default)]
pub struct HelpModalState;

/// State for the quit confirmation modal
#[derive(Debug, Clone)]
pub struct QuitConfirmationState {
    /// Unchecked steps left in the active routine
    pub remaining: usize,
}

pub struct HomeState {
    pub list_state: ListState,
}

impl Default for HomeState {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }
}

pub struct ProductsState {
    pub table_state: TableState,
}

impl Default for ProductsState {
    fn default() -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        Self { table_state }
    }
}

pub struct AppState {
    pub current_screen: Screen,
    pub catalog: Catalog,
    pub tracker: CompletionTracker,
    pub profile: ProfileStats,
    pub now: DateTime<Local>,
    pub period_override: Option<Period>,
    pub use_24h_clock: bool,
    pub show_tips: bool,
    pub home: HomeState,
    pub products: ProductsState,
    pub help_modal: Option<HelpModalState>,
    pub quit_confirmation: Option<QuitConfirmationState>,
    pub app_version: String,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let now = Local::now();
        Self {
            current_screen: Screen::Home,
            tracker: CompletionTracker::new(now.date_naive()),
            catalog,
            profile: ProfileStats::default(),
            now,
            period_override: None, // Set from the --period flag
            use_24h_clock: true,
            show_tips: true,
            home: HomeState::default(),
            products: ProductsState::default(),
            help_modal: None,        // Opened when 'H' is pressed
            quit_confirmation: None, // Opened when quitting mid-routine
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: Instant::now(),
        }
    }

    /// Period driving the home checklist: forced override first, clock otherwise.
    pub fn active_period(&self) -> Period {
        self.period_override
            .unwrap_or_else(|| clock::current_period(&self.now))
    }

    /// Ordered products of the active checklist.
    pub fn active_products(&self) -> Vec<&Product> {
        self.catalog.products_for(self.active_period())
    }

    pub fn active_total(&self) -> usize {
        self.active_products().len()
    }

    pub fn active_done(&self) -> usize {
        self.tracker.completed_in(&self.catalog, self.active_period())
    }

    pub fn active_progress(&self) -> f64 {
        self.tracker.progress_for(&self.catalog, self.active_period())
    }

    /// Steps still unchecked in a routine the user already started. `None`
    /// means quitting needs no confirmation.
    pub fn unfinished_steps(&self) -> Option<usize> {
        let total = self.active_total();
        let done = self.active_done();
        if done > 0 && done < total {
            Some(total - done)
        } else {
            None
        }
    }

    /// One-second cadence: refresh the clock and apply the day boundary.
    pub fn on_tick(&mut self, now: DateTime<Local>) {
        let previous = self.active_period();
        self.now = now;
        self.tracker.roll_over(now.date_naive());
        let current = self.active_period();
        if previous != current {
            tracing::info!(from = %previous, to = %current, "active period flipped");
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::embedded())
    }
}
