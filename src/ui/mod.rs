// Terminal UI using Ratatui

pub mod components;
pub mod constants;
pub mod events;
pub mod help;
pub mod home;
pub mod products;
pub mod profile;
pub mod quit_modal;
pub mod routines;
pub mod state;
pub mod widgets;

pub use events::{run_ui, run_ui_with_options};
pub use help::HelpModal;
pub use home::HomeScreen;
pub use products::ProductsScreen;
pub use profile::ProfileScreen;
pub use quit_modal::QuitModal;
pub use routines::RoutinesScreen;
pub use state::AppState;
