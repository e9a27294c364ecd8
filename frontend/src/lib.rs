//! Browser-side client state for the scouting platform: credential storage,
//! the authenticated REST client, list and wizard controllers, notifications
//! and `yew` reducers.

pub mod api;
pub mod config;
pub mod credentials;
pub mod listing;
pub mod profile;
pub mod state;
pub mod toast;
pub mod wizard;

pub use api::{HttpScoutApi, ScoutApi};
pub use credentials::{CredentialStore, LocalStorageCredentialStore, MemoryCredentialStore};
pub use listing::{ListController, PageSource};
pub use state::{ListAction, ListState, WizardAction, WizardModel};
pub use toast::{Toast, ToastQueue, ToastType};
pub use wizard::{StepOutcome, Submitter, WizardController};

/// Installs the console logger and panic hook. Call once from the entry point.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("Scouting client starting");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {}
