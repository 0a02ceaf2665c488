//! Switchboard configuration system.
//!
//! Two artifacts live here:
//! - the inbox state ([`InboxConfig`]): groups of services, persisted as JSON
//!   by the [`StateStore`] and edited as raw text through [`editor`];
//! - the shell settings ([`ShellSettings`]): window geometry, probe period,
//!   user agent, read from `shell.toml` with serde defaults.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use switchboard_config::{settings_document, StateStore};
//!
//! let store = StateStore::open_default().expect("no config directory");
//! let config = store.load();
//! println!("{}", settings_document(&config));
//! ```

pub mod editor;
pub mod paths;
pub mod schema;
pub mod shell;
pub mod store;
pub mod validation;

pub use editor::{apply_edit, settings_document, EditRejection, EditResult};
pub use schema::{InboxConfig, Service, ServiceGroup, SETTINGS_ID};
pub use shell::ShellSettings;
pub use store::{StateStore, STATE_KEY};
pub use validation::{validate, validate_config, ValidationError};
