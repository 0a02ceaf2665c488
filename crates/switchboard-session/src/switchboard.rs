//! The application object: a session bound to the persisted state store.

use switchboard_common::ConfigError;
use switchboard_config::{apply_edit, settings_document, EditRejection, EditResult, StateStore};
use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::host::PaneHost;
use crate::session::{Session, SessionOptions};

/// Why a settings submission did not take effect. Either way the stored
/// state and the running panes are untouched.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("{}", .0.report())]
    Rejected(EditRejection),

    #[error("settings could not be saved: {0}")]
    Persist(#[from] ConfigError),
}

pub struct Switchboard<H: PaneHost> {
    store: StateStore,
    session: Session<H>,
}

impl<H: PaneHost> Switchboard<H> {
    /// Load the stored inbox (or the built-in default) and build its panes.
    pub fn boot(store: StateStore, host: H, options: SessionOptions, runtime: Handle) -> Self {
        let config = store.load();
        let session = Session::start(config, host, options, runtime);
        Self { store, session }
    }

    pub fn session(&self) -> &Session<H> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<H> {
        &mut self.session
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// The running inbox as editable text.
    pub fn settings_document(&self) -> String {
        settings_document(self.session.config())
    }

    /// Validate `raw`, save it, and rebuild everything from the store.
    pub fn submit_settings(&mut self, raw: &str) -> Result<(), SubmitError> {
        let config = match apply_edit(raw, self.session.config()) {
            EditResult::Applied(config) => config,
            EditResult::Rejected(rejection) => {
                warn!(
                    problems = rejection.violations().len(),
                    "settings submission rejected"
                );
                return Err(SubmitError::Rejected(rejection));
            }
        };

        self.store.save(&config)?;
        info!(services = config.service_count(), "settings saved, reloading");
        self.reload();
        Ok(())
    }

    /// Discard every pane and selector and start over from the store.
    pub fn reload(&mut self) {
        let config = self.store.load();
        self.session.rebuild(config);
    }

    pub fn shutdown(&mut self) {
        self.session.shutdown();
    }
}
