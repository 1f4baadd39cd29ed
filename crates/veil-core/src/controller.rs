//! Front-end controller
//!
//! The central state container: session registry, proxy configuration
//! slot, settings snapshot, and notice channel all live here, and every
//! chrome gesture funnels through `handle`. State is shared behind
//! `Arc<RwLock<...>>`; locks are scoped tightly and never held across a
//! call back into the controller, so handler-triggered follow-up events
//! (close, then activate, then sync) re-enter safely.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use veil_navigation::{AddressResolver, NavDirection, UiCommand};
use veil_proxy::ProxyConfig;
use veil_storage::Database;
use veil_tabs::SessionRegistry;

use crate::config::Config;
use crate::error::CoreError;
use crate::export::{NoopExporter, PageExporter};
use crate::notice::Notice;
use crate::settings::Settings;
use crate::sync;
use crate::theme::Theme;
use crate::Result;

/// One tab-strip entry, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabSummary {
    pub id: String,
    pub title: String,
    pub active: bool,
}

pub struct Controller {
    config: Config,
    db: Database,
    registry: Arc<RwLock<SessionRegistry>>,
    resolver: Arc<RwLock<AddressResolver>>,
    proxy: Arc<RwLock<Option<ProxyConfig>>>,
    settings: Arc<RwLock<Settings>>,
    notice: Arc<RwLock<Option<Notice>>>,
    exporter: Arc<dyn PageExporter>,
}

impl Controller {
    /// Open the settings store at the configured path and load the
    /// persisted snapshot.
    pub fn new(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        Self::with_database(config, db)
    }

    /// Build a controller over an already-open settings store.
    pub fn with_database(config: Config, db: Database) -> Result<Self> {
        let settings = Settings::load(&db)?;
        let resolver = AddressResolver::with_search_engine(config.search_engine.clone());

        tracing::info!(theme = %settings.selected_theme, "Controller initialized");

        Ok(Self {
            config,
            db,
            registry: Arc::new(RwLock::new(SessionRegistry::new())),
            resolver: Arc::new(RwLock::new(resolver)),
            proxy: Arc::new(RwLock::new(None)),
            settings: Arc::new(RwLock::new(settings)),
            notice: Arc::new(RwLock::new(None)),
            exporter: Arc::new(NoopExporter),
        })
    }

    /// Install the shell's exporter for the about:blank / blob actions.
    pub fn with_exporter(mut self, exporter: Arc<dyn PageExporter>) -> Self {
        self.exporter = exporter;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // === Proxy configuration ===

    pub fn set_proxy_config(&self, config: ProxyConfig) {
        tracing::info!(prefix = %config.prefix(), "Proxy configuration loaded");
        *self.proxy.write() = Some(config);
    }

    pub fn proxy_config(&self) -> Option<ProxyConfig> {
        self.proxy.read().clone()
    }

    // === Command dispatch ===

    /// Dispatch one chrome gesture. Errors never escape the event path:
    /// they are logged, posted as a transient notice, and the triggering
    /// action is dropped with no state change.
    ///
    /// Returns the refreshed address-bar text when the command warrants a
    /// sync.
    pub fn handle(&self, command: UiCommand) -> Option<String> {
        tracing::debug!(command = command.name(), "Dispatching command");

        let result = match command {
            UiCommand::Submit(input) => self.submit(&input).map(Some),
            UiCommand::NewTab => Ok(Some(self.new_tab())),
            UiCommand::ActivateTab(id) => Ok(Some(self.activate_tab(&id))),
            UiCommand::CloseTab(id) => Ok(Some(self.close_tab(&id))),
            UiCommand::Navigate(direction) => {
                self.navigate(direction);
                Ok(None)
            }
        };

        match result {
            Ok(display) => display,
            Err(e) => {
                self.report_error(&e);
                None
            }
        }
    }

    /// Address bar submission: resolve, encode, and hand the routed path
    /// to the active session's surface. Validation happens before any
    /// mutation, so a failed submit leaves the registry untouched.
    pub fn submit(&self, input: &str) -> Result<String> {
        let proxy = self.proxy.read().clone().ok_or(CoreError::ConfigMissing)?;
        let url = self.resolver.read().resolve(input)?;

        // The auto-export settings divert the submission entirely.
        let (auto_about_blank, auto_blob) = {
            let settings = self.settings.read();
            (settings.auto_about_blank, settings.auto_blob)
        };

        if auto_about_blank {
            self.exporter.open_about_blank()?;
            return Ok(self.address_display());
        }

        if auto_blob {
            self.exporter.open_blob()?;
            return Ok(self.address_display());
        }

        let routed = proxy.to_routed(&url);

        {
            let mut registry = self.registry.write();
            if registry.is_empty() {
                registry.create();
            }

            let session = registry
                .active_session_mut()
                .ok_or(CoreError::SurfaceNotFound)?;
            session.navigate(&url, routed)?;

            tracing::info!(session_id = %session.id, url = %url, "Navigated active session");
        }

        Ok(self.address_display())
    }

    // === Tab strip ===

    pub fn new_tab(&self) -> String {
        {
            let mut registry = self.registry.write();
            registry.create();
        }
        self.address_display()
    }

    pub fn activate_tab(&self, id: &str) -> String {
        self.registry.write().activate(id);
        self.address_display()
    }

    pub fn close_tab(&self, id: &str) -> String {
        self.registry.write().close(id);
        self.address_display()
    }

    pub fn tab_strip(&self) -> Vec<TabSummary> {
        let registry = self.registry.read();
        let active_id = registry.active_id().map(str::to_string);

        registry
            .iter()
            .map(|s| TabSummary {
                id: s.id.clone(),
                title: s.title.clone(),
                active: Some(s.id.as_str()) == active_id.as_deref(),
            })
            .collect()
    }

    pub fn session_count(&self) -> usize {
        self.registry.read().len()
    }

    pub fn active_session_id(&self) -> Option<String> {
        self.registry.read().active_id().map(str::to_string)
    }

    pub fn active_routed_path(&self) -> Option<String> {
        self.registry
            .read()
            .active_session()
            .and_then(|s| s.routed_path().map(str::to_string))
    }

    // === Navigation bridge ===

    /// Back/forward/reload on the active session's surface. Fire and
    /// forget: inapplicable requests are logged and dropped, never
    /// surfaced, so the chrome stays responsive whatever state the
    /// surface is in.
    pub fn navigate(&self, direction: NavDirection) {
        let mut registry = self.registry.write();

        let Some(session) = registry.active_session_mut() else {
            tracing::debug!("Navigation ignored: no active session");
            return;
        };

        match direction {
            NavDirection::Back => {
                if session.surface.history_depth() <= 1 || !session.surface.history_back() {
                    tracing::debug!(session_id = %session.id, "Back ignored at history edge");
                }
            }
            NavDirection::Forward => {
                if session.surface.history_depth() <= 1 || !session.surface.history_forward() {
                    tracing::debug!(session_id = %session.id, "Forward ignored at history edge");
                }
            }
            NavDirection::Reload => {
                if !session.surface.reload() {
                    tracing::debug!(session_id = %session.id, "Reload ignored: nothing loaded");
                }
            }
        }
    }

    // === Address bar ===

    pub fn address_display(&self) -> String {
        let registry = self.registry.read();
        let proxy = self.proxy.read();
        sync::compute_display(registry.active_session(), proxy.as_ref())
    }

    // === Notices ===

    fn report_error(&self, error: &CoreError) {
        tracing::warn!(error = %error, "Command failed");
        *self.notice.write() = Some(Notice::new(user_message(error), Some(error.to_string())));
    }

    /// The visible notice, if one was posted and has not yet expired.
    pub fn current_notice(&self) -> Option<Notice> {
        let now = Utc::now();
        let mut slot = self.notice.write();

        if slot.as_ref().is_some_and(|n| n.is_expired(now)) {
            *slot = None;
        }

        slot.clone()
    }

    // === Settings ===

    pub fn settings(&self) -> Settings {
        self.settings.read().clone()
    }

    pub fn save_settings(&self, settings: Settings) -> Result<()> {
        settings.save(&self.db)?;
        *self.settings.write() = settings;
        Ok(())
    }

    /// Select a theme by id. Unknown ids are a no-op, mirroring the
    /// settings screen behavior.
    pub fn apply_theme(&self, theme_id: &str) -> Result<Option<Theme>> {
        let Some(theme) = Theme::get(theme_id) else {
            return Ok(None);
        };

        self.db.set_setting(crate::settings::KEY_THEME, &theme.id)?;
        self.settings.write().selected_theme = theme.id.clone();

        Ok(Some(theme))
    }

    pub fn reset_settings(&self) -> Result<()> {
        self.db.clear_settings()?;
        *self.settings.write() = Settings::default();
        Ok(())
    }

    pub fn search_template(&self) -> String {
        self.resolver.read().search_template().to_string()
    }

    pub fn set_search_template(&self, template: String) {
        self.resolver.write().set_search_engine(template);
    }
}

impl Clone for Controller {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            db: self.db.clone(),
            registry: Arc::clone(&self.registry),
            resolver: Arc::clone(&self.resolver),
            proxy: Arc::clone(&self.proxy),
            settings: Arc::clone(&self.settings),
            notice: Arc::clone(&self.notice),
            exporter: Arc::clone(&self.exporter),
        }
    }
}

fn user_message(error: &CoreError) -> String {
    match error {
        CoreError::ConfigMissing => "Proxy configuration not loaded.".to_string(),
        CoreError::Navigation(_) => "Invalid URL or query.".to_string(),
        _ => "Error processing request.".to_string(),
    }
}
