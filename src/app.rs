use crate::browser::{BrowserConfig, BrowserFactory, BrowserWidget};
use crate::catalog;
use crate::config::Config;
use crate::handoff::HandoffChannel;
use crate::identity::{self, IdentityEvent, IdentityProvider};
use crate::shortcuts::{self, QuickLink, ShortcutStore};
use crate::style;
use eframe::egui;
use std::cell::RefCell;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone, Debug, PartialEq)]
pub enum AppMode {
    Normal,
    AddShortcut,
}

pub struct Almacen {
    pub(crate) config: Config,

    // Navigation
    pub(crate) active_path: String,

    // Shortcuts
    pub(crate) quick_links: Vec<QuickLink>,
    shortcut_store: Box<dyn ShortcutStore>,

    // Cross-launch handoff
    handoff: Box<dyn HandoffChannel>,

    // Embedded browser; recreated per path change, never mutated in place
    pub(crate) browser: Box<dyn BrowserWidget>,
    browser_factory: BrowserFactory,
    pub(crate) browser_generation: u64,

    // Identity
    identity: Option<Arc<dyn IdentityProvider>>,
    identity_rx: Option<Receiver<IdentityEvent>>,
    pub(crate) user_email: Option<String>,
    pub(crate) sign_out_requested: bool,

    // UI state
    pub(crate) mode: AppMode,
    pub(crate) sidebar_open: bool,
    pub(crate) sidebar_collapsed: bool,
    pub(crate) add_path_buffer: String,
    pub(crate) add_name_buffer: String,
    pub(crate) focus_input: bool,
    pub(crate) info_message: Option<(String, Instant)>,
    pub(crate) error_message: Option<(String, Instant)>,
}

impl Almacen {
    pub fn new(
        config: Config,
        shortcut_store: Box<dyn ShortcutStore>,
        handoff: Box<dyn HandoffChannel>,
        browser_factory: BrowserFactory,
    ) -> Self {
        let quick_links = shortcut_store.load();
        let browser = browser_factory(BrowserConfig {
            visible_prefixes: catalog::default_prefixes(),
            initial_path: None,
        });
        let sidebar_open = config.ui.sidebar_open;

        let mut app = Self {
            config,
            active_path: String::new(),
            quick_links,
            shortcut_store,
            handoff,
            browser,
            browser_factory,
            browser_generation: 0,
            identity: None,
            identity_rx: None,
            user_email: None,
            sign_out_requested: false,
            mode: AppMode::Normal,
            sidebar_open,
            sidebar_collapsed: false,
            add_path_buffer: String::new(),
            add_name_buffer: String::new(),
            focus_input: false,
            info_message: None,
            error_message: None,
        };
        app.initialize();
        app
    }

    /// Runs once per launch: drain the handoff slot and, when a path was
    /// pending, start on that folder. Best-effort; a miss is logged only.
    fn initialize(&mut self) {
        if let Some(path) = self.handoff.take_if_present() {
            let path = shortcuts::normalize_path(&path);
            tracing::info!(%path, "resuming handed-off navigation");
            self.select_folder(&path);
            if let Err(e) = self.browser.navigate_to(&path) {
                tracing::warn!(%path, error = %e, "handed-off navigation not applied");
            }
        }
    }

    /// Start the background identity fetch. Failure never surfaces in the UI.
    pub fn spawn_identity(&mut self, provider: Arc<dyn IdentityProvider>, ctx: egui::Context) {
        self.identity_rx = Some(identity::spawn_attribute_fetch(provider.clone(), ctx));
        self.identity = Some(provider);
    }

    // --- Navigation ---

    /// Switch the active folder ("" means no folder selected) and mount a
    /// fresh browser instance scoped to it.
    pub fn select_folder(&mut self, path: &str) {
        self.active_path = path.to_string();
        self.recreate_browser();
    }

    /// Prefixes passed to the embedded browser: the active folder alone, or
    /// the whole catalog when nothing is selected.
    pub fn visible_prefixes(&self) -> Vec<String> {
        if self.active_path.is_empty() {
            catalog::default_prefixes()
        } else {
            vec![self.active_path.clone()]
        }
    }

    fn recreate_browser(&mut self) {
        let initial_path = if self.active_path.is_empty() {
            None
        } else {
            Some(self.active_path.clone())
        };
        self.browser = (self.browser_factory)(BrowserConfig {
            visible_prefixes: self.visible_prefixes(),
            initial_path,
        });
        self.browser_generation += 1;
    }

    // --- Display names ---

    /// Catalog name first, then a matching quick link, then the last path
    /// segment, else the raw path.
    pub fn resolve_display_name(&self, path: &str) -> String {
        let normalized = shortcuts::normalize_path(path);
        if let Some(entry) = catalog::lookup_by_path(&normalized) {
            return entry.name.to_string();
        }
        if let Some(link) = self
            .quick_links
            .iter()
            .find(|l| l.path == normalized && !l.name.is_empty())
        {
            return link.name.clone();
        }
        match shortcuts::last_segment(&normalized) {
            Some(segment) => segment.to_string(),
            None => path.to_string(),
        }
    }

    /// Breadcrumb labels with the full path each segment navigates to.
    pub fn breadcrumb_segments(&self, path: &str) -> Vec<(String, String)> {
        let mut segments = Vec::new();
        let mut accumulated = String::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            accumulated.push_str(segment);
            accumulated.push('/');
            segments.push((self.resolve_display_name(&accumulated), accumulated.clone()));
        }
        segments
    }

    // --- Shortcuts ---

    pub fn add_shortcut(&mut self, path: &str, name: &str) {
        let path = path.trim();
        if path.is_empty() {
            self.set_error("Shortcut path is required".to_string());
            return;
        }
        let name = if name.trim().is_empty() {
            self.resolve_display_name(path)
        } else {
            name.trim().to_string()
        };

        match shortcuts::add_link(&self.quick_links, path, &name) {
            Ok(links) => {
                self.quick_links = links;
                self.persist_links();
                self.set_info(format!("Added shortcut \"{}\"", name));
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    pub fn add_current_as_shortcut(&mut self) {
        if self.active_path.is_empty() {
            self.set_error("No folder selected".to_string());
            return;
        }
        let path = self.active_path.clone();
        self.add_shortcut(&path, "");
    }

    pub fn delete_shortcut(&mut self, id: &str) {
        let remaining = shortcuts::remove_link(&self.quick_links, id);
        if remaining.len() == self.quick_links.len() {
            return;
        }
        self.quick_links = remaining;
        self.persist_links();
        self.set_info("Shortcut removed".to_string());
    }

    fn persist_links(&mut self) {
        if let Err(e) = self.shortcut_store.save(&self.quick_links) {
            tracing::error!(error = %e, "failed to persist shortcuts");
            self.set_error("Could not save shortcuts".to_string());
        }
    }

    // --- Modal flow ---

    pub(crate) fn open_add_shortcut_modal(&mut self) {
        self.add_path_buffer = self.active_path.clone();
        self.add_name_buffer.clear();
        self.mode = AppMode::AddShortcut;
        self.focus_input = true;
    }

    pub(crate) fn submit_add_shortcut(&mut self) {
        let path = self.add_path_buffer.trim().to_string();
        if path.is_empty() {
            self.set_error("Shortcut path is required".to_string());
            return;
        }
        let name = self.add_name_buffer.trim().to_string();
        self.mode = AppMode::Normal;
        self.add_path_buffer.clear();
        self.add_name_buffer.clear();
        self.add_shortcut(&path, &name);
    }

    pub(crate) fn cancel_add_shortcut(&mut self) {
        self.mode = AppMode::Normal;
        self.add_path_buffer.clear();
        self.add_name_buffer.clear();
    }

    // --- Sidebar ---

    pub(crate) fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        self.config.ui.sidebar_open = self.sidebar_open;
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "could not persist sidebar state");
        }
    }

    // --- Messages ---

    pub(crate) fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
        self.error_message = None;
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
        self.info_message = None;
    }

    pub(crate) fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
    }

    // --- Identity ---

    fn poll_identity(&mut self) {
        let Some(rx) = &self.identity_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(IdentityEvent::Attributes(attributes)) => {
                tracing::debug!(email = %attributes.email, "user attributes resolved");
                self.user_email = Some(attributes.email);
                self.identity_rx = None;
            }
            Ok(IdentityEvent::Failed(reason)) => {
                tracing::warn!(%reason, "could not fetch user attributes");
                self.identity_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.identity_rx = None;
            }
        }
    }

    fn perform_sign_out(&mut self, ctx: &egui::Context) {
        self.sign_out_requested = false;
        let Some(provider) = &self.identity else {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        };
        match provider.sign_out() {
            Ok(()) => {
                tracing::info!("signed out");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            Err(e) => {
                tracing::error!(error = %e, "sign-out failed");
                self.set_error("Sign-out failed".to_string());
            }
        }
    }

    // --- Input ---

    fn handle_input(&mut self, ctx: &egui::Context) {
        if self.mode == AppMode::AddShortcut {
            if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.submit_add_shortcut();
            }
            if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.cancel_add_shortcut();
            }
        }
    }
}

impl eframe::App for Almacen {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_identity();
        self.handle_input(ctx);
        self.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);

        // Deferred actions collected during rendering
        let next_navigation: RefCell<Option<String>> = RefCell::new(None);
        let deferred: RefCell<Option<Box<dyn FnOnce(&mut Self)>>> = RefCell::new(None);

        self.render_top_bar(ctx, &next_navigation, &deferred);
        self.render_status_bar(ctx);
        if self.sidebar_open {
            self.render_sidebar(ctx, &next_navigation, &deferred);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            // Scope widget state to the instance so a remount starts fresh
            ui.push_id(self.browser_generation, |ui| {
                self.browser.show(ui);
            });
        });

        self.render_add_shortcut_modal(ctx);

        if let Some(path) = next_navigation.into_inner() {
            self.select_folder(&path);
        }
        if let Some(action) = deferred.into_inner() {
            action(self);
        }
        if self.sign_out_requested {
            self.perform_sign_out(ctx);
        }
    }
}
