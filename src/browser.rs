//! Contract for the embedded storage browser widget.
//!
//! The widget is an external component: it owns object listing, upload and
//! download. This module only defines the configuration it is created with
//! and the operations the rest of the application relies on. A mounted
//! widget is never reconfigured in place; every change of visible prefixes
//! requires a fresh instance from the factory.

use crate::shortcuts::normalize_path;
use crate::style;
use eframe::egui;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct BrowserConfig {
    /// Prefixes the widget is allowed to show.
    pub visible_prefixes: Vec<String>,
    /// Folder the widget opens on, applied only at creation.
    pub initial_path: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum BrowserError {
    #[error("path {0:?} is outside the visible prefix scope")]
    OutOfScope(String),
}

/// The embedded browser, consumed as an opaque capability.
///
/// `navigate_to` is the explicit navigation operation of the contract; a
/// failed navigation leaves the widget where it was.
pub trait BrowserWidget {
    fn show(&mut self, ui: &mut egui::Ui);
    fn navigate_to(&mut self, path: &str) -> Result<(), BrowserError>;
    fn current_path(&self) -> &str;
}

/// Creates one widget instance per configuration.
pub type BrowserFactory = Box<dyn Fn(BrowserConfig) -> Box<dyn BrowserWidget>>;

/// Stand-in widget used when the real browser component is not linked in.
/// Renders the configured scope so the shell around it stays usable.
pub struct OfflineBrowser {
    config: BrowserConfig,
    current_path: String,
}

impl OfflineBrowser {
    pub fn new(config: BrowserConfig) -> Self {
        let current_path = config.initial_path.clone().unwrap_or_default();
        Self {
            config,
            current_path,
        }
    }

    fn in_scope(&self, path: &str) -> bool {
        self.config
            .visible_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

impl BrowserWidget for OfflineBrowser {
    fn show(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        if self.current_path.is_empty() {
            ui.heading("All folders");
        } else {
            ui.heading(&self.current_path);
        }
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("browser_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                use egui_extras::{Column, TableBuilder};
                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(false)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::auto().at_least(style::ICON_COL_WIDTH))
                    .column(Column::remainder().clip(true))
                    .body(|body| {
                        body.rows(
                            style::ROW_HEIGHT,
                            self.config.visible_prefixes.len(),
                            |mut row| {
                                let prefix = &self.config.visible_prefixes[row.index()];
                                row.col(|ui| {
                                    ui.label(
                                        egui::RichText::new("\u{f07b}")
                                            .size(style::ICON_SIZE)
                                            .color(style::FOLDER_ACCENT),
                                    );
                                });
                                row.col(|ui| {
                                    ui.label(prefix);
                                });
                            },
                        );
                    });

                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(
                        "Object listing, upload and download are provided by the \
                         storage browser component.",
                    )
                    .weak(),
                );
            });
    }

    fn navigate_to(&mut self, path: &str) -> Result<(), BrowserError> {
        let normalized = normalize_path(path);
        if !self.in_scope(&normalized) {
            return Err(BrowserError::OutOfScope(normalized));
        }
        self.current_path = normalized;
        Ok(())
    }

    fn current_path(&self) -> &str {
        &self.current_path
    }
}
