// Top bar (bucket identity, breadcrumb, session controls) and status bar

use crate::app::Almacen;
use crate::style;
use eframe::egui;
use std::cell::RefCell;

impl Almacen {
    pub(crate) fn render_top_bar(
        &mut self,
        ctx: &egui::Context,
        next_navigation: &RefCell<Option<String>>,
        deferred: &RefCell<Option<Box<dyn FnOnce(&mut Self)>>>,
    ) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("\u{2630}").on_hover_text("Toggle sidebar").clicked() {
                    *deferred.borrow_mut() = Some(Box::new(|app: &mut Self| app.toggle_sidebar()));
                }

                ui.label(egui::RichText::new(&self.config.bucket.name).strong());
                if let Some(label) = self.config.environment_label() {
                    let color = if label == "Production" {
                        style::ENV_PROD_BADGE
                    } else {
                        style::ENV_DEV_BADGE
                    };
                    ui.label(egui::RichText::new(label).color(color).small());
                }
                ui.separator();

                if ui
                    .selectable_label(self.active_path.is_empty(), "All folders")
                    .clicked()
                {
                    *next_navigation.borrow_mut() = Some(String::new());
                }
                for (label, path) in self.breadcrumb_segments(&self.active_path) {
                    ui.label(egui::RichText::new("\u{203a}").weak());
                    let is_active = path == self.active_path;
                    if ui.selectable_label(is_active, label).clicked() && !is_active {
                        *next_navigation.borrow_mut() = Some(path);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Sign out").clicked() {
                        self.sign_out_requested = true;
                    }
                    if let Some(email) = &self.user_email {
                        ui.label(egui::RichText::new(email).weak());
                    }
                    if !self.active_path.is_empty() {
                        if ui
                            .button("\u{f005}")
                            .on_hover_text("Add current folder to shortcuts")
                            .clicked()
                        {
                            *deferred.borrow_mut() =
                                Some(Box::new(|app: &mut Self| app.add_current_as_shortcut()));
                        }
                        if ui
                            .button("\u{f08e}")
                            .on_hover_text("Open in web console")
                            .clicked()
                        {
                            let url = self.config.console_url(&self.active_path);
                            if let Err(e) = open::that(&url) {
                                tracing::warn!(error = %e, "could not open web console");
                            }
                        }
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let title = if self.active_path.is_empty() {
                    "All folders".to_string()
                } else {
                    self.resolve_display_name(&self.active_path)
                };
                ui.label(format!(
                    "{} | {} shortcut(s)",
                    title,
                    self.quick_links.len()
                ));

                let position = self.browser.current_path();
                if !position.is_empty() && position != self.active_path {
                    ui.label(egui::RichText::new(position).weak());
                }

                if let Some((msg, _)) = &self.error_message {
                    ui.colored_label(egui::Color32::RED, format!(" | {}", msg));
                } else if let Some((msg, _)) = &self.info_message {
                    ui.colored_label(egui::Color32::LIGHT_GREEN, format!(" | {}", msg));
                }
            });
        });
    }
}
