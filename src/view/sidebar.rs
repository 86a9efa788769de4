// Folder sidebar: catalog folders plus user shortcuts

use crate::app::Almacen;
use crate::catalog;
use crate::style;
use eframe::egui;
use std::cell::RefCell;

impl Almacen {
    pub(crate) fn render_sidebar(
        &mut self,
        ctx: &egui::Context,
        next_navigation: &RefCell<Option<String>>,
        deferred: &RefCell<Option<Box<dyn FnOnce(&mut Self)>>>,
    ) {
        let collapsed = self.sidebar_collapsed;
        let panel = if collapsed {
            egui::SidePanel::left("folder_sidebar")
                .resizable(false)
                .exact_width(style::SIDEBAR_COLLAPSED_WIDTH)
        } else {
            egui::SidePanel::left("folder_sidebar")
                .resizable(true)
                .default_width(self.config.ui.sidebar_width)
                .width_range(style::SIDEBAR_MIN..=style::SIDEBAR_MAX)
        };

        panel.show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let toggle = if collapsed { "\u{00bb}" } else { "\u{00ab}" };
                if ui.button(toggle).on_hover_text("Collapse sidebar").clicked() {
                    self.sidebar_collapsed = !self.sidebar_collapsed;
                }
            });
            ui.separator();

            if collapsed {
                for entry in catalog::entries() {
                    let is_active = entry.path == self.active_path;
                    let icon = if is_active {
                        egui::RichText::new(entry.icon).color(style::FOLDER_ACCENT)
                    } else {
                        egui::RichText::new(entry.icon)
                    };
                    if ui.button(icon).on_hover_text(entry.name).clicked() {
                        *next_navigation.borrow_mut() = Some(entry.path.to_string());
                    }
                }
                return;
            }

            egui::ScrollArea::vertical()
                .id_salt("sidebar_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Folders").strong());
                    ui.add_space(2.0);
                    for entry in catalog::entries() {
                        let is_active = entry.path == self.active_path;
                        let mut text = egui::RichText::new(format!("{}  {}", entry.icon, entry.name));
                        if is_active {
                            text = text.color(style::FOLDER_ACCENT);
                        }
                        let response =
                            style::truncated_label_with_sense(ui, text, egui::Sense::click());
                        if response.clicked() {
                            *next_navigation.borrow_mut() = Some(entry.path.to_string());
                        }
                    }

                    ui.add_space(8.0);
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("Shortcuts").strong());
                        if ui
                            .small_button("\u{ff0b}")
                            .on_hover_text("Add shortcut")
                            .clicked()
                        {
                            *deferred.borrow_mut() =
                                Some(Box::new(|app: &mut Self| app.open_add_shortcut_modal()));
                        }
                    });
                    ui.add_space(2.0);

                    if self.quick_links.is_empty() {
                        ui.label(egui::RichText::new("No shortcuts yet").weak());
                    }
                    for link in &self.quick_links {
                        let is_active = link.path == self.active_path;
                        ui.horizontal(|ui| {
                            let mut text = egui::RichText::new(format!("\u{f005}  {}", link.name));
                            if is_active {
                                text = text.color(style::FOLDER_ACCENT);
                            }
                            let response =
                                style::truncated_label_with_sense(ui, text, egui::Sense::click())
                                    .on_hover_text(&link.path);
                            if response.clicked() {
                                *next_navigation.borrow_mut() = Some(link.path.clone());
                            }

                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui
                                        .small_button("\u{2715}")
                                        .on_hover_text("Delete shortcut")
                                        .clicked()
                                    {
                                        let id = link.id.clone();
                                        *deferred.borrow_mut() = Some(Box::new(
                                            move |app: &mut Self| app.delete_shortcut(&id),
                                        ));
                                    }
                                },
                            );
                        });
                    }
                });
        });
    }
}
