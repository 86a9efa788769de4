// Modal rendering (add-shortcut form)

use crate::app::{Almacen, AppMode};
use crate::style;
use eframe::egui;

impl Almacen {
    pub(crate) fn render_add_shortcut_modal(&mut self, ctx: &egui::Context) {
        if self.mode != AppMode::AddShortcut {
            return;
        }

        let mut submit = false;
        let mut cancel = false;

        egui::Window::new("Add shortcut")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.label("Folder path:");
                let response = ui.text_edit_singleline(&mut self.add_path_buffer);
                if self.focus_input {
                    response.request_focus();
                    self.focus_input = false;
                }

                ui.add_space(5.0);
                ui.label("Name (optional, defaults to the folder's display name):");
                ui.text_edit_singleline(&mut self.add_name_buffer);

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
                ui.label(
                    egui::RichText::new("Press Enter to add, Esc to cancel")
                        .weak()
                        .small(),
                );
            });

        if submit {
            self.submit_add_shortcut();
        } else if cancel {
            self.cancel_add_shortcut();
        }
    }
}
