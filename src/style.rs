use eframe::egui;

// --- Sizing ---
pub const ICON_SIZE: f32 = 14.0;
pub const ICON_COL_WIDTH: f32 = 26.0;
pub const ROW_HEIGHT: f32 = 24.0;

// --- Panel constraints ---
pub const SIDEBAR_MIN: f32 = 160.0;
pub const SIDEBAR_MAX: f32 = 360.0;
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 36.0;

// --- Modals ---
pub const MODAL_MIN_WIDTH: f32 = 300.0;
pub const MODAL_MAX_WIDTH: f32 = 480.0;
pub const MODAL_WIDTH_RATIO: f32 = 0.5;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

// --- Colors ---
pub const FOLDER_ACCENT: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);
pub const ENV_DEV_BADGE: egui::Color32 = egui::Color32::from_rgb(200, 160, 60);
pub const ENV_PROD_BADGE: egui::Color32 = egui::Color32::from_rgb(200, 90, 90);

// --- Helper functions ---

pub fn modal_width(ctx: &egui::Context) -> f32 {
    let width = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.width())
            .unwrap_or(800.0)
    });
    (width * MODAL_WIDTH_RATIO).clamp(MODAL_MIN_WIDTH, MODAL_MAX_WIDTH)
}

pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}
