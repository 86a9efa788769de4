mod app;
mod browser;
mod catalog;
mod config;
mod handoff;
mod identity;
mod shortcuts;
mod style;
mod view;

use app::Almacen;
use browser::{BrowserFactory, OfflineBrowser};
use config::Config;
use eframe::egui;
use handoff::{FileHandoff, HandoffChannel};
use identity::EnvIdentity;
use shortcuts::{JsonShortcutStore, ShortcutStore};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    init_tracing();

    let config = Config::load();

    let handoff: Box<dyn HandoffChannel> = Box::new(FileHandoff::at_default_location());
    if let Some(path) = goto_arg() {
        // Deep link from the command line, relayed through the handoff slot
        handoff.set(&path);
    }

    let store: Box<dyn ShortcutStore> = match JsonShortcutStore::at_default_location() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "shortcut storage unavailable, shortcuts will not persist");
            Box::new(NullStore)
        }
    };

    let factory: BrowserFactory = Box::new(|cfg| Box::new(OfflineBrowser::new(cfg)));

    let title = format!("Almac\u{e9}n \u{2014} {}", config.bucket.name);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        "almacen",
        options,
        Box::new(move |cc| {
            let mut app = Almacen::new(config, store, handoff, factory);
            app.spawn_identity(Arc::new(EnvIdentity), cc.egui_ctx.clone());
            Ok(Box::new(app))
        }),
    )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// `--goto <path>` pre-navigates the launch to a folder.
fn goto_arg() -> Option<String> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--goto" {
            return args.next();
        }
    }
    None
}

/// Store used when no config directory exists; loads defaults, saves nowhere.
struct NullStore;

impl ShortcutStore for NullStore {
    fn load(&self) -> Vec<shortcuts::QuickLink> {
        shortcuts::default_links()
    }

    fn save(&self, _links: &[shortcuts::QuickLink]) -> Result<(), shortcuts::ShortcutError> {
        Ok(())
    }
}
