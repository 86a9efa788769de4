//! Session identity collaborator.
//!
//! Attribute fetch runs fire-and-forget on a background thread; the result
//! arrives over a channel and a repaint is requested. A failed fetch is a
//! diagnostic, never a user-facing error.

use eframe::egui;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct UserAttributes {
    pub email: String,
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity attributes unavailable: {0}")]
    Unavailable(String),

    #[error("sign-out failed: {0}")]
    SignOut(String),
}

pub trait IdentityProvider: Send + Sync {
    fn fetch_attributes(&self) -> Result<UserAttributes, IdentityError>;
    fn sign_out(&self) -> Result<(), IdentityError>;
}

pub enum IdentityEvent {
    Attributes(UserAttributes),
    Failed(String),
}

/// Kick off the attribute fetch and hand back the receiving end.
pub fn spawn_attribute_fetch(
    provider: Arc<dyn IdentityProvider>,
    ctx: egui::Context,
) -> Receiver<IdentityEvent> {
    let (tx, rx) = channel();

    thread::spawn(move || {
        let event = match provider.fetch_attributes() {
            Ok(attributes) => IdentityEvent::Attributes(attributes),
            Err(e) => IdentityEvent::Failed(e.to_string()),
        };
        let _ = tx.send(event);
        ctx.request_repaint();
    });

    rx
}

/// Provider backed by the process environment. The deployment wires in the
/// real session provider; this one keeps local runs working.
pub struct EnvIdentity;

impl IdentityProvider for EnvIdentity {
    fn fetch_attributes(&self) -> Result<UserAttributes, IdentityError> {
        match std::env::var("ALMACEN_USER_EMAIL") {
            Ok(email) if !email.trim().is_empty() => Ok(UserAttributes {
                email: email.trim().to_string(),
            }),
            Ok(_) => Err(IdentityError::Unavailable(
                "ALMACEN_USER_EMAIL is empty".to_string(),
            )),
            Err(_) => Err(IdentityError::Unavailable(
                "ALMACEN_USER_EMAIL is not set".to_string(),
            )),
        }
    }

    fn sign_out(&self) -> Result<(), IdentityError> {
        tracing::info!("session sign-out requested");
        Ok(())
    }
}
