//! Routes input events to the host through the resolved bindings.
//!
//! [`Dispatcher`] owns a [`Document`] and a [`Host`].  When the host reports
//! a key press or a button press, the dispatcher finds the binding and hands
//! its [`Command`] back to the host to run.  When several bindings share a
//! chord the one declared last wins, mirroring how the host registers them.

use crate::command::Command;
use crate::config::Document;
use crate::keys::{Key, ModifierSet};
use crate::mouse::{Button, MouseAction};
use crate::traits::Host;
use log::{debug, info};

/// Possible errors from the dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The host failed to run a command.
    #[error("host error running {command}: {message}")]
    Host { command: String, message: String },
}

/// Binds a resolved document to a host.
///
/// # Typical usage
///
/// ```ignore
/// let doc = Config::load(&path)?.resolve()?;
/// let dispatcher = Dispatcher::new(host, doc);
/// dispatcher.press_key(&mods([Modifier::Mod4]), "Return")?;
/// ```
pub struct Dispatcher<H: Host> {
    host: H,
    document: Document,
}

impl<H: Host> Dispatcher<H> {
    pub fn new(host: H, document: Document) -> Self {
        Self { host, document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// The binding that fires for `mods` + `key`, if any.
    pub fn key_binding(&self, mods: &ModifierSet, key: &str) -> Option<&Key> {
        self.document.keys.iter().rev().find(|k| k.matches(mods, key))
    }

    /// The mouse binding for `mods` + `button`, if any.
    pub fn mouse_binding(&self, mods: &ModifierSet, button: Button) -> Option<&MouseAction> {
        self.document
            .mouse
            .iter()
            .rev()
            .find(|m| m.mods() == mods && m.button() == button)
    }

    /// Handle a key press.  Returns `Ok(false)` if nothing is bound.
    pub fn press_key(&self, mods: &ModifierSet, key: &str) -> Result<bool, DispatchError> {
        let Some(binding) = self.key_binding(mods, key) else {
            debug!("no binding for {:?} {}", mods, key);
            return Ok(false);
        };
        info!("key {} -> {}", key, binding.command);
        self.run(&binding.command)?;
        Ok(true)
    }

    /// Handle a button press.
    ///
    /// A click binding runs its command; a drag binding runs its start
    /// command (if it has one) and waits for [`drag_motion`](Self::drag_motion).
    pub fn press_button(&self, mods: &ModifierSet, button: Button) -> Result<bool, DispatchError> {
        let Some(binding) = self.mouse_binding(mods, button) else {
            return Ok(false);
        };
        match binding {
            MouseAction::Click { command, .. } => self.run(command)?,
            MouseAction::Drag { start, .. } => {
                if let Some(start) = start {
                    self.run(start)?;
                }
            }
        }
        Ok(true)
    }

    /// Handle pointer motion while `button` is held.  Only drag bindings
    /// react.
    pub fn drag_motion(&self, mods: &ModifierSet, button: Button) -> Result<bool, DispatchError> {
        match self.mouse_binding(mods, button) {
            Some(MouseAction::Drag { command, .. }) => {
                self.run(command)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn run(&self, command: &Command) -> Result<(), DispatchError> {
        self.host.dispatch(command).map_err(|e| DispatchError::Host {
            command: command.to_string(),
            message: e.to_string(),
        })
    }
}
