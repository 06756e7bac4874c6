//! **tilerc**: a typed configuration document for a tiling window manager.
//!
//! The crate declares what a window-manager runtime should do (key and
//! mouse bindings, groups, colors, layouts, status bars, float rules,
//! behaviour flags and autostart commands) without doing any of it.  The
//! runtime (the *host*) loads the resolved [`config::Document`] and acts on
//! it.
//!
//! # Architecture
//!
//! * [`config::Config`] is the document as written; every section is
//!   optional and falls back to the values in [`defaults`].
//! * [`config::Config::resolve`] is pure: it appends the generated group
//!   keys, prepends the host float rules and checks every palette index and
//!   group name.  Calling it twice gives identical output.
//! * Side effects live behind two traits in [`traits`]:
//!   [`traits::Host`] runs bound [`command::Command`]s, and
//!   [`traits::Spawner`] runs shell lines for [`autostart`].
//! * [`dispatch::Dispatcher`] looks up the binding for an input event and
//!   forwards its command to the host.

pub mod autostart;
pub mod bar;
pub mod command;
pub mod config;
pub mod defaults;
pub mod dispatch;
pub mod group;
pub mod keys;
pub mod layout;
pub mod mouse;
pub mod palette;
pub mod params;
pub mod rules;
pub mod settings;
pub mod traits;
