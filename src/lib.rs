//! Portfolio GUI Library
//!
//! A bilingual (French/English) personal portfolio. The headless core keeps
//! one shared display locale that every page observes; the `gui` feature adds
//! the GPUI desktop front end.

pub mod app;
pub mod content;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod locale;
pub mod logging;
pub mod settings;
pub mod state;

#[cfg(feature = "gui")]
pub mod components;
#[cfg(feature = "gui")]
pub mod features;
#[cfg(feature = "gui")]
pub mod theme;
