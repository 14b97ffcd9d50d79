//! Random inspirational quote widget.
//!
//! Quotes come from an ordered [`chain::FallbackChain`] of providers that
//! always ends in a built-in static list, so a fetch never fails. The
//! terminal front end lives in [`ui`]; everything it draws goes through the
//! [`ui::Renderer`] capability so the core runs headless in tests.

pub mod args;
pub mod chain;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod provider;
pub mod quote;
pub mod share;
pub mod ui;
