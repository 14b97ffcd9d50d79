//! User interface: the widget state machine, the render boundary and the
//! terminal front end built on top of it.

pub mod app;
pub mod controller;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod plain;
pub mod render;
pub mod renderer;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod toast;
pub mod view;
pub mod widget;

pub use controller::{QuoteWidget, SessionToken, FETCH_ERROR_MESSAGE};
pub use renderer::{RecordingRenderer, RenderCall, Renderer};
