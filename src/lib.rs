//! Embeddable terminal display widgets.
//!
//! Three widgets meant to be composed by a host application that owns the
//! event loop and screen layout:
//! - [`Breadcrumbs`]: a horizontal trail with the last crumb highlighted.
//! - [`KeyList`]: aligned key/value pairs with optional grid alignment and
//!   column chunking.
//! - [`Table`]: a scrollable grid with fixed/min/flex column layout, a
//!   selection cursor, and deterministic re-rendering.
//!
//! # Embedding contract
//! Widgets implement [`Component`] and render to a `Vec<String>` line block at
//! a caller-supplied width; the host joins lines and positions the block
//! itself. Styling is injected as plain `Fn(&str) -> String` decorations that
//! preserve visible width, so this crate never owns color policy. No widget
//! performs terminal I/O.

pub mod config;

pub mod core;
pub mod widgets;

/// Embedding traits for host runtimes.
pub use crate::core::component::{Component, Focusable};
/// Structured input events delivered by the host.
pub use crate::core::input_event::InputEvent;

/// Built-in widgets.
pub use crate::widgets::{
    Breadcrumbs, BreadcrumbsTheme, Column, ColumnLayout, KeyList, KeyListOptions, KeyListTheme,
    MoveDirection, Row, ScrollState, Table, TableError, TableKeymap, TableOptions, TableStyles,
};

/// Environment-driven configuration.
pub use crate::config::EnvConfig;

/// ANSI-aware truncation helper.
pub use crate::core::text::utils::truncate_to_width;
/// Visible width helper that ignores ANSI control sequences.
pub use crate::core::text::width::visible_width;
