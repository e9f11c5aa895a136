//! Embedding traits, input events, and text helpers shared by the widgets.

pub mod component;
pub mod input_event;
pub mod text;
