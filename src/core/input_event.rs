//! Structured input events delivered by the host.
//!
//! The host event loop parses raw terminal input; widgets only see normalized
//! events. `key_id` carries the usual lowercase identifiers ("up", "down",
//! "enter", single characters like "j"), matching what widget keymaps store.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key { key_id: String },
    Resize { columns: u16, rows: u16 },
}

impl InputEvent {
    pub fn key(key_id: impl Into<String>) -> Self {
        InputEvent::Key {
            key_id: key_id.into(),
        }
    }

    pub fn resize(columns: u16, rows: u16) -> Self {
        InputEvent::Resize { columns, rows }
    }
}
