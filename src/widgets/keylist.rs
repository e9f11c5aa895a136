//! Key/value list widget.
//!
//! Stateless string formatting: `[key, value]` pairs stacked vertically, with
//! an optional separator after the key, optional grid alignment (one shared
//! key-column width per set), and optional chunking into side-by-side column
//! sets of at most `max_rows` entries.

use crate::config::EnvConfig;
use crate::core::component::Component;
use crate::core::text::utils::{pad_to_width, truncate_to_width};
use crate::core::text::width::visible_width;

pub struct KeyListTheme {
    pub key: Box<dyn Fn(&str) -> String>,
    pub value: Box<dyn Fn(&str) -> String>,
}

impl KeyListTheme {
    /// Identity decorations.
    pub fn plain() -> Self {
        Self {
            key: Box::new(str::to_string),
            value: Box::new(str::to_string),
        }
    }
}

impl Default for KeyListTheme {
    /// Bold keys, unless `NO_COLOR` is set.
    fn default() -> Self {
        if EnvConfig::from_env().no_color {
            return Self::plain();
        }
        Self {
            key: Box::new(|text| format!("\x1b[1m{text}\x1b[22m")),
            value: Box::new(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyListOptions {
    /// Text appended to each key, e.g. ":".
    pub separator: String,
    /// Align all keys in a set to one shared column width.
    pub grid: bool,
    /// Chunk entries into side-by-side sets of at most this many rows;
    /// 0 renders one vertical set.
    pub max_rows: usize,
}

pub struct KeyList {
    items: Vec<(String, String)>,
    theme: KeyListTheme,
    options: KeyListOptions,
}

impl KeyList {
    pub fn new(items: Vec<(String, String)>, theme: KeyListTheme, options: KeyListOptions) -> Self {
        Self {
            items,
            theme,
            options,
        }
    }

    pub fn set_items(&mut self, items: Vec<(String, String)>) {
        self.items = items;
    }

    fn render_set(&self, items: &[(String, String)]) -> Vec<String> {
        let separator_width = visible_width(&self.options.separator);
        let grid_key_width = items
            .iter()
            .map(|(key, _)| visible_width(key) + separator_width + 1)
            .max()
            .unwrap_or(0);

        items
            .iter()
            .map(|(key, value)| {
                let key_width = if self.options.grid {
                    grid_key_width
                } else {
                    visible_width(key) + separator_width + 1
                };
                let key_cell =
                    pad_to_width(&format!("{key}{}", self.options.separator), key_width);
                format!("{}{}", (self.theme.key)(&key_cell), (self.theme.value)(value))
            })
            .collect()
    }
}

impl Component for KeyList {
    fn render(&mut self, width: usize) -> Vec<String> {
        if self.items.is_empty() {
            return Vec::new();
        }

        let sets: Vec<Vec<String>> = if self.options.max_rows > 0 {
            self.items
                .chunks(self.options.max_rows)
                .map(|chunk| self.render_set(chunk))
                .collect()
        } else {
            vec![self.render_set(&self.items)]
        };

        join_horizontal(&sets)
            .into_iter()
            .map(|line| truncate_to_width(&line, width, "", false))
            .collect()
    }
}

/// Join line blocks side by side, padding each block to its own width and
/// separating blocks with one space.
fn join_horizontal(sets: &[Vec<String>]) -> Vec<String> {
    if sets.len() == 1 {
        return sets[0].clone();
    }

    let set_widths: Vec<usize> = sets
        .iter()
        .map(|set| set.iter().map(|line| visible_width(line)).max().unwrap_or(0))
        .collect();
    let rows = sets.iter().map(Vec::len).max().unwrap_or(0);

    (0..rows)
        .map(|row| {
            let mut line = String::new();
            for (set, set_width) in sets.iter().zip(&set_widths) {
                if !line.is_empty() {
                    line.push(' ');
                }
                let cell = set.get(row).map(String::as_str).unwrap_or("");
                line.push_str(&pad_to_width(cell, *set_width));
            }
            line.trim_end().to_string()
        })
        .collect()
}
