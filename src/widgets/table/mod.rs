//! Table grid widget.
//!
//! The widget owns the mutable table state and splits the hard parts into two
//! leaf modules: [`layout`] resolves fixed/min/flex column widths inside the
//! viewport width, and [`scroll`] keeps the selection cursor, scroll offset,
//! and visible-row bounds mutually consistent. Rendering composes header and
//! row lines from those two on demand and is idempotent for unchanged state.

pub mod layout;
pub mod scroll;

use std::fmt;

use crate::config::EnvConfig;
use crate::core::component::{Component, Focusable};
use crate::core::input_event::InputEvent;
use crate::core::text::utils::{decorate_full_width, truncate_to_width};

pub use layout::{resolve_widths, Column, ColumnLayout};
pub use scroll::ScrollState;

/// Decoration applied to a piece of rendered text. Expected to preserve the
/// visible width of its input.
pub type StyleFn = Box<dyn Fn(&str) -> String>;

/// Decorations for the three kinds of rendered text.
pub struct TableStyles {
    pub header: StyleFn,
    pub cell: StyleFn,
    pub selected: StyleFn,
}

impl TableStyles {
    /// Identity decorations.
    pub fn plain() -> Self {
        Self {
            header: Box::new(str::to_string),
            cell: Box::new(str::to_string),
            selected: Box::new(str::to_string),
        }
    }

    fn ansi() -> Self {
        Self {
            header: Box::new(|text| format!("\x1b[1m{text}\x1b[22m")),
            cell: Box::new(str::to_string),
            selected: Box::new(|text| format!("\x1b[7m{text}\x1b[27m")),
        }
    }
}

impl Default for TableStyles {
    /// Bold header and inverse selection, unless `NO_COLOR` is set.
    fn default() -> Self {
        if EnvConfig::from_env().no_color {
            Self::plain()
        } else {
            Self::ansi()
        }
    }
}

/// Direction for [`Table::move_selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Key identifiers that drive the selection cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableKeymap {
    pub up: Vec<String>,
    pub down: Vec<String>,
}

impl Default for TableKeymap {
    fn default() -> Self {
        Self {
            up: vec!["up".to_string(), "k".to_string()],
            down: vec!["down".to_string(), "j".to_string()],
        }
    }
}

impl TableKeymap {
    pub fn direction_for(&self, key_id: &str) -> Option<MoveDirection> {
        if self.up.iter().any(|key| key == key_id) {
            return Some(MoveDirection::Up);
        }
        if self.down.iter().any(|key| key == key_id) {
            return Some(MoveDirection::Down);
        }
        None
    }
}

/// One table row: cell values aligned positionally with the declared columns,
/// hidden columns included. Rows carry no identity beyond their position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Errors reported by the fallible table surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A row's cell count does not match the declared column count.
    ArityMismatch {
        row: usize,
        cells: usize,
        columns: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ArityMismatch {
                row,
                cells,
                columns,
            } => write!(
                f,
                "row/column arity mismatch: row {row} has {cells} cells but {columns} columns are declared"
            ),
        }
    }
}

impl std::error::Error for TableError {}

/// Construction options: every recognized knob with explicit defaults.
pub struct TableOptions {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub focused: bool,
    pub keymap: TableKeymap,
    pub styles: TableStyles,
    /// Marker appended to truncated cell text.
    pub ellipsis: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            focused: false,
            keymap: TableKeymap::default(),
            styles: TableStyles::default(),
            ellipsis: EnvConfig::from_env().default_ellipsis().to_string(),
        }
    }
}

/// Scrollable tabular grid with a selection cursor.
///
/// The host calls [`Table::resize`] on first layout and on every terminal
/// resize; the header consumes the first line of the given height and the
/// remainder is the row viewport.
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
    scroll: ScrollState,
    width: usize,
    height: usize,
    focused: bool,
    keymap: TableKeymap,
    styles: TableStyles,
    ellipsis: String,
    /// Cached per-pass column layout, reused between header and row rendering.
    layout: Option<ColumnLayout>,
}

impl Table {
    pub fn new(options: TableOptions) -> Result<Self, TableError> {
        check_arity(&options.columns, &options.rows)?;
        let row_count = options.rows.len();
        Ok(Self {
            columns: options.columns,
            rows: options.rows,
            scroll: ScrollState::new(row_count, 0),
            width: 0,
            height: 0,
            focused: options.focused,
            keymap: options.keymap,
            styles: options.styles,
            ellipsis: options.ellipsis,
            layout: None,
        })
    }

    /// New terminal area for the grid, in character cells.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.scroll.set_viewport_rows(height.saturating_sub(1));
        self.layout = None;
    }

    /// Move the selection cursor `count` rows in `direction`, clamped to the
    /// row bounds. A no-op when the row set is empty.
    pub fn move_selection(&mut self, direction: MoveDirection, count: usize) {
        let count = isize::try_from(count).unwrap_or(isize::MAX);
        let delta = match direction {
            MoveDirection::Up => -count,
            MoveDirection::Down => count,
        };
        self.scroll.move_cursor(delta);
    }

    /// Replace the row set wholesale, re-clamping cursor and offset.
    pub fn replace_rows(&mut self, rows: Vec<Row>) -> Result<(), TableError> {
        check_arity(&self.columns, &rows)?;
        self.rows = rows;
        self.scroll.set_row_count(self.rows.len());
        Ok(())
    }

    /// Replace the column set wholesale. Existing rows must match the new
    /// column arity.
    pub fn replace_columns(&mut self, columns: Vec<Column>) -> Result<(), TableError> {
        check_arity(&columns, &self.rows)?;
        self.columns = columns;
        self.layout = None;
        Ok(())
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The currently selected row, or `None` when the row set is empty.
    pub fn selected_row(&self) -> Option<&Row> {
        self.rows.get(self.scroll.cursor())
    }

    pub fn cursor(&self) -> usize {
        self.scroll.cursor()
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    /// Render the header plus the rows scrolled into view. Every line is
    /// exactly `width` cells wide; an empty row set yields a header-only
    /// block, and a zero height yields nothing.
    pub fn view(&mut self) -> Vec<String> {
        if self.height == 0 {
            return Vec::new();
        }
        if self.layout.is_none() {
            self.layout = Some(resolve_widths(&self.columns, self.width));
        }
        let Some(layout) = &self.layout else {
            return Vec::new();
        };

        let mut lines = Vec::with_capacity(self.scroll.visible_range().len() + 1);
        lines.push(render_header(
            &self.columns,
            layout,
            &self.styles,
            self.width,
            &self.ellipsis,
        ));

        let cursor = self.scroll.cursor();
        for idx in self.scroll.visible_range() {
            let Some(row) = self.rows.get(idx) else {
                break;
            };
            let selected = self.focused && idx == cursor;
            lines.push(render_row(
                &self.columns,
                layout,
                row,
                selected,
                &self.styles,
                self.width,
                &self.ellipsis,
            ));
        }

        lines
    }
}

impl Component for Table {
    fn render(&mut self, width: usize) -> Vec<String> {
        if width != self.width {
            self.resize(width, self.height);
        }
        self.view()
    }

    fn set_viewport_size(&mut self, cols: usize, rows: usize) {
        self.resize(cols, rows);
    }

    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Key { key_id } => {
                if let Some(direction) = self.keymap.direction_for(key_id) {
                    self.move_selection(direction, 1);
                }
            }
            InputEvent::Resize { columns, rows } => {
                self.resize(usize::from(*columns), usize::from(*rows));
            }
        }
    }

    fn invalidate(&mut self) {
        self.layout = None;
    }

    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        Some(self)
    }
}

impl Focusable for Table {
    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

fn check_arity(columns: &[Column], rows: &[Row]) -> Result<(), TableError> {
    for (idx, row) in rows.iter().enumerate() {
        if row.len() != columns.len() {
            return Err(TableError::ArityMismatch {
                row: idx,
                cells: row.len(),
                columns: columns.len(),
            });
        }
    }
    Ok(())
}

fn render_header(
    columns: &[Column],
    layout: &ColumnLayout,
    styles: &TableStyles,
    width: usize,
    ellipsis: &str,
) -> String {
    let mut line = String::new();
    for (idx, column) in columns.iter().enumerate() {
        if column.hidden {
            continue;
        }
        let cell = render_cell(&column.title, column, layout.width_of(idx), ellipsis);
        line.push_str(&(styles.header)(&cell));
    }
    // Fixed columns may oversubscribe the viewport; the assembled line is
    // clipped to exactly `width` either way.
    truncate_to_width(&line, width, "", true)
}

fn render_row(
    columns: &[Column],
    layout: &ColumnLayout,
    row: &Row,
    selected: bool,
    styles: &TableStyles,
    width: usize,
    ellipsis: &str,
) -> String {
    let mut line = String::new();
    for (idx, column) in columns.iter().enumerate() {
        if column.hidden {
            continue;
        }
        let cell = render_cell(row.get(idx).unwrap_or(""), column, layout.width_of(idx), ellipsis);
        if selected {
            line.push_str(&cell);
        } else {
            line.push_str(&(styles.cell)(&cell));
        }
    }

    if selected {
        // Selection spans the full viewport width, not just the cell text.
        decorate_full_width(&line, width, styles.selected.as_ref())
    } else {
        truncate_to_width(&line, width, "", true)
    }
}

fn render_cell(text: &str, column: &Column, cell_width: usize, ellipsis: &str) -> String {
    if cell_width == 0 {
        return String::new();
    }
    let inset = column.padding.min(cell_width / 2);
    let usable = cell_width - inset * 2;
    let body = truncate_to_width(text, usable, ellipsis, true);
    if inset == 0 {
        return body;
    }
    let pad = " ".repeat(inset);
    format!("{pad}{body}{pad}")
}
