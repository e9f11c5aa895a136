//! Column width resolution.
//!
//! Fixed columns consume their declared width; flex columns split whatever is
//! left by integer division. The division remainder is deliberately left as
//! blank trailing space rather than handed to one column, which keeps flex
//! cells equal-width. Hidden columns resolve to width 0 but keep their
//! positional index so row cells stay aligned with column declarations.

/// One displayed field of the table grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    pub title: String,
    /// Fixed rendered width in cells; 0 means "not fixed".
    pub width: usize,
    /// Lower bound a flex column's share must not fall below.
    pub min_width: Option<usize>,
    /// Shares leftover width equally with the other flex columns.
    pub flex: bool,
    /// Excluded from layout and rendering; row indices still count it.
    pub hidden: bool,
    /// Horizontal inset inside the cell, subtracted from usable text width.
    pub padding: usize,
}

impl Column {
    pub fn fixed(title: impl Into<String>, width: usize) -> Self {
        Self {
            title: title.into(),
            width,
            ..Self::default()
        }
    }

    pub fn flex(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            flex: true,
            ..Self::default()
        }
    }

    pub fn hidden(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            hidden: true,
            ..Self::default()
        }
    }

    pub fn with_min_width(mut self, min_width: usize) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }
}

/// Resolved widths for one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Rendered width per declared column; hidden columns hold 0.
    pub widths: Vec<usize>,
    /// Width assigned to each flex column not pinned at its minimum.
    pub flex_cell_width: usize,
}

impl ColumnLayout {
    pub fn width_of(&self, index: usize) -> usize {
        self.widths.get(index).copied().unwrap_or(0)
    }
}

/// Resolve a concrete rendered width for every column inside `total_width`.
pub fn resolve_widths(columns: &[Column], total_width: usize) -> ColumnLayout {
    let mut widths = vec![0usize; columns.len()];
    let mut consumed = 0usize;
    let mut flex: Vec<usize> = Vec::new();

    for (idx, column) in columns.iter().enumerate() {
        if column.hidden {
            continue;
        }
        if column.flex {
            flex.push(idx);
            continue;
        }
        if column.width > 0 {
            widths[idx] = column.width;
            consumed += column.width;
        }
    }

    let mut available = total_width.saturating_sub(consumed);
    let mut flex_cell_width = 0;

    // Flex columns whose equal share would fall below their minimum get pinned
    // at the minimum and leave the pool; the share is re-derived for the rest
    // until the assignment is stable.
    while !flex.is_empty() {
        let share = available / flex.len();
        let pinned: Vec<usize> = flex
            .iter()
            .copied()
            .filter(|&idx| columns[idx].min_width.is_some_and(|min| share < min))
            .collect();

        if pinned.is_empty() {
            for &idx in &flex {
                widths[idx] = share;
            }
            flex_cell_width = share;
            break;
        }

        for &idx in &pinned {
            let pin = columns[idx].min_width.unwrap_or(0).min(available);
            widths[idx] = pin;
            available = available.saturating_sub(pin);
        }
        flex.retain(|idx| !pinned.contains(idx));
    }

    ColumnLayout {
        widths,
        flex_cell_width,
    }
}
