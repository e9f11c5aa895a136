//! Scroll and cursor bookkeeping for the table grid.
//!
//! A steady-state reactive object: cursor movement, viewport changes, and row
//! replacement each re-clamp the cursor and re-anchor the scroll offset so the
//! cursor row always lies inside `[offset, offset + height)` whenever rows and
//! height exist, and the offset never scrolls past the end of the row set.

/// Cursor, offset, and cursor-window state for a row viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    cursor: usize,
    offset: usize,
    height: usize,
    row_count: usize,
    window_start: usize,
    window_end: usize,
}

impl ScrollState {
    pub fn new(row_count: usize, height: usize) -> Self {
        let mut state = Self {
            row_count,
            height,
            ..Self::default()
        };
        state.recompute();
        state
    }

    /// Index of the selected row. Zero when the row set is empty.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// First row index scrolled into view.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Rows available to the viewport.
    pub fn viewport_rows(&self) -> usize {
        self.height
    }

    /// Half-open row range considered "near" the cursor for anchoring
    /// decisions. Distinct from the literal rendered slice.
    pub fn window(&self) -> (usize, usize) {
        (self.window_start, self.window_end)
    }

    /// The row indices actually scrolled into view.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let end = self
            .offset
            .saturating_add(self.height)
            .min(self.row_count)
            .max(self.offset);
        self.offset..end
    }

    /// Move the cursor by `delta` rows, clamped to valid bounds. A no-op when
    /// the row set is empty.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.row_count == 0 {
            self.cursor = 0;
            self.recompute();
            return;
        }
        let max = (self.row_count - 1) as isize;
        let next = (self.cursor as isize).saturating_add(delta).clamp(0, max);
        self.cursor = next as usize;
        self.recompute();
    }

    pub fn set_viewport_rows(&mut self, height: usize) {
        self.height = height;
        self.recompute();
    }

    /// Replace the row count, re-clamping the cursor into the new bounds.
    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
        if row_count == 0 {
            self.cursor = 0;
        } else if self.cursor > row_count - 1 {
            self.cursor = row_count - 1;
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.window_start = self.cursor.saturating_sub(self.height);
        self.window_end = self.cursor.saturating_add(self.height).min(self.row_count);

        // Anchor the cursor inside the viewport, then keep the viewport inside
        // the row set.
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.height > 0 && self.cursor >= self.offset + self.height {
            self.offset = self.cursor + 1 - self.height;
        }
        self.offset = self.offset.min(self.row_count.saturating_sub(self.height));
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollState;

    fn assert_invariants(state: &ScrollState) {
        if state.viewport_rows() > 0 && state.visible_range().len() > 0 {
            assert!(
                state.visible_range().contains(&state.cursor()),
                "cursor {} outside visible range {:?}",
                state.cursor(),
                state.visible_range()
            );
        }
        let (start, end) = state.window();
        assert!(start <= state.cursor());
        assert!(end >= start);
    }

    #[test]
    fn initial_state_shows_top_of_list() {
        let state = ScrollState::new(7, 4);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.offset(), 0);
        assert_eq!(state.visible_range(), 0..4);
        assert_eq!(state.window(), (0, 4));
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut state = ScrollState::new(5, 3);
        state.move_cursor(-10);
        assert_eq!(state.cursor(), 0);
        state.move_cursor(100);
        assert_eq!(state.cursor(), 4);
        assert_invariants(&state);
    }

    #[test]
    fn scrolling_down_advances_offset_one_row_at_a_time() {
        let mut state = ScrollState::new(10, 4);
        for expected_offset in [0, 0, 0, 0, 1, 2, 3, 4, 5, 6] {
            assert_eq!(state.offset(), expected_offset);
            assert_invariants(&state);
            state.move_cursor(1);
        }
        assert_eq!(state.cursor(), 9);
        assert_eq!(state.offset(), 6);
    }

    #[test]
    fn scrolling_back_up_returns_to_top() {
        let mut state = ScrollState::new(10, 4);
        state.move_cursor(9);
        assert_eq!(state.offset(), 6);
        for _ in 0..9 {
            state.move_cursor(-1);
            assert_invariants(&state);
        }
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn large_deltas_keep_cursor_visible() {
        let mut state = ScrollState::new(100, 5);
        state.move_cursor(57);
        assert_eq!(state.cursor(), 57);
        assert!(state.visible_range().contains(&57));
        state.move_cursor(-40);
        assert_eq!(state.cursor(), 17);
        assert!(state.visible_range().contains(&17));
    }

    #[test]
    fn growing_viewport_pulls_offset_back() {
        let mut state = ScrollState::new(10, 3);
        state.move_cursor(9);
        assert_eq!(state.offset(), 7);
        state.set_viewport_rows(10);
        assert_eq!(state.offset(), 0);
        assert_invariants(&state);
    }

    #[test]
    fn shrinking_viewport_keeps_cursor_visible() {
        let mut state = ScrollState::new(10, 8);
        state.move_cursor(7);
        state.set_viewport_rows(3);
        assert!(state.visible_range().contains(&7));
        assert_invariants(&state);
    }

    #[test]
    fn row_replacement_reclamps_cursor() {
        let mut state = ScrollState::new(10, 4);
        state.move_cursor(9);
        state.set_row_count(3);
        assert_eq!(state.cursor(), 2);
        assert!(state.visible_range().contains(&2));

        state.set_row_count(0);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.visible_range(), 0..0);
    }

    #[test]
    fn empty_rows_make_movement_a_noop() {
        let mut state = ScrollState::new(0, 4);
        state.move_cursor(5);
        state.move_cursor(-5);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn zero_height_never_divides_or_panics() {
        let mut state = ScrollState::new(5, 0);
        state.move_cursor(3);
        assert_eq!(state.cursor(), 3);
        assert_eq!(state.visible_range().len(), 0);
    }

    #[test]
    fn window_tracks_cursor_neighborhood() {
        let mut state = ScrollState::new(20, 4);
        state.move_cursor(10);
        assert_eq!(state.window(), (6, 14));
        state.move_cursor(9);
        assert_eq!(state.window(), (15, 20));
    }

    #[test]
    fn random_walk_preserves_invariants() {
        let mut state = ScrollState::new(37, 6);
        // Deterministic pseudo-random walk.
        let mut seed: u64 = 0x5eed;
        for _ in 0..500 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let delta = ((seed >> 33) % 11) as isize - 5;
            state.move_cursor(delta);
            assert!(state.cursor() < 37);
            assert_invariants(&state);
        }
    }
}
