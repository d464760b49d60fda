//! Property-based tests for avatar truncation and grid placement
//!
//! Uses proptest to check the invariants that hold for any avatar list and
//! any set of span hints.

use bento_ui::{place, AvatarStack, Breakpoint, GridLayout, Responsive, Span, MAX_VISIBLE_AVATARS};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn avatar_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,12}".prop_map(|s| format!("https://cdn.example.com/{s}.png")), 0..16)
}

/// (col_span, row_span) pairs, including zero and oversized spans
fn spans_strategy() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..8, 0u8..4), 0..24)
}

fn breakpoint_strategy() -> impl Strategy<Value = Breakpoint> {
    prop::sample::select(Breakpoint::ALL.to_vec())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Short lists render whole and in order, long lists keep the first four
    #[test]
    fn avatar_truncation(avatars in avatar_list_strategy()) {
        let stack = AvatarStack::new(&avatars);
        if avatars.len() <= MAX_VISIBLE_AVATARS {
            prop_assert_eq!(stack.visible, &avatars[..]);
            prop_assert_eq!(stack.badge(), None);
        } else {
            prop_assert_eq!(stack.visible, &avatars[..MAX_VISIBLE_AVATARS]);
            prop_assert_eq!(stack.badge(), Some(format!("+{}", avatars.len() - MAX_VISIBLE_AVATARS)));
        }
        prop_assert_eq!(stack.visible.len() + stack.hidden, avatars.len());
    }

    /// Every item is placed once, in document order, inside the grid
    #[test]
    fn placements_cover_every_item(columns in 1u8..8, spans in spans_strategy()) {
        let placed = place(columns, &spans);
        prop_assert_eq!(placed.len(), spans.len());
        for (i, p) in placed.iter().enumerate() {
            prop_assert_eq!(p.index, i);
            prop_assert!(p.col_span >= 1 && p.row_span >= 1);
            prop_assert!(p.col + p.col_span <= usize::from(columns));
        }
    }

    /// No two items share a cell
    #[test]
    fn placements_never_overlap(columns in 1u8..8, spans in spans_strategy()) {
        let placed = place(columns, &spans);
        for (i, a) in placed.iter().enumerate() {
            for b in &placed[i + 1..] {
                prop_assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    /// The placement cursor never moves backwards
    #[test]
    fn placements_follow_reading_order(columns in 1u8..8, spans in spans_strategy()) {
        let placed = place(columns, &spans);
        for pair in placed.windows(2) {
            prop_assert!((pair[0].row, pair[0].col) < (pair[1].row, pair[1].col));
        }
    }

    /// Single-track cards fill rows left to right, wrapping every `columns` items
    #[test]
    fn unit_cards_wrap_by_column_count(columns in 1u8..8, count in 0usize..30) {
        let placed = place(columns, &vec![(1, 1); count]);
        let columns = usize::from(columns);
        for (i, p) in placed.iter().enumerate() {
            prop_assert_eq!((p.row, p.col), (i / columns, i % columns));
        }
    }

    /// A responsive span resolves to the same placement as its raw values
    #[test]
    fn layout_place_matches_raw_place(md in 1u8..5, lg in 1u8..7, bp in breakpoint_strategy()) {
        let layout = GridLayout::new(Responsive::new(1).md(4).lg(6));
        let spans = vec![Span::cols(Responsive::new(1).md(md).lg(lg)); 5];
        let raw: Vec<(u8, u8)> = spans.iter().map(|s| s.at(bp)).collect();
        prop_assert_eq!(layout.place(&spans, bp), place(layout.columns_at(bp), &raw));
    }
}
