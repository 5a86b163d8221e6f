//! Selection lifecycle for the detail panel.
//!
//! At most one record is open at a time. Selecting another record replaces
//! the current selection in one step, with no observable intermediate closed
//! state, so the rendering layer never paints a stale panel between two
//! selections.

use tracing::debug;

use super::placement::{GridBounds, LayoutHint, Placement, Rect, Viewport, compute_placement};

/// Why an open panel was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Escape,
    Backdrop,
    CloseControl,
}

/// The active record plus the anchor it visually attaches to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub record_id: String,
    /// Opaque key locating the originating card in the rendered layout.
    pub anchor_id: String,
    /// Cards in the right half of the grid open their panel leftward.
    pub prefer_left: bool,
}

impl Selection {
    pub fn new(record_id: impl Into<String>, anchor_id: impl Into<String>) -> Selection {
        Selection {
            record_id: record_id.into(),
            anchor_id: anchor_id.into(),
            prefer_left: false,
        }
    }

    pub fn prefer_left(mut self, prefer_left: bool) -> Selection {
        self.prefer_left = prefer_left;
        self
    }
}

/// Closed/open state machine. Exactly one writer (the user-event handler)
/// and one reader (the resolver) in the single-threaded UI model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayState {
    current: Option<Selection>,
}

impl OverlayState {
    pub fn closed() -> OverlayState {
        OverlayState::default()
    }

    /// Open a record's panel. An existing selection is replaced atomically;
    /// returns the selection that was displaced, if any.
    pub fn open(&mut self, selection: Selection) -> Option<Selection> {
        debug!(record = %selection.record_id, anchor = %selection.anchor_id, "overlay open");
        self.current.replace(selection)
    }

    /// Dismiss the panel. A no-op when already closed.
    pub fn dismiss(&mut self, reason: DismissReason) -> Option<Selection> {
        let displaced = self.current.take();
        if let Some(sel) = &displaced {
            debug!(record = %sel.record_id, ?reason, "overlay dismissed");
        }
        displaced
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// True when the given record is the one currently open. Used to mark
    /// the active card.
    pub fn is_open_for(&self, record_id: &str) -> bool {
        self.current
            .as_ref()
            .is_some_and(|s| s.record_id == record_id)
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.current.as_ref()
    }
}

/// Locates anchors in the rendered layout. The rendering layer implements
/// this; tests use a map.
pub trait AnchorLookup {
    fn anchor_rect(&self, anchor_id: &str) -> Option<Rect>;

    /// Outer grid edges, when the layout knows them.
    fn grid_bounds(&self) -> Option<GridBounds> {
        None
    }
}

/// Derive the panel geometry for the current selection.
///
/// Returns `None` when the overlay is closed or when the anchor cannot be
/// located (it may have left the view between selection and layout). The
/// missing-anchor case is an expected transient: the caller simply leaves
/// the panel unrendered and retries on the next layout pass.
pub fn resolve(
    state: &OverlayState,
    anchors: &impl AnchorLookup,
    viewport: Viewport,
) -> Option<Placement> {
    let selection = state.selection()?;
    let Some(anchor) = anchors.anchor_rect(&selection.anchor_id) else {
        debug!(anchor = %selection.anchor_id, "anchor not found; skipping placement");
        return None;
    };
    let hint = LayoutHint {
        prefer_left: selection.prefer_left,
        grid: anchors.grid_bounds(),
    };
    Some(compute_placement(anchor, viewport, &hint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapAnchors {
        rects: HashMap<String, Rect>,
        grid: Option<GridBounds>,
    }

    impl MapAnchors {
        fn new() -> MapAnchors {
            MapAnchors {
                rects: HashMap::new(),
                grid: None,
            }
        }

        fn with(mut self, id: &str, rect: Rect) -> MapAnchors {
            self.rects.insert(id.to_string(), rect);
            self
        }
    }

    impl AnchorLookup for MapAnchors {
        fn anchor_rect(&self, anchor_id: &str) -> Option<Rect> {
            self.rects.get(anchor_id).copied()
        }

        fn grid_bounds(&self) -> Option<GridBounds> {
            self.grid
        }
    }

    #[test]
    fn starts_closed() {
        let state = OverlayState::closed();
        assert!(!state.is_open());
        assert!(state.selection().is_none());
    }

    #[test]
    fn open_transitions_closed_to_open() {
        let mut state = OverlayState::closed();
        let displaced = state.open(Selection::new("agt-frontend-ui", "card-agt-frontend-ui"));
        assert!(displaced.is_none());
        assert!(state.is_open());
        assert!(state.is_open_for("agt-frontend-ui"));
    }

    #[test]
    fn open_replaces_without_passing_through_closed() {
        let mut state = OverlayState::closed();
        state.open(Selection::new("first", "card-first"));
        let displaced = state.open(Selection::new("second", "card-second"));

        // The displaced selection comes back from the same call that
        // installed the new one: no observable closed interval.
        assert_eq!(displaced.unwrap().record_id, "first");
        assert!(state.is_open());
        assert!(state.is_open_for("second"));
        assert!(!state.is_open_for("first"));
    }

    #[test]
    fn every_dismiss_reason_closes() {
        for reason in [
            DismissReason::Escape,
            DismissReason::Backdrop,
            DismissReason::CloseControl,
        ] {
            let mut state = OverlayState::closed();
            state.open(Selection::new("rec", "card-rec"));
            let displaced = state.dismiss(reason);
            assert_eq!(displaced.unwrap().record_id, "rec");
            assert!(!state.is_open());
        }
    }

    #[test]
    fn dismiss_when_closed_is_a_noop() {
        let mut state = OverlayState::closed();
        assert!(state.dismiss(DismissReason::Escape).is_none());
        assert!(!state.is_open());
    }

    #[test]
    fn resolve_returns_none_when_closed() {
        let anchors = MapAnchors::new();
        let state = OverlayState::closed();
        assert!(resolve(&state, &anchors, Viewport::new(1280.0, 800.0)).is_none());
    }

    #[test]
    fn resolve_returns_none_for_missing_anchor() {
        let anchors = MapAnchors::new();
        let mut state = OverlayState::closed();
        state.open(Selection::new("rec", "card-gone"));
        // Anchor left the view between selection and layout: silent skip,
        // selection itself stays live.
        assert!(resolve(&state, &anchors, Viewport::new(1280.0, 800.0)).is_none());
        assert!(state.is_open());
    }

    #[test]
    fn resolve_computes_placement_for_known_anchor() {
        let anchors = MapAnchors::new().with("card-rec", Rect::new(100.0, 50.0, 200.0, 240.0));
        let mut state = OverlayState::closed();
        state.open(Selection::new("rec", "card-rec"));

        let placement = resolve(&state, &anchors, Viewport::new(1280.0, 800.0)).unwrap();
        assert_eq!(placement.left, 316.0);
        assert_eq!(placement.top, 50.0);
    }

    #[test]
    fn resolve_honors_prefer_left_hint() {
        let anchors = MapAnchors::new().with("card-rec", Rect::new(900.0, 50.0, 200.0, 240.0));
        let mut state = OverlayState::closed();
        state.open(Selection::new("rec", "card-rec").prefer_left(true));

        let placement = resolve(&state, &anchors, Viewport::new(1280.0, 800.0)).unwrap();
        assert_eq!(placement.side, crate::overlay::Side::Left);
    }

    #[test]
    fn resolve_passes_grid_bounds_through() {
        let mut anchors = MapAnchors::new().with("card-rec", Rect::new(900.0, 50.0, 200.0, 240.0));
        anchors.grid = Some(GridBounds {
            left: 40.0,
            right: 1240.0,
        });
        let mut state = OverlayState::closed();
        state.open(Selection::new("rec", "card-rec").prefer_left(true));

        let placement = resolve(&state, &anchors, Viewport::new(1280.0, 800.0)).unwrap();
        assert_eq!(placement.left, 40.0);
    }
}
