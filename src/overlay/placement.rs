//! Pure geometry for the floating spec-sheet panel.
//!
//! `compute_placement` is a function of the anchor card's bounding box, the
//! viewport size, and a layout hint. It performs no measurement itself, so
//! callers can re-derive geometry on every scroll/resize/reflow and unit
//! tests need no rendering surface.

use serde::Serialize;

/// Minimum distance between the panel and the viewport edges, px.
pub const VIEWPORT_MARGIN: f64 = 12.0;

/// Gap between grid columns, px (the grid's `gap-4`).
pub const GRID_GAP: f64 = 16.0;

/// Breakpoints mirroring the responsive grid: 4 columns at >= XL,
/// 3 at >= LG, narrower layouts below.
const XL_BREAKPOINT: f64 = 1280.0;
const LG_BREAKPOINT: f64 = 1024.0;
const SM_BREAKPOINT: f64 = 640.0;

/// Widest the panel gets on narrow viewports, px.
const NARROW_PANEL_MAX: f64 = 600.0;

/// Vertical inset of the connector line below the panel top, px.
const CONNECTOR_INSET: f64 = 8.0;

/// Axis-aligned bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Rect {
        Rect {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Viewport dimensions in px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Viewport {
        Viewport { width, height }
    }
}

/// Outer edges of the card grid, when the layout can report them. Lets the
/// panel snap to column boundaries instead of a purely anchor-relative
/// offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridBounds {
    pub left: f64,
    pub right: f64,
}

/// Which side of the anchor the panel opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Caller-supplied layout preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutHint {
    /// Cards in the right half of the grid open their panel to the left.
    pub prefer_left: bool,
    pub grid: Option<GridBounds>,
}

/// Decorative dotted line between the anchor's facing edge and the panel's
/// facing edge. Derived, never load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConnectorLine {
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

/// Resolved panel geometry. Ephemeral: recomputed whenever the selection,
/// viewport, or panel content changes, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub side: Side,
    pub connector: ConnectorLine,
}

/// Target panel width: two grid columns plus the inter-column gap, clamped
/// to the viewport below the XL breakpoint.
pub fn panel_width(anchor: Rect, viewport: Viewport) -> f64 {
    let two_columns = anchor.width * 2.0 + GRID_GAP;
    if viewport.width >= XL_BREAKPOINT {
        two_columns
    } else if viewport.width >= LG_BREAKPOINT {
        two_columns.min(viewport.width - VIEWPORT_MARGIN * 2.0)
    } else {
        NARROW_PANEL_MAX.min(viewport.width - VIEWPORT_MARGIN * 2.0)
    }
}

/// Clamp a raw left offset so the panel never overflows the viewport.
/// Lower bound is applied first, so on viewports narrower than the panel
/// the upper bound wins.
pub fn clamp_left(raw_left: f64, panel_width: f64, viewport_width: f64) -> f64 {
    let min_left = VIEWPORT_MARGIN;
    let max_left = viewport_width - panel_width - VIEWPORT_MARGIN;
    raw_left.max(min_left).min(max_left)
}

/// Compute the full panel geometry for one anchor.
pub fn compute_placement(anchor: Rect, viewport: Viewport, hint: &LayoutHint) -> Placement {
    let gap = if viewport.width >= SM_BREAKPOINT {
        16.0
    } else {
        12.0
    };
    let width = panel_width(anchor, viewport);
    let side = if hint.prefer_left {
        Side::Left
    } else {
        Side::Right
    };

    let raw_left = match (side, hint.grid) {
        // Snap to the grid's outer left edge so the panel edge lines up
        // with column boundaries.
        (Side::Left, Some(grid)) => grid.left,
        (Side::Right, _) => anchor.right() + gap,
        (Side::Left, None) => anchor.left - gap - width,
    };
    let left = clamp_left(raw_left, width, viewport.width);

    let top = anchor.top.max(VIEWPORT_MARGIN);

    let (start_x, end_x) = match side {
        Side::Right => (anchor.right(), left),
        Side::Left => (left + width, anchor.left),
    };
    let connector = ConnectorLine {
        top: (top + CONNECTOR_INSET).max(VIEWPORT_MARGIN + CONNECTOR_INSET),
        left: start_x.min(end_x),
        width: (end_x - start_x).abs().max(0.0),
    };

    Placement {
        top,
        left,
        width,
        side,
        connector,
    }
}
