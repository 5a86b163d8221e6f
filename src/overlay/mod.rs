//! Detail-panel overlay: selection lifecycle and placement geometry.
//!
//! `selection` owns the open/closed state machine; `placement` is the pure
//! geometry calculator. Measurement and observation (scroll, resize,
//! content reflow) stay with the rendering layer, which re-runs
//! [`resolve`](selection::resolve) whenever anything it measures changes.

pub mod placement;
pub mod selection;

pub use placement::{
    ConnectorLine, GridBounds, LayoutHint, Placement, Rect, Side, Viewport, compute_placement,
};
pub use selection::{AnchorLookup, DismissReason, OverlayState, Selection, resolve};
