//! Shared crate-wide constants.

/// Layer index assigned to the bottom-most open window. Every open window
/// receives `LAYER_BASE + position` where `position` is its index in the
/// open-window sequence, so indices stay dense and order-consistent after
/// each promotion.
///
/// Units: z-order steps. Raising this leaves headroom below the window
/// stack for host-drawn backdrops.
pub const LAYER_BASE: u16 = 20;

/// Horizontal/vertical correction (in pixels) applied when translating a
/// global pointer coordinate into a surface's local frame on hosts that
/// report a chrome frame around the surface. Matches the empirically
/// observed border thickness of the reference platform.
pub const FRAME_EDGE_INSET: i32 = 7;

/// Minimum width (in pixels) a window may be resized down to. `set_size`
/// clamps below this so the drag handles stay reachable.
pub const MIN_WINDOW_WIDTH: u16 = 150;

/// Margin (in pixels) kept between a maximized window and the owning
/// surface's inner edges.
pub const MAXIMIZE_MARGIN: u16 = 10;
