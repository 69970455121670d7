mod coordinator;

use thiserror::Error;

use crate::surface::SurfaceId;

pub use coordinator::WindowCoordinator;

/// Window geometry in surface-local coordinates. Origin may go negative
/// while a window is dragged past a surface edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFrame {
    pub left: i32,
    pub top: i32,
    pub width: u16,
    pub height: u16,
}

impl WindowFrame {
    pub fn new(left: i32, top: i32, width: u16, height: u16) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Window {
    pub(crate) frame: WindowFrame,
    pub(crate) surface: SurfaceId,
    pub(crate) layer: u16,
    pub(crate) maximized: bool,
    pub(crate) restore_frame: Option<WindowFrame>,
}

impl Window {
    pub(crate) fn new(frame: WindowFrame, surface: SurfaceId) -> Self {
        Self {
            frame,
            surface,
            layer: 0,
            maximized: false,
            restore_frame: None,
        }
    }
}

/// Cursor-to-window-corner offset captured at drag start. Exactly one
/// gesture may be live at a time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DragGesture {
    pub(crate) x_offset: i32,
    pub(crate) y_offset: i32,
}

/// A pointer-move sample as delivered by the host: global screen
/// coordinates plus the same position expressed in the delivering
/// surface's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerSample {
    pub global_x: i32,
    pub global_y: i32,
    pub local_x: i32,
    pub local_y: i32,
}

impl PointerSample {
    pub fn new(global_x: i32, global_y: i32, local_x: i32, local_y: i32) -> Self {
        Self {
            global_x,
            global_y,
            local_x,
            local_y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GestureError {
    /// Starting a second drag while one is live is a rejected transition.
    #[error("a drag gesture is already in progress")]
    DragInProgress,
    /// The gesture referenced a window that is not open.
    #[error("window is not open")]
    UnknownWindow,
}
