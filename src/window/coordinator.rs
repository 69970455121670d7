use std::collections::BTreeMap;
use std::fmt;

use super::{DragGesture, GestureError, PointerSample, Window, WindowFrame};
use crate::category::CategoryIndex;
use crate::constants::{LAYER_BASE, MAXIMIZE_MARGIN, MIN_WINDOW_WIDTH};
use crate::surface::{SurfaceId, SurfaceRegistry};

/// Tracks every open window, the active one, z-order, channel membership
/// and the drag gesture state machine.
///
/// Window identity is caller-supplied (`W`), mirroring how hosts already
/// key their panes or views. All state lives on this context object; two
/// coordinators never share anything.
pub struct WindowCoordinator<W: Copy + Eq + Ord + fmt::Debug> {
    windows: BTreeMap<W, Window>,
    /// Back-to-front: the last entry draws on top.
    open_order: Vec<W>,
    active: Option<W>,
    channels: CategoryIndex<String, W>,
    /// Which windows each surface currently hosts (the surface's content
    /// root). Reparenting during a drag is a `move_to` here.
    surface_children: CategoryIndex<SurfaceId, W>,
    gesture: Option<DragGesture>,
}

impl<W: Copy + Eq + Ord + fmt::Debug> Default for WindowCoordinator<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Copy + Eq + Ord + fmt::Debug> WindowCoordinator<W> {
    pub fn new() -> Self {
        Self {
            windows: BTreeMap::new(),
            open_order: Vec::new(),
            active: None,
            channels: CategoryIndex::new(),
            surface_children: CategoryIndex::new(),
            gesture: None,
        }
    }

    /// Open a window on `surface` with the given local geometry. New
    /// windows join the top of the z-order. Opening an id twice replaces
    /// the earlier window's geometry and surface.
    pub fn open_window(&mut self, id: W, frame: WindowFrame, surface: SurfaceId) {
        tracing::debug!(window_id = ?id, surface_id = ?surface, "opened window");
        if self.windows.insert(id, Window::new(frame, surface)).is_none() {
            self.open_order.push(id);
        }
        self.surface_children.move_to(id, surface);
        self.apply_window_order();
    }

    /// Remove a window from the open set, its channel and its surface.
    /// Closing an unknown id is a no-op. Closing the active window while a
    /// drag is live also ends the gesture.
    pub fn close_window(&mut self, id: W) {
        if self.windows.remove(&id).is_none() {
            return;
        }
        tracing::debug!(window_id = ?id, "closed window");
        self.open_order.retain(|existing| *existing != id);
        self.channels.remove(id);
        self.surface_children.remove(id);
        if self.active == Some(id) {
            self.active = None;
            if self.gesture.take().is_some() {
                tracing::debug!(window_id = ?id, "drag gesture ended by window close");
            }
        }
        self.apply_window_order();
    }

    pub fn is_open(&self, id: W) -> bool {
        self.windows.contains_key(&id)
    }

    /// Open windows back-to-front; the last entry has the highest layer.
    pub fn open_windows(&self) -> &[W] {
        &self.open_order
    }

    pub fn active_window(&self) -> Option<W> {
        self.active
    }

    /// Mark `id` active and promote it to the top of the z-order.
    pub fn activate_window(&mut self, id: W) {
        if !self.windows.contains_key(&id) {
            tracing::warn!(window_id = ?id, "activate_window on a window that is not open");
            return;
        }
        self.active = Some(id);
        self.make_window_on_top(id);
    }

    /// Move `id` to the top of the z-order and renumber every open
    /// window's layer as `LAYER_BASE + index`. O(n), acceptable for tens
    /// of windows.
    pub fn make_window_on_top(&mut self, id: W) {
        let Some(index) = self.open_order.iter().position(|existing| *existing == id) else {
            return;
        };
        let window = self.open_order.remove(index);
        self.open_order.push(window);
        self.apply_window_order();
    }

    fn apply_window_order(&mut self) {
        for (index, id) in self.open_order.iter().enumerate() {
            if let Some(window) = self.windows.get_mut(id) {
                window.layer = LAYER_BASE.saturating_add(index as u16);
            }
        }
    }

    pub fn frame(&self, id: W) -> Option<WindowFrame> {
        self.windows.get(&id).map(|window| window.frame)
    }

    pub fn surface_of(&self, id: W) -> Option<SurfaceId> {
        self.windows.get(&id).map(|window| window.surface)
    }

    pub fn layer(&self, id: W) -> Option<u16> {
        self.windows.get(&id).map(|window| window.layer)
    }

    /// Windows currently hosted by `surface`, in arrival order.
    pub fn windows_on(&self, surface: SurfaceId) -> &[W] {
        self.surface_children.get(&surface)
    }

    pub fn set_position(&mut self, id: W, left: i32, top: i32) {
        let Some(window) = self.windows.get_mut(&id) else {
            debug_assert!(false, "set_position on a window that is not open");
            return;
        };
        window.frame.left = left;
        window.frame.top = top;
    }

    /// Resize a window. Width is clamped so drag handles stay reachable.
    pub fn set_size(&mut self, id: W, width: u16, height: u16) {
        let Some(window) = self.windows.get_mut(&id) else {
            debug_assert!(false, "set_size on a window that is not open");
            return;
        };
        window.frame.width = width.max(MIN_WINDOW_WIDTH);
        window.frame.height = height;
    }

    /// Fill the owning surface's inner area, keeping a small margin, and
    /// remember the previous frame for `restore`.
    pub fn maximize(&mut self, id: W, surfaces: &SurfaceRegistry) {
        let Some(window) = self.windows.get_mut(&id) else {
            return;
        };
        if window.maximized {
            return;
        }
        let Some(surface) = surfaces.get(window.surface) else {
            tracing::warn!(window_id = ?id, "maximize: owning surface is not open");
            return;
        };
        let (inner_width, inner_height) = surface.inner_size();
        window.restore_frame = Some(window.frame);
        window.maximized = true;
        window.frame = WindowFrame::new(
            0,
            0,
            (inner_width.max(0) as u16).saturating_sub(MAXIMIZE_MARGIN),
            (inner_height.max(0) as u16).saturating_sub(MAXIMIZE_MARGIN),
        );
    }

    /// Put a maximized window back at its remembered frame.
    pub fn restore(&mut self, id: W) {
        let Some(window) = self.windows.get_mut(&id) else {
            return;
        };
        if !window.maximized {
            return;
        }
        window.maximized = false;
        if let Some(frame) = window.restore_frame.take() {
            window.frame = frame;
        }
    }

    pub fn is_maximized(&self, id: W) -> bool {
        self.windows
            .get(&id)
            .is_some_and(|window| window.maximized)
    }

    pub fn toggle_maximize(&mut self, id: W, surfaces: &SurfaceRegistry) {
        if self.is_maximized(id) {
            self.restore(id);
        } else {
            self.maximize(id, surfaces);
        }
    }

    /// Assign `id` to a channel, leaving its previous channel if any.
    pub fn set_channel(&mut self, id: W, channel: impl Into<String>) {
        self.channels.move_to(id, channel.into());
    }

    pub fn channel(&self, id: W) -> Option<&str> {
        self.channels.item_category(id).map(String::as_str)
    }

    /// Windows in `channel`, in the order they joined it.
    pub fn channel_windows(&self, channel: &str) -> &[W] {
        self.channels.get(&channel.to_string())
    }

    /// True while a drag gesture is live. Hosts use this for cursor
    /// affordance styling.
    pub fn drag_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Begin a drag at pointer-down over `id`'s drag handle. `local_x` and
    /// `local_y` are the pointer position in the delivering surface's
    /// local frame; the cursor-to-corner offset is captured from them.
    /// The window becomes active and rises to the top. Starting a second
    /// drag while one is live is rejected.
    pub fn begin_drag(&mut self, id: W, local_x: i32, local_y: i32) -> Result<(), GestureError> {
        if self.gesture.is_some() {
            return Err(GestureError::DragInProgress);
        }
        let Some(window) = self.windows.get(&id) else {
            return Err(GestureError::UnknownWindow);
        };
        let gesture = DragGesture {
            x_offset: local_x - window.frame.left,
            y_offset: local_y - window.frame.top,
        };
        self.activate_window(id);
        self.gesture = Some(gesture);
        tracing::debug!(window_id = ?id, "drag gesture started");
        Ok(())
    }

    /// Process one pointer-move sample while dragging. Resolves the
    /// surface under the pointer, reparents the active window when it has
    /// crossed onto another surface, and repositions it from the captured
    /// offset. Samples outside every surface, or arriving while no drag is
    /// live, do nothing.
    pub fn pointer_moved(&mut self, sample: PointerSample, surfaces: &SurfaceRegistry) {
        let Some(gesture) = self.gesture else {
            return;
        };
        let Some(id) = self.active else {
            return;
        };
        let Some(target) = surfaces.resolve_surface_at(sample.global_x, sample.global_y) else {
            tracing::trace!("pointer-move sample outside all surfaces");
            return;
        };
        let Some(current_surface) = self.surface_of(id) else {
            return;
        };
        if current_surface != target {
            self.surface_children.move_to(id, target);
            tracing::debug!(window_id = ?id, surface_id = ?target, "window reparented mid-drag");
        }
        // On the surface the pointer was last observed over, the sample's
        // local coordinates are authoritative; crossing onto another
        // surface requires translating the global position into its frame.
        let (pointer_x, pointer_y) = if surfaces.active() == Some(target) {
            (sample.local_x, sample.local_y)
        } else {
            match surfaces.get(target) {
                Some(surface) => surface.to_local(sample.global_x, sample.global_y),
                None => return,
            }
        };
        if let Some(window) = self.windows.get_mut(&id) {
            window.surface = target;
            window.frame.left = pointer_x - gesture.x_offset;
            window.frame.top = pointer_y - gesture.y_offset;
        }
    }

    /// End the drag at global pointer-up, wherever the pointer is. A
    /// pointer-up with no live gesture is a no-op.
    pub fn end_drag(&mut self) {
        if self.gesture.take().is_some() {
            tracing::debug!("drag gesture ended");
        }
    }
}
