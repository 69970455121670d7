//! Display surfaces and the registry that tracks which ones are open.
//!
//! A surface is a logical display area (monitor or host viewport) with a
//! global origin and an inner content area wrapped by host chrome. The
//! registry resolves global pointer coordinates to the surface under them
//! and remembers the surface last observed under the pointer.

use crate::geometry::Rectangle;

/// Opaque handle to an open surface, issued by [`SurfaceRegistry::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SurfaceId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    origin_x: i32,
    origin_y: i32,
    inner_width: i32,
    inner_height: i32,
    outer_width: i32,
    outer_height: i32,
    /// Border correction applied during global-to-local translation on
    /// hosts that draw a frame around the surface. Zero for frameless
    /// surfaces.
    frame_edge: i32,
}

impl Surface {
    /// A frameless surface whose outer size equals its inner size.
    pub fn new(origin_x: i32, origin_y: i32, inner_width: i32, inner_height: i32) -> Self {
        Self {
            origin_x,
            origin_y,
            inner_width,
            inner_height,
            outer_width: inner_width,
            outer_height: inner_height,
            frame_edge: 0,
        }
    }

    /// Record the host-reported outer frame size and border thickness.
    /// The difference between outer and inner height is treated as the
    /// title-bar inset when computing bounds and local coordinates.
    pub fn set_frame_metrics(&mut self, outer_width: i32, outer_height: i32, frame_edge: i32) {
        self.outer_width = outer_width;
        self.outer_height = outer_height;
        self.frame_edge = frame_edge;
    }

    pub fn origin(&self) -> (i32, i32) {
        (self.origin_x, self.origin_y)
    }

    pub fn set_origin(&mut self, x: i32, y: i32) {
        self.origin_x = x;
        self.origin_y = y;
    }

    pub fn inner_size(&self) -> (i32, i32) {
        (self.inner_width, self.inner_height)
    }

    /// Height of host chrome above the content area.
    fn title_inset(&self) -> i32 {
        self.outer_height - self.inner_height
    }

    /// The surface's content area in global coordinates.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            self.origin_x,
            self.origin_y + self.title_inset(),
            self.origin_x + self.inner_width,
            self.origin_y + self.outer_height,
        )
    }

    /// Translate a global pointer coordinate into this surface's local
    /// frame, compensating for the host frame edge.
    pub fn to_local(&self, global_x: i32, global_y: i32) -> (i32, i32) {
        (
            global_x - self.origin_x - self.frame_edge,
            global_y - (self.origin_y + self.title_inset()) + self.frame_edge,
        )
    }
}

/// The ordered set of open surfaces and the one currently under the
/// pointer.
#[derive(Debug, Clone, Default)]
pub struct SurfaceRegistry {
    surfaces: Vec<(SurfaceId, Surface)>,
    active: Option<SurfaceId>,
    next_id: u32,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new surface and return its handle. The first surface
    /// opened becomes active.
    pub fn open(&mut self, surface: Surface) -> SurfaceId {
        let id = SurfaceId(self.next_id);
        self.next_id += 1;
        self.surfaces.push((id, surface));
        if self.active.is_none() {
            self.active = Some(id);
        }
        tracing::debug!(surface_id = ?id, "opened surface");
        id
    }

    /// Open a new surface seeded from the active surface's geometry.
    /// Returns `None` when no surface is active to seed from.
    pub fn extend(&mut self) -> Option<SurfaceId> {
        let seed = *self.get(self.active?)?;
        Some(self.open(seed))
    }

    /// Remove a surface from the open set. Closing an already-closed
    /// surface is a no-op. Closing the active surface leaves no surface
    /// active until the pointer is next observed over one.
    pub fn close(&mut self, id: SurfaceId) {
        let before = self.surfaces.len();
        self.surfaces.retain(|(existing, _)| *existing != id);
        if self.surfaces.len() != before {
            tracing::debug!(surface_id = ?id, "closed surface");
            if self.active == Some(id) {
                self.active = None;
            }
        }
    }

    pub fn is_open(&self, id: SurfaceId) -> bool {
        self.surfaces.iter().any(|(existing, _)| *existing == id)
    }

    pub fn get(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, surface)| surface)
    }

    pub fn get_mut(&mut self, id: SurfaceId) -> Option<&mut Surface> {
        self.surfaces
            .iter_mut()
            .find(|(existing, _)| *existing == id)
            .map(|(_, surface)| surface)
    }

    /// Surface ids in registration order.
    pub fn open_surfaces(&self) -> Vec<SurfaceId> {
        self.surfaces.iter().map(|(id, _)| *id).collect()
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// The surface last observed under the pointer, if any.
    pub fn active(&self) -> Option<SurfaceId> {
        self.active
    }

    /// Record that the pointer was observed over `id`. Unknown ids are
    /// ignored.
    pub fn set_active(&mut self, id: SurfaceId) {
        if self.is_open(id) {
            self.active = Some(id);
        } else {
            tracing::warn!(surface_id = ?id, "set_active on a surface that is not open");
        }
    }

    /// First open surface, in registration order, whose content bounds
    /// contain the global point. Overlaps resolve by registration order,
    /// not z-order. Returns `None` for pointer positions in dead space.
    pub fn resolve_surface_at(&self, global_x: i32, global_y: i32) -> Option<SurfaceId> {
        self.surfaces
            .iter()
            .find(|(_, surface)| surface.bounds().contains(global_x, global_y))
            .map(|(id, _)| *id)
    }
}
