//! Field-to-viewport camera transform
//!
//! The craft is always rendered at the viewport center; every other entity is
//! placed relative to it. No zoom: one field unit equals one viewport pixel.

use glam::Vec2;

/// The resizable display area the renderer draws into.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub center: Vec2,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            center: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Recompute on a window resize event.
    pub fn resize(&mut self, width: f32, height: f32) {
        *self = Self::new(width, height);
    }

    /// Map a field position to screen coordinates, craft-centered.
    #[inline]
    pub fn field_to_screen(&self, craft_pos: Vec2, field_pos: Vec2) -> Vec2 {
        self.center - (craft_pos - field_pos)
    }

    /// Inverse transform: map a screen point (e.g. the aiming reticle) back
    /// to field coordinates.
    #[inline]
    pub fn screen_to_field(&self, craft_pos: Vec2, screen_pos: Vec2) -> Vec2 {
        craft_pos + (screen_pos - self.center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_craft_maps_to_center() {
        let viewport = Viewport::new(1600.0, 900.0);
        let craft = Vec2::new(1234.0, 567.0);
        assert_eq!(viewport.field_to_screen(craft, craft), Vec2::new(800.0, 450.0));
    }

    #[test]
    fn test_offsets_are_one_to_one() {
        let viewport = Viewport::new(1600.0, 900.0);
        let craft = Vec2::new(1000.0, 1000.0);
        let entity = Vec2::new(1010.0, 980.0);
        let screen = viewport.field_to_screen(craft, entity);
        assert_eq!(screen, Vec2::new(810.0, 430.0));
    }

    #[test]
    fn test_resize_recomputes_center() {
        let mut viewport = Viewport::new(1600.0, 900.0);
        viewport.resize(1024.0, 768.0);
        assert_eq!(viewport.center, Vec2::new(512.0, 384.0));
    }

    #[test]
    fn test_screen_to_field_inverts_field_to_screen() {
        let viewport = Viewport::new(1600.0, 900.0);
        let craft = Vec2::new(700.0, 300.0);
        let field = Vec2::new(655.0, 410.0);
        let round_trip = viewport.screen_to_field(craft, viewport.field_to_screen(craft, field));
        assert_eq!(round_trip, field);
    }
}
