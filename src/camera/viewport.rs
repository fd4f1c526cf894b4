//! Viewport dimensions and screen-to-NDC mapping.

use glam::Vec2;

/// Drawable area in pixels, as reported by the display.
///
/// Both dimensions are at least one so aspect ratios and normalized
/// coordinates stay finite while a window is minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Create a viewport, raising zero dimensions to one.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            log::warn!(
                "viewport {width}x{height} has a zero dimension, clamping to 1"
            );
        }
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }

    /// Width divided by height.
    #[must_use]
    pub fn aspect_ratio(self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Map a screen position to normalized device coordinates in `[-1, 1]`.
    ///
    /// The screen origin is the bottom-left corner with y growing upward, so
    /// no axis is flipped.
    #[must_use]
    pub fn to_ndc(self, screen: Vec2) -> Vec2 {
        Vec2::new(
            (2.0 * screen.x) / self.width as f32 - 1.0,
            (2.0 * screen.y) / self.height as f32 - 1.0,
        )
    }

    /// Pixel position of the viewport center.
    #[must_use]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_clamped() {
        let viewport = Viewport::new(0, 0);
        assert_eq!(viewport.width(), 1);
        assert_eq!(viewport.height(), 1);
        assert_eq!(viewport.aspect_ratio(), 1.0);
    }

    #[test]
    fn aspect_ratio_is_width_over_height() {
        let viewport = Viewport::new(800, 600);
        assert!((viewport.aspect_ratio() - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn ndc_spans_corners() {
        let viewport = Viewport::new(800, 600);
        assert_eq!(viewport.to_ndc(Vec2::ZERO), Vec2::new(-1.0, -1.0));
        assert_eq!(viewport.to_ndc(Vec2::new(800.0, 600.0)), Vec2::ONE);
        assert_eq!(viewport.to_ndc(viewport.center()), Vec2::ZERO);
    }
}
