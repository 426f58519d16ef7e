use super::{Point, Rect, Size};

/// Resolved placement of a widget on screen.
///
/// `min_size` is the smallest extent the widget may be shrunk to when it is
/// clamped into a viewport. A viewport smaller than `min_size` still wins.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct WidgetBounds {
    pub rect: Rect,
    pub min_size: Size,
}

impl WidgetBounds {
    #[inline]
    pub const fn new(rect: Rect) -> Self {
        Self { rect, min_size: Size::zero() }
    }

    #[inline]
    #[must_use]
    pub const fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    /// Pointer hit-test against the widget rect (half-open).
    #[inline]
    pub fn hit_test(self, p: Point) -> bool {
        self.rect.contains(p)
    }

    /// Moves the widget so it lies inside `viewport`, shrinking it only when
    /// it cannot fit.
    #[must_use]
    pub fn clamp_to(self, viewport: Size) -> Self {
        let r = self.rect.normalized();

        let width = r.size.width.max(self.min_size.width).min(viewport.width.max(0.0));
        let height = r.size.height.max(self.min_size.height).min(viewport.height.max(0.0));

        let x = r.origin.x.max(0.0).min((viewport.width - width).max(0.0));
        let y = r.origin.y.max(0.0).min((viewport.height - height).max(0.0));

        Self { rect: Rect::new(x, y, width, height), ..self }
    }

    /// Keeps the widget size and centers it inside `viewport`.
    #[must_use]
    pub fn centered_in(self, viewport: Size) -> Self {
        let size = self.rect.normalized().size;
        let origin = Point::new(
            (viewport.width - size.width) * 0.5,
            (viewport.height - size.height) * 0.5,
        );
        Self { rect: Rect::from_origin_size(origin, size), ..self }
    }
}
