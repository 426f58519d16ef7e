use bytemuck::{Pod, Zeroable};

/// Width/height pair in logical pixels.
///
/// Used both for widget extents and for the viewport the console overlay is
/// laid out against.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Positive and finite on both axes.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn area(self) -> f32 {
        self.width * self.height
    }

    /// Width divided by height; `None` for a zero height.
    #[inline]
    pub fn aspect_ratio(self) -> Option<f32> {
        if self.height == 0.0 {
            None
        } else {
            Some(self.width / self.height)
        }
    }

    #[inline]
    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}
