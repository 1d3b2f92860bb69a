// File: crates/bbox-core/src/types.rs
// Summary: Shared value types (colors, stroke style) and their defaults.

use crate::error::BracketError;

/// 8-bit RGB color, channels in R, G, B order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Stroke and shape parameters for one bracket box.
/// Contract: `thickness` is at least 1; radius and arm length are non-negative by type
/// and carry no upper bound (they are clamped to the box at render time).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    pub color: Rgb,
    pub thickness: u32,
    pub border_radius: u32,
    pub arm_length: u32,
}

impl Style {
    pub const fn new(color: Rgb, thickness: u32, border_radius: u32, arm_length: u32) -> Self {
        Self { color, thickness, border_radius, arm_length }
    }

    pub fn with_color(mut self, color: impl Into<Rgb>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_border_radius(mut self, border_radius: u32) -> Self {
        self.border_radius = border_radius;
        self
    }

    pub fn with_arm_length(mut self, arm_length: u32) -> Self {
        self.arm_length = arm_length;
        self
    }

    pub fn validate(&self) -> Result<(), BracketError> {
        if self.thickness == 0 {
            return Err(BracketError::ZeroThickness);
        }
        Ok(())
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Rgb::RED, 2, 10, 10)
    }
}
