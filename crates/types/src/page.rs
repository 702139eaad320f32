//! The single fixed output page geometry.

/// PDF points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Physical page geometry, expressed in millimetres.
///
/// Only portrait A4 is produced; the type exists so that every unit
/// conversion goes through one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFormat {
    pub width_units: f32,
    pub height_units: f32,
}

impl PageFormat {
    /// ISO A4, portrait.
    pub const A4: PageFormat = PageFormat {
        width_units: 210.0,
        height_units: 297.0,
    };

    /// Converts a length in page units to PDF points.
    pub fn to_pt(&self, units: f32) -> f32 {
        units * PT_PER_MM
    }

    /// Page width and height in PDF points.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        (self.to_pt(self.width_units), self.to_pt(self.height_units))
    }
}

impl Default for PageFormat {
    fn default() -> Self {
        Self::A4
    }
}
