use super::Color;

/// Surface description handed to the scene sink alongside each mesh.
///
/// Deliberately flat: a color plus the handful of raster-state switches the clock
/// face needs. Shading models stay with the sink.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    pub color: Color,
    /// When `false` the mesh is drawn over whatever is already in the frame,
    /// relying on paint order instead of depth.
    pub depth_test: bool,
    /// Render back faces too (thin plates, lathe shells).
    pub double_sided: bool,
    /// Use per-face normals instead of interpolated ones.
    pub flat_shading: bool,
}

impl Material {
    #[inline]
    pub const fn solid(color: Color) -> Self {
        Self {
            color,
            depth_test: true,
            double_sided: false,
            flat_shading: false,
        }
    }

    #[inline]
    pub const fn without_depth_test(mut self) -> Self {
        self.depth_test = false;
        self
    }

    #[inline]
    pub const fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    #[inline]
    pub const fn flat(mut self) -> Self {
        self.flat_shading = true;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::solid(Color::WHITE)
    }
}
