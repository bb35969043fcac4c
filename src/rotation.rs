// Rotation module
// Quarter-turn rotation state applied on top of the source image

use image::DynamicImage;

/// Clockwise rotation in 90° steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Next quarter turn clockwise, wrapping 270° back to 0°
    pub fn next(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    pub fn degrees(self) -> u16 {
        self.quarter_turns() as u16 * 90
    }

    /// Number of quarter turns, in 0..=3
    pub fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// Rotate a freshly decoded image by this angle.
    ///
    /// Always called with the image read from the source, never with an
    /// already rotated one, so turns never compound.
    pub fn apply(self, img: DynamicImage) -> DynamicImage {
        match self {
            Rotation::Deg0 => img,
            Rotation::Deg90 => img.rotate90(),
            Rotation::Deg180 => img.rotate180(),
            Rotation::Deg270 => img.rotate270(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn next_cycles_through_all_angles() {
        let mut rotation = Rotation::default();
        let mut seen = Vec::new();
        for _ in 0..5 {
            rotation = rotation.next();
            seen.push(rotation.degrees());
        }
        assert_eq!(seen, vec![90, 180, 270, 0, 90]);
    }

    #[test]
    fn apply_swaps_dimensions_on_odd_turns() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(4, 2));
        assert_eq!(Rotation::Deg90.apply(img.clone()).width(), 2);
        assert_eq!(Rotation::Deg180.apply(img.clone()).width(), 4);
        assert_eq!(Rotation::Deg270.apply(img).height(), 4);
    }

    #[test]
    fn apply_moves_top_left_pixel_clockwise() {
        let mut buf = RgbaImage::new(2, 2);
        buf.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        let rotated = Rotation::Deg90.apply(DynamicImage::ImageRgba8(buf)).to_rgba8();
        assert_eq!(rotated.get_pixel(1, 0), &Rgba([255, 0, 0, 255]));
    }
}
