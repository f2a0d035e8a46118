#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32, // Red component (0.0 - 1.0)
    pub g: f32, // Green component (0.0 - 1.0)
    pub b: f32, // Blue component (0.0 - 1.0)
}

impl Color {
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// minifb wants 0x00RRGGBB
    pub fn to_u32(&self) -> u32 {
        let [r, g, b] = self.to_rgb8();
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }

    pub fn from_u32(packed: u32) -> Self {
        Self::from_rgb8((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    /*
    u32 RGB is 0x00RRGGBB (in the context of minifb)

    red and blue don't overlap, so both get blended in one multiply with
    the 0xFF00FF mask. green goes through its own 0x00FF00 mask.
    t is a coverage byte here (0..=256 after the +1), which keeps it integer only.
    */
    pub fn lerp_u32(start: u32, end: u32, coverage: u8) -> u32 {
        let t = coverage as u32 + (coverage as u32 >> 7); // 255 -> 256
        let inv_t = 256 - t;

        let srb = start & 0xFF00FF;
        let sg = start & 0x00FF00;
        let erb = end & 0xFF00FF;
        let eg = end & 0x00FF00;

        let rb = ((srb * inv_t + erb * t) >> 8) & 0xFF00FF;
        let g = ((sg * inv_t + eg * t) >> 8) & 0x00FF00;

        rb | g
    }
}

// Predefined colors
impl Color {
    pub const WHITE: Color = Color::from_rgb8(255, 255, 255);
    /// Rich dark brown behind the whole grid
    pub const BACKGROUND: Color = Color::from_rgb8(25, 20, 20);
    pub const SLATE: Color = Color::from_rgb8(50, 50, 50);
    pub const LIME: Color = Color::from_rgb8(0, 255, 0);
    pub const TOMATO: Color = Color::from_rgb8(255, 99, 71);
    pub const GOLD: Color = Color::from_rgb8(255, 223, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_as_0rgb() {
        assert_eq!(Color::TOMATO.to_u32(), 0x00FF6347);
        assert_eq!(Color::from_u32(0x00FF6347), Color::TOMATO);
        assert_eq!(Color::BACKGROUND.to_rgb8(), [25, 20, 20]);
    }

    #[test]
    fn lerp_u32_endpoints() {
        let a = Color::BACKGROUND.to_u32();
        let b = Color::LIME.to_u32();
        assert_eq!(Color::lerp_u32(a, b, 0), a);
        assert_eq!(Color::lerp_u32(a, b, 255), b);

        let mid = Color::from_u32(Color::lerp_u32(0x000000, 0xFFFFFF, 128)).to_rgb8();
        for c in mid {
            assert!((127..=129).contains(&c), "{c}");
        }
    }
}
