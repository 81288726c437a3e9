//! Theme and Colors
//!
//! festejo's palette - evergreen and old gold, the graduation colors,
//! on a deep pine background. Confetti picks from the brighter accents.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Page background - deep pine, nearly black
pub const BACKGROUND: Color = Color::Rgb(16, 24, 18);

/// Body text - warm off-white
pub const BODY: Color = Color::Rgb(224, 226, 213);

/// De-emphasized text (notes, lead-ins, hints)
pub const MUTED: Color = Color::Rgb(140, 148, 132);

/// Titles and highlights - old gold
pub const GOLD: Color = Color::Rgb(214, 175, 92);

/// Block headings - fresh green
pub const GREEN: Color = Color::Rgb(134, 188, 126);

/// Block borders and rules
pub const BORDER: Color = Color::Rgb(62, 82, 64);

// ============================================================================
// Navigation
// ============================================================================

/// Active page tab
pub const NAV_ACTIVE: Color = GOLD;

/// Inactive page tabs
pub const NAV_INACTIVE: Color = Color::Rgb(120, 134, 116);

// ============================================================================
// Intro Confetti
// ============================================================================

/// Glyph colors for confetti particles
pub const CONFETTI: [Color; 4] = [
    GOLD,
    GREEN,
    Color::Rgb(236, 238, 228), // paper white
    Color::Rgb(224, 122, 95),  // coral
];

/// Fade a foreground color toward the background
///
/// `opacity` 1.0 leaves the color untouched; 0.0 sinks it fully into
/// [`BACKGROUND`]. Non-RGB colors pass through unchanged.
#[must_use]
pub fn faded(color: Color, opacity: f32) -> Color {
    let (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) = (color, BACKGROUND) else {
        return color;
    };

    let t = 1.0 - opacity.clamp(0.0, 1.0);
    let lerp_u8 = |a: u8, b: u8| -> u8 {
        let a = f32::from(a);
        let b = f32::from(b);
        (a + (b - a) * t).round() as u8
    };

    Color::Rgb(lerp_u8(r, br), lerp_u8(g, bg), lerp_u8(b, bb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_opacity_is_identity() {
        assert_eq!(faded(GOLD, 1.0), GOLD);
    }

    #[test]
    fn zero_opacity_is_background() {
        assert_eq!(faded(GOLD, 0.0), BACKGROUND);
    }

    #[test]
    fn half_opacity_lands_between() {
        let Color::Rgb(r, _, _) = faded(Color::Rgb(200, 200, 200), 0.5) else {
            panic!("expected rgb");
        };
        assert!(r > 16 && r < 200);
    }
}
