//! Color helpers for brick tinting

use crate::consts::{BRICK_LIGHTNESS, BRICK_SATURATION};

/// One channel of the piecewise HSL -> RGB conversion.
///
/// `t` is corrected by a single +/-1 step, so callers pass values within one
/// unit of `[0, 1]`.
pub fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Convert HSL to an opaque RGBA color
pub fn hsl_to_rgba(hue: f32, saturation: f32, lightness: f32) -> [f32; 4] {
    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    [
        hue_to_rgb(p, q, hue + 1.0 / 3.0),
        hue_to_rgb(p, q, hue),
        hue_to_rgb(p, q, hue - 1.0 / 3.0),
        1.0,
    ]
}

/// Per-level offset into the brick gradient
pub fn hue_variation(level: u32) -> f32 {
    (level as f32 * 0.1) % 1.0
}

/// Hue for the brick at `(column, row)`.
///
/// The gradient sum is wrapped by truncating to an integer and masking with 1,
/// so the result is always 0.0 or 1.0.
pub fn brick_hue(level: u32, column: u32, row: u32) -> f32 {
    let sum = hue_variation(level) + (column as f32 * 0.02 + row as f32 * 0.03);
    ((sum as i32) & 1) as f32
}

/// Brick color at `(column, row)` for the given level
pub fn brick_color(level: u32, column: u32, row: u32) -> [f32; 4] {
    hsl_to_rgba(
        brick_hue(level, column, row),
        BRICK_SATURATION,
        BRICK_LIGHTNESS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const P: f32 = 0.28;
    const Q: f32 = 0.92;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_hue_to_rgb_pieces() {
        assert!(close(hue_to_rgb(P, Q, 0.0), P));
        assert!(close(hue_to_rgb(P, Q, 1.0 / 12.0), P + (Q - P) * 0.5));
        assert!(close(hue_to_rgb(P, Q, 0.25), Q));
        assert!(close(hue_to_rgb(P, Q, 0.6), P + (Q - P) * (2.0 / 3.0 - 0.6) * 6.0));
        assert!(close(hue_to_rgb(P, Q, 0.9), P));
    }

    #[test]
    fn test_hue_to_rgb_single_step_wrap() {
        // -1/3 wraps to 2/3, 4/3 wraps to 1/3
        assert!(close(hue_to_rgb(P, Q, -1.0 / 3.0), hue_to_rgb(P, Q, 2.0 / 3.0)));
        assert!(close(hue_to_rgb(P, Q, 4.0 / 3.0), hue_to_rgb(P, Q, 1.0 / 3.0)));
    }

    #[test]
    fn test_brick_color_is_red_tint() {
        let color = brick_color(1, 0, 0);
        assert!(close(color[0], Q));
        assert!(close(color[1], P));
        assert!(close(color[2], P));
        assert_eq!(color[3], 1.0);
    }

    #[test]
    fn test_brick_hue_wraps_to_one() {
        assert_eq!(brick_hue(1, 0, 0), 0.0);
        // 0.9 + 0.1 + 0.03 crosses 1.0
        assert_eq!(brick_hue(9, 5, 1), 1.0);
    }

    #[test]
    fn test_hue_variation_cycles() {
        assert!(close(hue_variation(3), 0.3));
        assert!(hue_variation(10) < 1e-4 || close(hue_variation(10), 1.0));
    }

    proptest! {
        #[test]
        fn prop_channel_within_unit(t in -1.0f32..2.0) {
            let v = hue_to_rgb(P, Q, t);
            prop_assert!((P - 1e-5..=Q + 1e-5).contains(&v));
        }
    }
}
