//! Nearest-match quantization into the 16- and 256-color terminal palettes.
//!
//! The 256-color palette is made of three regions, each searched separately:
//!
//! | Indices   | Region                                   |
//! |-----------|------------------------------------------|
//! | 0–15      | the base ANSI colors ("dim" and "bright") |
//! | 16–231    | a 6×6×6 color cube                       |
//! | 232–255   | a 24-step grayscale ramp                 |
//!
//! Every region snaps channels to a boundary list with [`nearest_boundary`].
//! The candidate whose rendered RGB lies closest (Euclidean) to the input
//! wins, ties going to the earlier region in the table above.
//!
//! ```rust
//! use inkset_color::{ansi256, Rgb};
//!
//! assert_eq!(ansi256(Rgb(0, 0, 0)), 0);
//! assert_eq!(ansi256(Rgb(255, 255, 255)), 231);
//! assert_eq!(ansi256(Rgb(255, 0, 0)), 196);
//! ```

use crate::Rgb;

/// Channel values of the dim half of the base palette (indices 0–7).
pub const DIM_BOUNDARIES: [u8; 2] = [0, 128];

/// Channel values of the bright half of the base palette (indices 8–15).
pub const BRIGHT_BOUNDARIES: [u8; 2] = [0, 255];

/// Channel values of the 6×6×6 cube.
pub const CUBE_BOUNDARIES: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Gray levels of the ramp; the final `255` stands in for cube white.
pub const GRAY_BOUNDARIES: [u8; 25] = [
    8, 18, 28, 38, 48, 58, 68, 78, 88, 98, 108, 118, 128, 138, 148, 158, 168, 178, 188, 198, 208,
    218, 228, 238, 255,
];

/// The one base color that is not on a dim/bright corner.
pub const SILVER: Rgb = Rgb(192, 192, 192);

/// Palette slot used for pure white by the cube and the gray ramp.
pub const WHITE_INDEX: u8 = 231;

const SILVER_INDEX: u8 = 7;
const CUBE_OFFSET: u8 = 16;
const GRAY_OFFSET: u8 = 232;

// Indexed by the channel pattern `r | g << 1 | b << 2`. The all-high dim
// entry is 8, not 7; slot 7 belongs to silver.
const DIM_INDEX: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 8];
const BRIGHT_INDEX: [u8; 8] = [0, 9, 10, 11, 12, 13, 14, 15];

/// A palette slot together with the RGB value the terminal shows for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantized {
    /// Palette index.
    pub index: u8,
    /// The color that index nominally displays.
    pub rendered: Rgb,
}

/// Snaps `value` to the index of the nearest entry of an ascending list.
///
/// Zero always maps to index 0. Otherwise the first boundary at or above
/// `value` is compared with its predecessor and the strictly closer one
/// wins, so ties round down. Values past the last boundary map to it.
pub fn nearest_boundary(value: u8, boundaries: &[u8]) -> usize {
    if value == 0 || boundaries.len() < 2 {
        return 0;
    }
    for i in 1..boundaries.len() {
        let upper = boundaries[i];
        if value == upper {
            return i;
        }
        if value < upper {
            let lower = boundaries[i - 1];
            return if upper - value < value.saturating_sub(lower) {
                i
            } else {
                i - 1
            };
        }
    }
    boundaries.len() - 1
}

fn channel_indices(rgb: Rgb, boundaries: &[u8]) -> [usize; 3] {
    [
        nearest_boundary(rgb.0, boundaries),
        nearest_boundary(rgb.1, boundaries),
        nearest_boundary(rgb.2, boundaries),
    ]
}

fn snap(indices: [usize; 3], boundaries: &[u8]) -> Rgb {
    Rgb(
        boundaries[indices[0]],
        boundaries[indices[1]],
        boundaries[indices[2]],
    )
}

fn pattern_bits(pattern: [usize; 3]) -> usize {
    pattern[0] | (pattern[1] << 1) | (pattern[2] << 2)
}

// The dim and bright candidates are scored against their raw 0/1 channel
// pattern rather than the snapped color. This keeps near-white inputs on
// silver in 16-color mode and lets the cube claim them in 256-color mode.
fn pattern_distance(rgb: Rgb, pattern: [usize; 3]) -> f64 {
    rgb.distance(Rgb(pattern[0] as u8, pattern[1] as u8, pattern[2] as u8))
}

/// Best match among the 16 base colors.
pub fn ansi16(rgb: Rgb) -> Quantized {
    let dim = channel_indices(rgb, &DIM_BOUNDARIES);
    let bright = channel_indices(rgb, &BRIGHT_BOUNDARIES);

    let d_dim = pattern_distance(rgb, dim);
    let d_bright = pattern_distance(rgb, bright);
    let d_silver = rgb.distance(SILVER);

    if d_dim <= d_bright && d_dim <= d_silver {
        Quantized {
            index: DIM_INDEX[pattern_bits(dim)],
            rendered: snap(dim, &DIM_BOUNDARIES),
        }
    } else if d_bright <= d_dim && d_bright <= d_silver {
        Quantized {
            index: BRIGHT_INDEX[pattern_bits(bright)],
            rendered: snap(bright, &BRIGHT_BOUNDARIES),
        }
    } else {
        Quantized {
            index: SILVER_INDEX,
            rendered: SILVER,
        }
    }
}

/// Best match in the 6×6×6 cube, snapping each channel independently.
pub fn cube(rgb: Rgb) -> Quantized {
    let [r, g, b] = channel_indices(rgb, &CUBE_BOUNDARIES);
    Quantized {
        index: CUBE_OFFSET + (36 * r + 6 * g + b) as u8,
        rendered: snap([r, g, b], &CUBE_BOUNDARIES),
    }
}

/// Best match on the grayscale ramp, using the channel average.
pub fn gray(rgb: Rgb) -> Quantized {
    let average = ((rgb.0 as u16 + rgb.1 as u16 + rgb.2 as u16) / 3) as u8;
    let step = nearest_boundary(average, &GRAY_BOUNDARIES);
    if step == GRAY_BOUNDARIES.len() - 1 {
        Quantized {
            index: WHITE_INDEX,
            rendered: Rgb(255, 255, 255),
        }
    } else {
        let level = GRAY_BOUNDARIES[step];
        Quantized {
            index: GRAY_OFFSET + step as u8,
            rendered: Rgb(level, level, level),
        }
    }
}

/// Best match anywhere in the 256-color palette.
pub fn quantize256(rgb: Rgb) -> Quantized {
    let base = ansi16(rgb);
    let cube = cube(rgb);
    let gray = gray(rgb);

    let d_base = rgb.distance(base.rendered);
    let d_cube = rgb.distance(cube.rendered);
    let d_gray = rgb.distance(gray.rendered);

    if d_base <= d_cube && d_base <= d_gray {
        base
    } else if d_cube <= d_base && d_cube <= d_gray {
        cube
    } else {
        gray
    }
}

/// Palette index of the best 256-color match.
pub fn ansi256(rgb: Rgb) -> u8 {
    quantize256(rgb).index
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // nearest_boundary
    // =========================================================================

    #[test]
    fn test_nearest_boundary_zero() {
        assert_eq!(nearest_boundary(0, &CUBE_BOUNDARIES), 0);
        assert_eq!(nearest_boundary(0, &GRAY_BOUNDARIES), 0);
    }

    #[test]
    fn test_nearest_boundary_exact_match() {
        assert_eq!(nearest_boundary(95, &CUBE_BOUNDARIES), 1);
        assert_eq!(nearest_boundary(255, &CUBE_BOUNDARIES), 5);
        assert_eq!(nearest_boundary(128, &DIM_BOUNDARIES), 1);
    }

    #[test]
    fn test_nearest_boundary_ties_round_down() {
        // 115 is exactly between 95 and 135
        assert_eq!(nearest_boundary(115, &CUBE_BOUNDARIES), 1);
        assert_eq!(nearest_boundary(64, &DIM_BOUNDARIES), 0);
        assert_eq!(nearest_boundary(65, &DIM_BOUNDARIES), 1);
    }

    #[test]
    fn test_nearest_boundary_below_first_entry() {
        // below the first gray level still maps to the first step
        assert_eq!(nearest_boundary(3, &GRAY_BOUNDARIES), 0);
    }

    #[test]
    fn test_nearest_boundary_past_last_entry() {
        assert_eq!(nearest_boundary(200, &DIM_BOUNDARIES), 1);
    }

    // =========================================================================
    // 16-color
    // =========================================================================

    #[test]
    fn test_ansi16_black() {
        let q = ansi16(Rgb(0, 0, 0));
        assert_eq!(q.index, 0);
        assert_eq!(q.rendered, Rgb(0, 0, 0));
    }

    #[test]
    fn test_ansi16_white_goes_to_silver() {
        let q = ansi16(Rgb(255, 255, 255));
        assert_eq!(q.index, 7);
        assert_eq!(q.rendered, SILVER);
    }

    #[test]
    fn test_ansi16_primary_red() {
        let q = ansi16(Rgb(255, 0, 0));
        assert_eq!(q.index, 1);
        assert_eq!(q.rendered, Rgb(128, 0, 0));
    }

    #[test]
    fn test_ansi16_dim_all_high_maps_to_eight() {
        // A dark gray whose channels all round up against the dim boundaries
        // but which is still far from silver.
        let q = ansi16(Rgb(70, 70, 70));
        assert_eq!(q.index, 8);
        assert_eq!(q.rendered, Rgb(128, 128, 128));
    }

    // =========================================================================
    // Cube and gray ramp
    // =========================================================================

    #[test]
    fn test_cube_corners() {
        assert_eq!(cube(Rgb(0, 0, 0)).index, 16);
        assert_eq!(cube(Rgb(255, 255, 255)).index, 231);
        assert_eq!(cube(Rgb(255, 0, 0)).index, 196);
        assert_eq!(cube(Rgb(0, 255, 0)).index, 46);
        assert_eq!(cube(Rgb(0, 0, 255)).index, 21);
    }

    #[test]
    fn test_cube_snaps_each_channel() {
        let q = cube(Rgb(0x56, 0x9c, 0xd6));
        assert_eq!(q.rendered, Rgb(95, 175, 215));
        assert_eq!(q.index, 16 + 36 + 3 * 6 + 4);
    }

    #[test]
    fn test_gray_ramp() {
        assert_eq!(gray(Rgb(8, 8, 8)).index, 232);
        assert_eq!(gray(Rgb(238, 238, 238)).index, 255);
        assert_eq!(gray(Rgb(128, 128, 128)).index, 244);
    }

    #[test]
    fn test_gray_top_maps_to_white_slot() {
        let q = gray(Rgb(255, 255, 255));
        assert_eq!(q.index, WHITE_INDEX);
        assert_eq!(q.rendered, Rgb(255, 255, 255));
    }

    #[test]
    fn test_gray_uses_floored_average() {
        // (10 + 10 + 11) / 3 == 10 -> nearest level 8
        assert_eq!(gray(Rgb(10, 10, 11)).index, 232);
    }

    // =========================================================================
    // 256-color
    // =========================================================================

    #[test]
    fn test_ansi256_boundary_cases() {
        assert_eq!(ansi256(Rgb(0, 0, 0)), 0);
        assert_eq!(ansi256(Rgb(255, 255, 255)), 231);
    }

    #[test]
    fn test_ansi256_prefers_cube_for_saturated_colors() {
        assert_eq!(ansi256(Rgb(255, 0, 0)), 196);
        assert_eq!(ansi256(Rgb(0, 255, 0)), 46);
    }

    #[test]
    fn test_ansi256_vscode_blue() {
        assert_eq!(ansi256(Rgb(0x56, 0x9c, 0xd6)), 74);
    }

    #[test]
    fn test_ansi256_exact_ramp_level_beats_cube() {
        // the cube's nearest is (95,95,95); the ramp has 88 exactly
        assert_eq!(ansi256(Rgb(88, 88, 88)), 240);
    }

    #[test]
    fn test_ansi256_mid_gray_uses_ramp() {
        // the 16-color search lands on silver here, so the exact ramp level wins
        assert_eq!(ansi16(Rgb(128, 128, 128)).index, 7);
        assert_eq!(ansi256(Rgb(128, 128, 128)), 244);
    }

    #[test]
    fn test_ansi256_is_deterministic() {
        let rgb = Rgb(0x56, 0x9c, 0xd6);
        let first = ansi256(rgb);
        for _ in 0..10 {
            assert_eq!(ansi256(rgb), first);
        }
    }
}
