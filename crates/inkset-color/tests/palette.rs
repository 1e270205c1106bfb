use inkset_color::{ansi16, ansi256, cube, gray, quantize256, ColorDepth, Rgb};
use proptest::prelude::*;

#[test]
fn test_named_colors_quantize() {
    let navy = Rgb::from_name("navy").unwrap();
    assert_eq!(ansi16(navy).index, 4);
    assert_eq!(ansi256(navy), 4);

    let black = Rgb::from_name("black").unwrap();
    assert_eq!(ansi256(black), 0);

    let white = Rgb::from_name("white").unwrap();
    assert_eq!(ansi256(white), 231);
}

#[test]
fn test_every_depth_renders_a_named_color() {
    let coral = Rgb::from_name("coral").unwrap();
    for depth in [ColorDepth::Ansi16, ColorDepth::Ansi256, ColorDepth::TrueColor] {
        let fg = depth.fg(coral);
        let bg = depth.bg(coral);
        assert!(fg.starts_with("\x1b[") && fg.ends_with('m'));
        assert!(bg.starts_with("\x1b[") && bg.ends_with('m'));
        assert_ne!(fg, bg);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn quantize256_is_deterministic(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let rgb = Rgb(r, g, b);
        prop_assert_eq!(ansi256(rgb), ansi256(rgb));
        prop_assert_eq!(ansi16(rgb), ansi16(rgb));
    }

    #[test]
    fn quantize256_never_loses_to_a_region(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let rgb = Rgb(r, g, b);
        let best = rgb.distance(quantize256(rgb).rendered);
        prop_assert!(best <= rgb.distance(cube(rgb).rendered));
        prop_assert!(best <= rgb.distance(gray(rgb).rendered));
        prop_assert!(best <= rgb.distance(ansi16(rgb).rendered));
    }

    #[test]
    fn ansi16_stays_in_base_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        prop_assert!(ansi16(Rgb(r, g, b)).index < 16);
    }

    #[test]
    fn cube_index_in_cube_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let index = cube(Rgb(r, g, b)).index;
        prop_assert!((16..=231).contains(&index));
    }

    #[test]
    fn gray_index_on_ramp_or_white(v in any::<u8>()) {
        let index = gray(Rgb(v, v, v)).index;
        prop_assert!(index == 231 || index >= 232);
    }

    #[test]
    fn packed_round_trip(packed in 0u32..=0xff_ffff) {
        prop_assert_eq!(Rgb::from_packed(packed).to_packed(), packed);
    }

    #[test]
    fn hex_display_parses_back(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let rgb = Rgb(r, g, b);
        prop_assert_eq!(Rgb::from_hex(&rgb.to_string()), Ok(rgb));
    }
}
