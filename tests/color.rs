mod tests {
    use myrtio_tile_matrix::color::{
        Hsl, NamedColor, Rgb, color_from_name, pack_rgb, rgb_from_u32, rgb_to_u32, unpack_rgb,
    };
    use myrtio_tile_matrix::math8::{clamp8, scale8};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_pack_unpack() {
        assert_eq!(pack_rgb(0x12, 0x34, 0x56), 0x12_34_56);
        assert_eq!(unpack_rgb(0x12_34_56), (0x12, 0x34, 0x56));
        assert_eq!(unpack_rgb(0xFF_12_34_56), (0x12, 0x34, 0x56));

        let color = Rgb::new(75, 0, 130);
        assert_eq!(rgb_from_u32(rgb_to_u32(color)), color);
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(Hsl::new(0, 100, 50).to_rgb(), Rgb::new(254, 1, 1));
        assert_eq!(Hsl::new(120, 100, 50).to_rgb(), Rgb::new(1, 254, 1));
        assert_eq!(Hsl::new(240, 100, 50).to_rgb(), Rgb::new(1, 1, 254));
        assert_eq!(Hsl::new(60, 100, 50).to_rgb(), Rgb::new(254, 254, 1));
    }

    #[test]
    fn test_hsl_grey_and_black() {
        assert_eq!(Hsl::new(200, 0, 50).to_rgb(), Rgb::new(128, 128, 128));
        assert_eq!(Hsl::new(200, 100, 0).to_rgb(), BLACK);
    }

    #[test]
    fn test_hsl_normalizes_input() {
        let hsl = Hsl::new(-30, 150, -5);
        assert_eq!(hsl.hue, 330);
        assert_eq!(hsl.saturation, 100);
        assert_eq!(hsl.luminance, 0);
        assert_eq!(Hsl::new(360, 100, 50), Hsl::new(0, 100, 50));
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(color_from_name("red"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(color_from_name("Orange"), Some(Rgb::new(255, 165, 0)));
        assert_eq!(color_from_name("INDIGO"), Some(Rgb::new(75, 0, 130)));
        assert_eq!(color_from_name("violet"), Some(Rgb::new(138, 43, 226)));
        assert_eq!(color_from_name("black"), Some(BLACK));
        assert_eq!(color_from_name("teal"), None);

        for color in NamedColor::ALL {
            assert_eq!(NamedColor::parse_from_str(color.as_str()), Some(color));
        }
        assert_eq!(NamedColor::Purple.packed(), 0xFF_00_FF);
    }

    #[test]
    fn test_math8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(255, 255 / 6), 42);
        assert_eq!(scale8(0, 200), 0);
        assert_eq!(clamp8(-3), 0);
        assert_eq!(clamp8(300), 255);
        assert_eq!(clamp8(17), 17);
    }
}
