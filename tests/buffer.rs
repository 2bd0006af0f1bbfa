mod tests {
    use myrtio_tile_matrix::{PixelBuffer, RenderingBounds, Rgb};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn buffer(len: usize) -> PixelBuffer<16> {
        PixelBuffer::new(RenderingBounds::first(len)).expect("window fits")
    }

    #[test]
    fn test_window_must_fit() {
        assert!(PixelBuffer::<4>::new(RenderingBounds::first(5)).is_none());
        assert!(PixelBuffer::<4>::new(RenderingBounds { start: 3, end: 2 }).is_none());
        assert_eq!(buffer(4).len(), 4);
        assert!(buffer(0).is_empty());
    }

    #[test]
    fn test_wire_order() {
        let mut leds = buffer(2);
        leds.set(0, Rgb::new(1, 2, 3));
        leds.set(1, RED);
        assert_eq!(leds.as_bytes(), &[2, 1, 3, 0, 255, 0]);
        assert_eq!(leds.get(0), Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn test_out_of_range_writes_are_dropped() {
        let mut leds = buffer(3);
        leds.set(3, RED);
        leds.set(100, RED);
        assert!(leds.colors().all(|color| color == BLACK));
        assert_eq!(leds.get(3), None);
    }

    #[test]
    fn test_fill_is_clamped() {
        let mut leds = buffer(4);
        leds.fill(BLUE, 2, 10);
        assert_eq!(
            leds.colors().collect::<Vec<_>>(),
            vec![BLACK, BLACK, BLUE, BLUE]
        );
        leds.fill_all(GREEN);
        assert!(leds.colors().all(|color| color == GREEN));
    }

    #[test]
    fn test_rotate() {
        let mut leds = buffer(4);
        leds.set(0, RED);
        leds.set(1, GREEN);
        leds.set(2, BLUE);

        leds.rotate(1, 0, 4);
        assert_eq!(
            leds.colors().collect::<Vec<_>>(),
            vec![GREEN, BLUE, BLACK, RED]
        );

        leds.rotate(-1, 0, 4);
        assert_eq!(
            leds.colors().collect::<Vec<_>>(),
            vec![RED, GREEN, BLUE, BLACK]
        );

        leds.rotate(-5, 0, 4);
        assert_eq!(
            leds.colors().collect::<Vec<_>>(),
            vec![BLACK, RED, GREEN, BLUE]
        );
    }

    #[test]
    fn test_rotate_sub_range() {
        let mut leds = buffer(4);
        leds.set(0, RED);
        leds.set(1, GREEN);
        leds.set(2, BLUE);
        leds.rotate(1, 1, 2);
        assert_eq!(
            leds.colors().collect::<Vec<_>>(),
            vec![RED, BLUE, GREEN, BLACK]
        );
    }

    #[test]
    fn test_offset_window() {
        let mut leds =
            PixelBuffer::<8>::new(RenderingBounds { start: 2, end: 5 }).expect("window fits");
        assert_eq!(leds.len(), 3);
        leds.set(0, RED);
        leds.set(3, BLUE);
        assert_eq!(leds.as_bytes().len(), 9);
        assert_eq!(leds.get(0), Some(RED));
        assert_eq!(leds.get(2), Some(BLACK));
    }
}
