mod tests {
    use myrtio_tile_matrix::{OutputDriver, PinId, Rgb, SmartLedsOutput};
    use smart_leds::{RGB8, SmartLedsWrite};

    #[derive(Default)]
    struct CollectingWriter {
        colors: Vec<RGB8>,
    }

    impl SmartLedsWrite for CollectingWriter {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.colors = iterator.into_iter().map(Into::into).collect();
            Ok(())
        }
    }

    #[test]
    fn test_frame_is_converted_from_wire_order() {
        let mut output = SmartLedsOutput::new(CollectingWriter::default());
        output.write(&[2, 1, 3, 0, 255, 0], PinId::P0, 255);
        let writer = output.into_inner();
        assert_eq!(writer.colors, vec![Rgb::new(1, 2, 3), Rgb::new(255, 0, 0)]);
    }

    #[test]
    fn test_brightness_is_applied() {
        let mut output = SmartLedsOutput::new(CollectingWriter::default());
        output.write(&[0, 200, 0], PinId(3), 128);
        assert_eq!(output.into_inner().colors, vec![Rgb::new(100, 0, 0)]);
    }
}
