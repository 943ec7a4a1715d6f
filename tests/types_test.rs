//! Tests for rovercam core types
//!
//! Ensures correct behavior of the fundamental data structures.

use rovercam::types::{CameraFormat, CameraFrame, ChannelOrder, Direction};

mod direction_tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Direction::Up.label(), "Up");
        assert_eq!(Direction::Down.label(), "Down");
        assert_eq!(Direction::Left.label(), "Left");
        assert_eq!(Direction::Right.label(), "Right");
    }

    #[test]
    fn test_display_matches_label() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string(), direction.label());
        }
    }

    #[test]
    fn test_serialization_round_trip() {
        let direction = Direction::Left;
        let toml = toml::to_string(&std::collections::BTreeMap::from([("d", direction)])).unwrap();
        assert!(toml.contains("Left"));
    }
}

mod camera_format_tests {
    use super::*;

    #[test]
    fn test_format_creation() {
        let format = CameraFormat::new(640, 480, 30);
        assert_eq!(format.width, 640);
        assert_eq!(format.height, 480);
        assert_eq!(format.fps, 30);
        assert_eq!(format.format_type, "RGB8");
    }

    #[test]
    fn test_format_presets() {
        let standard = CameraFormat::standard();
        assert_eq!(standard.width, 1280);
        assert_eq!(standard.height, 720);

        let low = CameraFormat::low();
        assert_eq!(low.width, 640);
        assert_eq!(low.height, 480);
    }

    #[test]
    fn test_format_with_type() {
        let format = CameraFormat::new(640, 480, 30).with_format_type("MJPEG".to_string());
        assert_eq!(format.format_type, "MJPEG");
    }
}

mod camera_frame_tests {
    use super::*;

    #[test]
    fn test_frame_defaults_to_rgb_order() {
        let frame = CameraFrame::new(vec![0; 12], 2, 2, "0".to_string());
        assert_eq!(frame.order, ChannelOrder::Rgb);
        assert_eq!(frame.device_id, "0");
    }

    #[test]
    fn test_frame_with_order() {
        let frame = CameraFrame::new(vec![0; 12], 2, 2, "0".to_string())
            .with_order(ChannelOrder::Bgr);
        assert_eq!(frame.order, ChannelOrder::Bgr);
    }

    #[test]
    fn test_expected_len() {
        let frame = CameraFrame::new(Vec::new(), 640, 480, "0".to_string());
        assert_eq!(frame.expected_len(), 640 * 480 * 3);
    }
}
