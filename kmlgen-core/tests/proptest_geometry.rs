//! Property-based tests for points and styles
//!
//! Tests coordinate validation, coordinate ordering in the rendered output
//! and setter invariants using proptest across wide input ranges.

use kmlgen::{Document, Folder, KmlError, Placemark, Point, Render, Style};
use proptest::prelude::*;

fn valid_latitude() -> impl Strategy<Value = f64> {
    prop_oneof![-90.0..=90.0f64, Just(90.0), Just(-90.0), Just(0.0)]
}

fn valid_longitude() -> impl Strategy<Value = f64> {
    prop_oneof![-180.0..=180.0f64, Just(180.0), Just(-180.0), Just(0.0)]
}

fn invalid_latitude() -> impl Strategy<Value = f64> {
    prop_oneof![
        90.000001..1e12f64,
        -1e12..-90.000001f64,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

fn invalid_longitude() -> impl Strategy<Value = f64> {
    prop_oneof![
        180.000001..1e12f64,
        -1e12..-180.000001f64,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

fn any_altitude() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1e6..1e6f64,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

prop_compose! {
    fn point_strategy()(
        lat in valid_latitude(),
        lon in valid_longitude(),
        alt in -1e4..1e4f64
    ) -> Point {
        Point::new(lat, lon, alt).unwrap()
    }
}

proptest! {
    #[test]
    fn test_valid_coordinates_render_lon_lat_alt(
        lat in valid_latitude(),
        lon in valid_longitude(),
        alt in -1e4..1e4f64
    ) {
        let point = Point::new(lat, lon, alt).unwrap();
        prop_assert_eq!(point.latitude(), lat);
        prop_assert_eq!(point.longitude(), lon);

        let expected = format!("<coordinates>{:.6},{:.6},{:.6}</coordinates>", lon, lat, alt);
        prop_assert!(point.render().contains(&expected));
    }

    #[test]
    fn test_invalid_latitude_always_rejected(
        lat in invalid_latitude(),
        lon in prop_oneof![valid_longitude(), invalid_longitude()],
        alt in any_altitude()
    ) {
        let result = Point::new(lat, lon, alt);
        prop_assert!(matches!(result, Err(KmlError::InvalidLatitude(_))));
    }

    #[test]
    fn test_invalid_longitude_rejected_for_valid_latitude(
        lat in valid_latitude(),
        lon in invalid_longitude(),
        alt in any_altitude()
    ) {
        let result = Point::new(lat, lon, alt);
        prop_assert!(matches!(result, Err(KmlError::InvalidLongitude(_))));
    }

    #[test]
    fn test_altitude_is_always_finite(
        lat in valid_latitude(),
        lon in valid_longitude(),
        alt in any_altitude()
    ) {
        let point = Point::new(lat, lon, alt).unwrap();
        prop_assert!(point.altitude().is_finite());
        if alt.is_finite() {
            prop_assert_eq!(point.altitude(), alt);
        } else {
            prop_assert_eq!(point.altitude(), 0.0);
        }
    }

    #[test]
    fn test_icon_scale_only_accepts_closed_range(scale in -200.0..200.0f64) {
        let mut style = Style::new("s", 255, 0, 0, 0);
        style.set_icon_scale(scale);
        if (0.0..=100.0).contains(&scale) {
            prop_assert_eq!(style.icon_scale(), scale);
        } else {
            prop_assert_eq!(style.icon_scale(), 1.1);
        }
    }

    #[test]
    fn test_style_color_is_abgr(a in any::<u8>(), r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let style = Style::new("s", a, r, g, b);
        let expected = format!("<color>{:02x}{:02x}{:02x}{:02x}</color>", a, b, g, r);
        prop_assert_eq!(style.render().matches(&expected).count(), 3);
    }

    #[test]
    fn test_document_render_is_idempotent(points in prop::collection::vec(point_strategy(), 0..20)) {
        let mut folder = Folder::new("F", "");
        for (i, point) in points.into_iter().enumerate() {
            folder.add_feature(Placemark::new(format!("P{i}"), "", point));
        }
        let mut doc = Document::new();
        doc.add_folder(folder);

        let first = doc.render();
        let second = doc.render();
        prop_assert_eq!(first, second);
    }
}
