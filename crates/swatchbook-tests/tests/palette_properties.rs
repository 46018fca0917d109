//! Decoding behavior of individual color spaces and the palette indexes

use swatchbook_core::{
    Cmyk, ColorSpace, DecodedColor, Gray, OpaqueRecord, PaletteDocument, Rgb, Statistics,
};
use swatchbook_tests::{AcoBuilder, SpaceMix, random_palette};

const TOLERANCE: f64 = 1e-3;

fn single(record: [u16; 5]) -> PaletteDocument {
    PaletteDocument::decode(&AcoBuilder::new(1).record(record).build()).unwrap()
}

fn single_color(record: [u16; 5]) -> DecodedColor {
    *single(record).get(0).unwrap().color().expect("decoded color")
}

#[test]
fn test_hsb_red() {
    let DecodedColor::Rgb(rgb) = single_color([1, 0, 65535, 65535, 0]) else {
        panic!("HSB must decode to RGB");
    };
    assert!(rgb.approx_eq(&Rgb::new(1.0, 0.0, 0.0), 1e-9));
}

#[test]
fn test_hsb_gray_ignores_hue() {
    for hue in [0u16, 10000, 40000, 65535] {
        let DecodedColor::Rgb(rgb) = single_color([1, hue, 0, 32768, 0]) else {
            panic!("HSB must decode to RGB");
        };
        assert!(rgb.approx_eq(&Rgb::new(0.5, 0.5, 0.5), TOLERANCE));
    }
}

#[test]
fn test_inverted_cmyk_full_black() {
    // No cyan, magenta or yellow ink; full black ink
    let DecodedColor::Cmyk(cmyk) = single_color([2, 65535, 65535, 65535, 0]) else {
        panic!("tag 2 must decode to CMYK");
    };
    assert!(cmyk.approx_eq(&Cmyk::new(0.0, 0.0, 0.0, 1.0), TOLERANCE));
}

#[test]
fn test_inverted_cmyk_against_reference() {
    use swatchbook_tests::reference::inverted_ink;

    for words in [[0u16, 16384, 32768, 49152], [65535, 1, 65534, 30000]] {
        let [w, x, y, z] = words;
        let DecodedColor::Cmyk(cmyk) = single_color([2, w, x, y, z]) else {
            panic!("tag 2 must decode to CMYK");
        };
        let expected = Cmyk::new(
            inverted_ink(w),
            inverted_ink(x),
            inverted_ink(y),
            inverted_ink(z),
        );
        assert!(cmyk.approx_eq(&expected, 1e-9), "{:?} vs {:?}", cmyk, expected);
    }
}

#[test]
fn test_rgb_clamps_to_one() {
    let DecodedColor::Rgb(rgb) = single_color([0, 65535, 65535, 65535, 0]) else {
        panic!("tag 0 must decode to RGB");
    };
    assert_eq!(rgb.r(), 1.0);
    assert_eq!(rgb.g(), 1.0);
    assert_eq!(rgb.b(), 1.0);
}

#[test]
fn test_channels_always_in_range() {
    let bytes = random_palette(3, 500, 2, SpaceMix::Everything);
    let doc = PaletteDocument::decode(&bytes).unwrap();
    let in_range = |v: f64| (0.0..=1.0).contains(&v);

    for color in doc.colors() {
        let ok = match color {
            DecodedColor::Rgb(rgb) => rgb.to_array().into_iter().all(in_range),
            DecodedColor::Gray(gray) => in_range(gray.g()),
            DecodedColor::Cmyk(cmyk) => cmyk.to_array().into_iter().all(in_range),
        };
        assert!(ok, "channel out of range: {:?}", color);
    }
}

#[test]
fn test_lab_is_lost() {
    let bytes = AcoBuilder::new(2)
        .named([7, 5000, 100, 200, 0], "Named Lab")
        .build();
    let doc = PaletteDocument::decode(&bytes).unwrap();

    assert_eq!(doc.lost(), &[OpaqueRecord::new(7, [5000, 100, 200, 0])]);
    assert_eq!(doc.statistics().lab, 1);
    assert_eq!(doc.statistics().get(ColorSpace::Lab), 1);
    assert!(doc.get_name("Named Lab").is_none());
    assert_eq!(doc.len(), 1);
    assert!(doc.get(0).unwrap().opaque().is_some());
}

#[test]
fn test_name_aggregation() {
    let bytes = AcoBuilder::new(2)
        .named([0, 65280, 0, 0, 0], "Red")
        .named([8, 5000, 0, 0, 0], "Red")
        .build();
    let doc = PaletteDocument::decode(&bytes).unwrap();

    let reds = doc.get_name("Red").expect("Red bucket");
    assert_eq!(
        reds,
        &[
            DecodedColor::Rgb(Rgb::new(1.0, 0.0, 0.0)),
            DecodedColor::Gray(Gray::new(0.5)),
        ]
    );
    assert_eq!(doc.get(0).unwrap().color(), Some(&reds[0]));
    assert_eq!(doc.get(1).unwrap().color(), Some(&reds[1]));
    assert_eq!(doc.len(), 2);
}

#[test]
fn test_lookup_counts_opaque_entries() {
    let bytes = AcoBuilder::new(1)
        .record([3, 1, 2, 3, 4])
        .record([0, 65280, 65280, 65280, 0])
        .build();
    let doc = PaletteDocument::decode(&bytes).unwrap();
    assert_eq!(doc.len(), 2);
    assert!(doc.get(0).unwrap().opaque().is_some());
    assert_eq!(doc.get(1).unwrap().color(), Some(&DecodedColor::Rgb(Rgb::WHITE)));
    assert!(doc.get(2).is_none());
}

#[test]
fn test_document_invariants() {
    for seed in 0..32 {
        let bytes = random_palette(seed, 60, 2, SpaceMix::Everything);
        let doc = PaletteDocument::decode(&bytes).unwrap();

        assert_eq!(doc.len(), 60);
        assert_eq!(doc.statistics().total(), 60);

        let opaque = doc.entries().iter().filter(|e| e.opaque().is_some()).count();
        assert_eq!(doc.lost().len(), opaque);

        let indexed: usize = doc.names().map(|(_, colors)| colors.len()).sum();
        assert_eq!(indexed, doc.colors().count());
        assert!(doc.names().all(|(_, colors)| !colors.is_empty()));
    }
}

#[test]
fn test_statistics_json() {
    let bytes = AcoBuilder::new(1)
        .record([0, 0, 0, 0, 0])
        .record([1, 100, 40000, 40000, 0])
        .record([1, 100, 0, 40000, 0])
        .record([7, 0, 0, 0, 0])
        .record([42, 0, 0, 0, 0])
        .build();
    let doc = PaletteDocument::decode(&bytes).unwrap();
    let json = serde_json::to_value(doc.statistics()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "rgb": 1,
            "hsb": 2,
            "cmyk": 0,
            "lab": 1,
            "gray": 0,
            "wide_cmyk": 0,
            "converted": 1,
            "other": { "42": 1 },
        })
    );

    let expected = Statistics {
        rgb: 1,
        hsb: 2,
        lab: 1,
        converted: 1,
        other: [(42, 1)].into_iter().collect(),
        ..Statistics::default()
    };
    assert_eq!(doc.statistics(), &expected);
}
