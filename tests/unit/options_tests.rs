// Processing options unit tests

use imgproxy_url::{OptionValue, Options, Value};
use rstest::rstest;

#[rstest]
#[case("resizing_type")]
#[case("resizingType")]
#[case("ResizingType")]
#[case("resizing-type")]
fn test_from_map_accepts_key_spellings(#[case] key: &str) {
    let options = Options::from_map([(key, "fit")]);
    assert_eq!(options.to_string(), "resizing_type:fit");
}

#[test]
fn test_from_map_preserves_pair_order() {
    let options = Options::from_map([
        ("quality", OptionValue::from(80)),
        ("width", OptionValue::from(300)),
        ("enlarge", OptionValue::from(true)),
    ]);
    assert_eq!(options.to_string(), "quality:80/width:300/enlarge:1");
}

#[test]
fn test_from_map_with_into_values() {
    let options = Options::from_map([
        ("width", OptionValue::from(300)),
        ("height", 400.into()),
        ("resizingType", "fill".into()),
        ("gravity", "sm".into()),
    ]);
    assert_eq!(
        options.to_string(),
        "width:300/height:400/resizing_type:fill/gravity:sm"
    );
}

#[test]
fn test_from_map_from_json_pairs() {
    let json = r#"[
        ["resize", ["fill", 300, 400, false]],
        ["gravity", ["sm"]],
        ["watermark", [0.5, "ce", 10, 10, 0.2]],
        ["preset", ["sharp", "blurry"]],
        ["format", "png"]
    ]"#;
    let pairs: Vec<(String, OptionValue)> = serde_json::from_str(json).unwrap();
    let options = Options::from_map(pairs);

    assert_eq!(
        options.to_string(),
        "resize:fill:300:400:0/gravity:sm/watermark:0.5:ce:10:10:0.2/preset:sharp:blurry/format:png"
    );
}

#[test]
fn test_from_map_skips_unknown_and_mistyped() {
    let options = Options::from_map([
        ("not_an_option", OptionValue::from(1)),
        ("width", OptionValue::from("wide")),
        ("height", OptionValue::from(400)),
    ]);
    assert_eq!(options.to_string(), "height:400");
    assert_eq!(options.len(), 1);
}

#[test]
fn test_setter_chain_renders_in_first_set_order() {
    let mut options = Options::new();
    options
        .set_width(300)
        .set_height(400)
        .set_gravity("sm", None, None)
        .set_width(500);

    assert_eq!(options.to_string(), "width:500/height:400/gravity:sm");
    assert_eq!(options.width(), Some(500));
}

#[test]
fn test_middle_gap_renders_empty_slot() {
    let mut options = Options::new();
    options.set_gravity("nowe", None, Some(10.0));
    assert_eq!(options.to_string(), "gravity:nowe::10");
}

#[test]
fn test_bools_and_nulls_render() {
    let mut options = Options::new();
    options
        .set_enlarge(false)
        .directive("custom", [Value::Bool(true), Value::Null, Value::from("x")]);
    assert_eq!(options.to_string(), "enlarge:0/custom:1::x");
}

#[rstest]
#[case(true, "filename:bXkgZmlsZS5qcGc=:1")]
#[case(false, "filename:my%20file.jpg:0")]
fn test_filename_storage(#[case] encode: bool, #[case] expected: &str) {
    let mut options = Options::new();
    options.set_filename("my file.jpg", encode);

    assert_eq!(options.to_string(), expected);
    assert_eq!(options.filename().as_deref(), Some("my file.jpg"));
}

#[test]
fn test_watermark_text_is_base64() {
    let mut options = Options::new();
    options.set_watermark_text("Hello, World!", None, None, None, None);

    assert_eq!(options.to_string(), "watermark_text:SGVsbG8sIFdvcmxkIQ==");
    assert_eq!(options.watermark_text(), Some(vec![Value::from("Hello, World!")]));
}

#[test]
fn test_getter_for_unset_directive() {
    let options = Options::new();
    assert_eq!(options.quality(), None);
    assert_eq!(options.filename(), None);
    assert_eq!(options.watermark_url(), None);
}
