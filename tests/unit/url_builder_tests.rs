// URL builder unit tests

use imgproxy_url::config::ProxyConfig;
use imgproxy_url::{Error, Options, SigningKey, UrlBuilder};
use rstest::rstest;

const BASE_URL: &str = "https://imgproxy.example.com";
const SOURCE: &str = "https://example.com/images/image.jpg";
const KEY: &str = "0123456789abcdef0123456789abcdef";
const SALT: &str = "fedcba9876543210fedcba9876543210";

fn thumbnail_options() -> Options {
    let mut options = Options::new();
    options
        .set_resize("fill", Some(300), Some(400), Some(false), None)
        .set_gravity("sm", None, None)
        .set_quality(80);
    options
}

#[rstest]
#[case(false, None, "https://imgproxy.example.com/unsafe/plain/https://example.com/images/image.jpg")]
#[case(false, Some("png"), "https://imgproxy.example.com/unsafe/plain/https://example.com/images/image.jpg@png")]
#[case(true, None, "https://imgproxy.example.com/unsafe/aHR0cHM6Ly9leGFtcGxlLmNvbS9pbWFnZXMvaW1hZ2UuanBn")]
#[case(true, Some("webp"), "https://imgproxy.example.com/unsafe/aHR0cHM6Ly9leGFtcGxlLmNvbS9pbWFnZXMvaW1hZ2UuanBn.webp")]
fn test_unsigned_url_shapes(
    #[case] encode: bool,
    #[case] extension: Option<&str>,
    #[case] expected: &str,
) {
    let builder = UrlBuilder::new(BASE_URL).with_encoded_source(encode);
    assert_eq!(builder.build_url(SOURCE, None, extension), expected);
}

#[test]
fn test_encoded_source_replaces_plus_and_slash() {
    let builder = UrlBuilder::new(BASE_URL);
    let source = "https://example.com/i.jpg?q=>>>&r=???";

    let url = builder.build_url(source, None, None);
    let encoded = url.rsplit('/').next().unwrap();

    assert_eq!(encoded, "aHR0cHM6Ly9leGFtcGxlLmNvbS9pLmpwZz9xPT4-PiZyPT8_Pw");
    assert!(!encoded.contains('+'));
    assert!(!encoded.contains('/'));
    assert!(!encoded.contains('='));
}

#[test]
fn test_empty_options_match_no_options() {
    let builder = UrlBuilder::new(BASE_URL).with_signing(KEY, SALT).unwrap();
    assert_eq!(
        builder.build_url(SOURCE, Some(&Options::new()), None),
        builder.build_url(SOURCE, None, None)
    );
}

#[test]
fn test_signed_plain_with_options() {
    let builder = UrlBuilder::new(BASE_URL)
        .with_encoded_source(false)
        .with_signing(KEY, SALT)
        .unwrap();

    assert_eq!(
        builder.build_url(SOURCE, Some(&thumbnail_options()), None),
        "https://imgproxy.example.com/TAE2bXqClDgDynV0r88TBeQvhYvwtirsGJuV6JF-ZtQ/resize:fill:300:400:0/gravity:sm/quality:80/plain/https://example.com/images/image.jpg"
    );
}

#[test]
fn test_plain_source_escaping_is_signed() {
    let builder = UrlBuilder::new(BASE_URL)
        .with_encoded_source(false)
        .with_signing(
            "943b421c9eb07c830af81030552c86009268de4e532ba2ee2eab8247c6da0881",
            "520f986b998545b4785e0defbc4f3c1203f22de2374a3d53cb7a7fe9fea309c5",
        )
        .unwrap();
    let mut options = Options::new();
    options.set_width(300);

    assert_eq!(
        builder.build_url(
            "https://example.com/image.jpg?size=large",
            Some(&options),
            Some("webp")
        ),
        "https://imgproxy.example.com/RGqt4nkNtrVVHCfdU5tlkld6IAzRE2w390yLtskgs1I/width:300/plain/https://example.com/image.jpg%3Fsize=large@webp"
    );
}

#[test]
fn test_signature_matches_signing_key() {
    let builder = UrlBuilder::new(BASE_URL).with_signing(KEY, SALT).unwrap();
    let signing = SigningKey::from_hex(KEY, SALT).unwrap();
    let options = thumbnail_options();

    let path = builder.build_path(SOURCE, Some(&options), Some("avif"));
    let url = builder.build_url(SOURCE, Some(&options), Some("avif"));

    assert_eq!(builder.signature(&path), signing.sign(&path));
    assert_eq!(url, format!("{}/{}{}", BASE_URL, signing.sign(&path), path));
}

#[test]
fn test_from_config() {
    let mut config = ProxyConfig::new("https://imgproxy.example.com/");
    config.key = Some(KEY.to_string());
    config.salt = Some(SALT.to_string());
    config.encode_source = false;

    let builder = UrlBuilder::from_config(&config).unwrap();
    assert_eq!(builder.base_url(), BASE_URL);
    assert!(builder.is_signed());
    assert!(!builder.encodes_source());
}

#[test]
fn test_from_config_custom_signature() {
    let mut config = ProxyConfig::new(BASE_URL);
    config.custom_signature = Some("insecure".to_string());

    let builder = UrlBuilder::from_config(&config).unwrap();
    assert!(builder
        .build_url(SOURCE, None, None)
        .starts_with("https://imgproxy.example.com/insecure/"));
}

#[test]
fn test_from_config_rejects_bad_hex() {
    let mut config = ProxyConfig::new(BASE_URL);
    config.key = Some("xyz".to_string());
    config.salt = Some(SALT.to_string());

    let err = UrlBuilder::from_config(&config).unwrap_err();
    assert!(matches!(err, Error::InvalidHex { field: "key", .. }));
}

#[test]
fn test_builder_is_shareable_across_threads() {
    let builder = std::sync::Arc::new(UrlBuilder::new(BASE_URL).with_signing(KEY, SALT).unwrap());
    let expected = builder.build_url(SOURCE, None, None);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let builder = builder.clone();
            std::thread::spawn(move || builder.build_url(SOURCE, None, None))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
