use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use imgproxy_url::{OptionValue, Options, SigningKey, UrlBuilder};

const BASE_URL: &str = "https://imgproxy.example.com";
const SOURCE: &str = "https://example.com/images/image.jpg";
const KEY: &str = "943b421c9eb07c830af81030552c86009268de4e532ba2ee2eab8247c6da0881";
const SALT: &str = "520f986b998545b4785e0defbc4f3c1203f22de2374a3d53cb7a7fe9fea309c5";

fn typical_options() -> Options {
    let mut options = Options::new();
    options
        .set_resize("fill", Some(300), Some(400), Some(false), None)
        .set_gravity("sm", None, None)
        .set_watermark(0.5, Some("ce"), Some(10.0), Some(10.0), Some(0.2))
        .set_quality(80)
        .set_format("webp");
    options
}

/// Benchmark rendering an option set into its path segment
fn bench_render_options(c: &mut Criterion) {
    let options = typical_options();

    c.bench_function("render_options", |b| {
        b.iter(|| black_box(&options).to_string())
    });
}

/// Benchmark building options from name/value pairs
fn bench_options_from_map(c: &mut Criterion) {
    c.bench_function("options_from_map", |b| {
        b.iter(|| {
            Options::from_map([
                ("resizingType", OptionValue::from("fill")),
                ("width", OptionValue::from(300)),
                ("height", OptionValue::from(400)),
                ("gravity", OptionValue::from("sm")),
                ("quality", OptionValue::from(80)),
            ])
        })
    });
}

/// Benchmark HMAC signing alone
fn bench_sign_path(c: &mut Criterion) {
    let signing = SigningKey::from_hex(KEY, SALT).expect("valid hex");
    let path = "/resize:fill:300:400:0/gravity:sm/plain/https://example.com/images/image.jpg";

    c.bench_function("sign_path", |b| b.iter(|| signing.sign(black_box(path))));
}

/// Benchmark complete URL generation in each mode
fn bench_build_url_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_url");
    let options = typical_options();

    let builders = vec![
        ("unsafe_plain", UrlBuilder::new(BASE_URL).with_encoded_source(false)),
        ("unsafe_encoded", UrlBuilder::new(BASE_URL)),
        (
            "signed_plain",
            UrlBuilder::new(BASE_URL)
                .with_encoded_source(false)
                .with_signing(KEY, SALT)
                .expect("valid hex"),
        ),
        (
            "signed_encoded",
            UrlBuilder::new(BASE_URL)
                .with_signing(KEY, SALT)
                .expect("valid hex"),
        ),
    ];

    for (name, builder) in builders {
        group.bench_function(name, |b| {
            b.iter(|| builder.build_url(black_box(SOURCE), Some(&options), Some("webp")))
        });
    }

    group.finish();
}

/// Benchmark signing cost as the source URL grows
fn bench_source_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("source_lengths");
    let builder = UrlBuilder::new(BASE_URL)
        .with_signing(KEY, SALT)
        .expect("valid hex");
    let options = typical_options();

    for segments in [1usize, 8, 64] {
        let source = format!("https://example.com/{}image.jpg", "nested/".repeat(segments));
        group.bench_with_input(BenchmarkId::from_parameter(segments), &source, |b, source| {
            b.iter(|| builder.build_url(black_box(source), Some(&options), None))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_options,
    bench_options_from_map,
    bench_sign_path,
    bench_build_url_modes,
    bench_source_lengths
);
criterion_main!(benches);
