//! Name-based construction of [`Options`]
//!
//! A static table maps each normalized directive key to a function that
//! pulls typed positional arguments out of a `&[Value]` and calls the
//! matching setter. Unknown keys and arguments that don't fit are skipped.

use super::{OneOrMany, Options, Value};

type Apply = fn(&mut Options, &[Value]) -> Option<()>;

/// Apply one map entry; unknown names and ill-typed arguments are ignored
pub(crate) fn apply(options: &mut Options, key: &str, args: Vec<Value>) {
    let name = normalize_key(key);
    let Some(apply) = lookup(&name) else {
        tracing::debug!(key = %key, "Ignoring unknown option");
        return;
    };

    if apply(options, &args).is_none() {
        tracing::warn!(
            key = %key,
            args = args.len(),
            "Skipping option with missing or mistyped arguments"
        );
    }
}

fn lookup(name: &str) -> Option<Apply> {
    DIRECTIVES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, apply)| *apply)
}

/// `resizingType`, `ResizingType`, `resizing-type` → `resizing_type`
fn normalize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else if c == '-' || c == ' ' {
            out.push('_');
        } else {
            out.push(c);
        }
    }
    out
}

// Required argument extractors: `None` when absent or of the wrong type.

fn int(args: &[Value], i: usize) -> Option<i64> {
    args.get(i)?.as_i64()
}

fn float(args: &[Value], i: usize) -> Option<f64> {
    args.get(i)?.as_f64()
}

fn boolean(args: &[Value], i: usize) -> Option<bool> {
    args.get(i)?.as_bool()
}

fn text(args: &[Value], i: usize) -> Option<String> {
    args.get(i)?.to_text()
}

// Optional argument extractors: `Some(None)` when absent or null,
// `None` when present but of the wrong type.

fn opt_int(args: &[Value], i: usize) -> Option<Option<i64>> {
    match args.get(i) {
        None | Some(Value::Null) => Some(None),
        Some(v) => v.as_i64().map(Some),
    }
}

fn opt_float(args: &[Value], i: usize) -> Option<Option<f64>> {
    match args.get(i) {
        None | Some(Value::Null) => Some(None),
        Some(v) => v.as_f64().map(Some),
    }
}

fn opt_bool(args: &[Value], i: usize) -> Option<Option<bool>> {
    match args.get(i) {
        None | Some(Value::Null) => Some(None),
        Some(v) => v.as_bool().map(Some),
    }
}

fn opt_text(args: &[Value], i: usize) -> Option<Option<String>> {
    match args.get(i) {
        None | Some(Value::Null) => Some(None),
        Some(v) => v.to_text().map(Some),
    }
}

fn text_list(args: &[Value]) -> Option<OneOrMany> {
    if args.is_empty() {
        return None;
    }
    let names = args.iter().map(Value::to_text).collect::<Option<Vec<_>>>()?;
    Some(names.into())
}

static DIRECTIVES: &[(&str, Apply)] = &[
    ("resizing_type", |o, a| {
        o.set_resizing_type(&text(a, 0)?);
        Some(())
    }),
    ("width", |o, a| {
        o.set_width(int(a, 0)?);
        Some(())
    }),
    ("height", |o, a| {
        o.set_height(int(a, 0)?);
        Some(())
    }),
    ("min_width", |o, a| {
        o.set_min_width(int(a, 0)?);
        Some(())
    }),
    ("min_height", |o, a| {
        o.set_min_height(int(a, 0)?);
        Some(())
    }),
    ("zoom", |o, a| {
        o.set_zoom(float(a, 0)?, opt_float(a, 1)?);
        Some(())
    }),
    ("dpr", |o, a| {
        o.set_dpr(float(a, 0)?);
        Some(())
    }),
    ("enlarge", |o, a| {
        o.set_enlarge(boolean(a, 0)?);
        Some(())
    }),
    ("extend", |o, a| {
        o.set_extend(boolean(a, 0)?, opt_text(a, 1)?.as_deref());
        Some(())
    }),
    ("extend_aspect_ratio", |o, a| {
        o.set_extend_aspect_ratio(boolean(a, 0)?, opt_text(a, 1)?.as_deref());
        Some(())
    }),
    ("gravity", |o, a| {
        o.set_gravity(&text(a, 0)?, opt_float(a, 1)?, opt_float(a, 2)?);
        Some(())
    }),
    ("crop", |o, a| {
        o.set_crop(int(a, 0)?, int(a, 1)?, opt_int(a, 2)?, opt_int(a, 3)?);
        Some(())
    }),
    ("padding", |o, a| {
        o.set_padding(int(a, 0)?, opt_int(a, 1)?, opt_int(a, 2)?, opt_int(a, 3)?);
        Some(())
    }),
    ("trim", |o, a| {
        o.set_trim(
            float(a, 0)?,
            opt_text(a, 1)?.as_deref(),
            opt_bool(a, 2)?,
            opt_bool(a, 3)?,
        );
        Some(())
    }),
    ("auto_rotate", |o, a| {
        o.set_auto_rotate(boolean(a, 0)?);
        Some(())
    }),
    ("rotate", |o, a| {
        o.set_rotate(int(a, 0)?);
        Some(())
    }),
    ("background", |o, a| {
        o.set_background(&text(a, 0)?);
        Some(())
    }),
    ("blur", |o, a| {
        o.set_blur(float(a, 0)?);
        Some(())
    }),
    ("sharpen", |o, a| {
        o.set_sharpen(float(a, 0)?);
        Some(())
    }),
    ("pixelate", |o, a| {
        o.set_pixelate(int(a, 0)?);
        Some(())
    }),
    ("watermark", |o, a| {
        o.set_watermark(
            float(a, 0)?,
            opt_text(a, 1)?.as_deref(),
            opt_float(a, 2)?,
            opt_float(a, 3)?,
            opt_float(a, 4)?,
        );
        Some(())
    }),
    ("strip_metadata", |o, a| {
        o.set_strip_metadata(boolean(a, 0)?);
        Some(())
    }),
    ("keep_copyright", |o, a| {
        o.set_keep_copyright(boolean(a, 0)?);
        Some(())
    }),
    ("strip_color_profile", |o, a| {
        o.set_strip_color_profile(boolean(a, 0)?);
        Some(())
    }),
    ("quality", |o, a| {
        o.set_quality(int(a, 0)?);
        Some(())
    }),
    ("format_quality", |o, a| {
        o.set_format_quality(&text(a, 0)?, int(a, 1)?);
        Some(())
    }),
    ("max_bytes", |o, a| {
        o.set_max_bytes(int(a, 0)?);
        Some(())
    }),
    ("format", |o, a| {
        o.set_format(&text(a, 0)?);
        Some(())
    }),
    ("resize", |o, a| {
        o.set_resize(
            &text(a, 0)?,
            opt_int(a, 1)?,
            opt_int(a, 2)?,
            opt_bool(a, 3)?,
            opt_bool(a, 4)?,
        );
        Some(())
    }),
    ("size", |o, a| {
        o.set_size(opt_int(a, 0)?, opt_int(a, 1)?, opt_bool(a, 2)?, opt_bool(a, 3)?);
        Some(())
    }),
    ("resizing_algorithm", |o, a| {
        o.set_resizing_algorithm(&text(a, 0)?);
        Some(())
    }),
    ("enforce_thumbnail", |o, a| {
        o.set_enforce_thumbnail(boolean(a, 0)?);
        Some(())
    }),
    ("preset", |o, a| {
        o.set_preset(text_list(a)?);
        Some(())
    }),
    ("cache_buster", |o, a| {
        o.set_cache_buster(&text(a, 0)?);
        Some(())
    }),
    ("filename", |o, a| {
        o.set_filename(&text(a, 0)?, opt_bool(a, 1)?.unwrap_or(true));
        Some(())
    }),
    ("expires", |o, a| {
        o.set_expires(int(a, 0)?);
        Some(())
    }),
    ("skip_processing", |o, a| {
        o.set_skip_processing(text_list(a)?);
        Some(())
    }),
    ("raw", |o, a| {
        o.set_raw(boolean(a, 0)?);
        Some(())
    }),
    ("return_attachment", |o, a| {
        o.set_return_attachment(boolean(a, 0)?);
        Some(())
    }),
    ("background_alpha", |o, a| {
        o.set_background_alpha(float(a, 0)?);
        Some(())
    }),
    ("adjust", |o, a| {
        o.set_adjust(opt_int(a, 0)?, opt_float(a, 1)?, opt_float(a, 2)?);
        Some(())
    }),
    ("brightness", |o, a| {
        o.set_brightness(int(a, 0)?);
        Some(())
    }),
    ("contrast", |o, a| {
        o.set_contrast(float(a, 0)?);
        Some(())
    }),
    ("saturation", |o, a| {
        o.set_saturation(float(a, 0)?);
        Some(())
    }),
    ("monochrome", |o, a| {
        o.set_monochrome(float(a, 0)?, opt_text(a, 1)?.as_deref());
        Some(())
    }),
    ("duotone", |o, a| {
        o.set_duotone(
            float(a, 0)?,
            opt_text(a, 1)?.as_deref(),
            opt_text(a, 2)?.as_deref(),
        );
        Some(())
    }),
    ("unsharp_masking", |o, a| {
        o.set_unsharp_masking(float(a, 0)?, opt_float(a, 1)?, opt_float(a, 2)?);
        Some(())
    }),
    ("blur_detections", |o, a| {
        o.set_blur_detections(&text(a, 0)?, opt_float(a, 1)?);
        Some(())
    }),
    ("draw_detections", |o, a| {
        o.set_draw_detections(&text(a, 0)?, opt_text(a, 1)?.as_deref(), opt_float(a, 2)?);
        Some(())
    }),
    ("objects_position", |o, a| {
        o.set_objects_position(
            &text(a, 0)?,
            opt_bool(a, 1)?,
            opt_float(a, 2)?,
            opt_bool(a, 3)?,
        );
        Some(())
    }),
    ("colorize", |o, a| {
        o.set_colorize(float(a, 0)?, opt_text(a, 1)?.as_deref(), opt_bool(a, 2)?);
        Some(())
    }),
    ("gradient", |o, a| {
        o.set_gradient(
            float(a, 0)?,
            opt_text(a, 1)?.as_deref(),
            opt_text(a, 2)?.as_deref(),
            opt_float(a, 3)?,
            opt_float(a, 4)?,
        );
        Some(())
    }),
    ("watermark_url", |o, a| {
        o.set_watermark_url(&text(a, 0)?);
        Some(())
    }),
    ("watermark_text", |o, a| {
        o.set_watermark_text(
            &text(a, 0)?,
            opt_text(a, 1)?.as_deref(),
            opt_float(a, 2)?,
            opt_text(a, 3)?.as_deref(),
            opt_bool(a, 4)?,
        );
        Some(())
    }),
    ("watermark_size", |o, a| {
        o.set_watermark_size(int(a, 0)?, int(a, 1)?);
        Some(())
    }),
    ("watermark_rotate", |o, a| {
        o.set_watermark_rotate(float(a, 0)?);
        Some(())
    }),
    ("watermark_shadow", |o, a| {
        o.set_watermark_shadow(float(a, 0)?, opt_float(a, 1)?, opt_int(a, 2)?, opt_int(a, 3)?);
        Some(())
    }),
    ("style", |o, a| {
        o.set_style(&text(a, 0)?);
        Some(())
    }),
    ("dpi", |o, a| {
        o.set_dpi(int(a, 0)?);
        Some(())
    }),
    ("jpeg_options", |o, a| {
        o.set_jpeg_options(
            opt_bool(a, 0)?,
            opt_bool(a, 1)?,
            opt_bool(a, 2)?,
            opt_bool(a, 3)?,
            opt_bool(a, 4)?,
            opt_int(a, 5)?,
        );
        Some(())
    }),
    ("png_options", |o, a| {
        o.set_png_options(opt_bool(a, 0)?, opt_bool(a, 1)?, opt_int(a, 2)?);
        Some(())
    }),
    ("webp_options", |o, a| {
        o.set_webp_options(opt_text(a, 0)?.as_deref(), opt_bool(a, 1)?);
        Some(())
    }),
    ("autoquality", |o, a| {
        o.set_autoquality(
            &text(a, 0)?,
            opt_float(a, 1)?,
            opt_int(a, 2)?,
            opt_int(a, 3)?,
            opt_float(a, 4)?,
        );
        Some(())
    }),
    ("page", |o, a| {
        o.set_page(int(a, 0)?);
        Some(())
    }),
    ("pages", |o, a| {
        o.set_pages(int(a, 0)?);
        Some(())
    }),
    ("disable_animation", |o, a| {
        o.set_disable_animation(boolean(a, 0)?);
        Some(())
    }),
    ("video_thumbnail_second", |o, a| {
        o.set_video_thumbnail_second(float(a, 0)?);
        Some(())
    }),
    ("video_thumbnail_keyframes", |o, a| {
        o.set_video_thumbnail_keyframes(boolean(a, 0)?);
        Some(())
    }),
    ("video_thumbnail_tile", |o, a| {
        o.set_video_thumbnail_tile(
            float(a, 0)?,
            opt_int(a, 1)?,
            opt_int(a, 2)?,
            opt_int(a, 3)?,
            opt_int(a, 4)?,
            opt_bool(a, 5)?,
            opt_bool(a, 6)?,
            opt_bool(a, 7)?,
            opt_float(a, 8)?,
            opt_float(a, 9)?,
        );
        Some(())
    }),
    ("video_thumbnail_animation", |o, a| {
        o.set_video_thumbnail_animation(
            float(a, 0)?,
            opt_int(a, 1)?,
            opt_int(a, 2)?,
            opt_int(a, 3)?,
            opt_int(a, 4)?,
            opt_bool(a, 5)?,
            opt_bool(a, 6)?,
            opt_bool(a, 7)?,
            opt_float(a, 8)?,
            opt_float(a, 9)?,
        );
        Some(())
    }),
    ("fallback_image_url", |o, a| {
        o.set_fallback_image_url(&text(a, 0)?);
        Some(())
    }),
    ("hashsum", |o, a| {
        o.set_hashsum(&text(a, 0)?, opt_text(a, 1)?.as_deref());
        Some(())
    }),
    ("max_src_resolution", |o, a| {
        o.set_max_src_resolution(float(a, 0)?);
        Some(())
    }),
    ("max_src_file_size", |o, a| {
        o.set_max_src_file_size(int(a, 0)?);
        Some(())
    }),
    ("max_animation_frames", |o, a| {
        o.set_max_animation_frames(int(a, 0)?);
        Some(())
    }),
    ("max_animation_frame_resolution", |o, a| {
        o.set_max_animation_frame_resolution(float(a, 0)?);
        Some(())
    }),
];
