//! Typed setters and getters for every directive the proxy understands
//!
//! Setters take the required leading arguments plus `Option`s for the
//! optional tail, and return `&mut Options` for chaining. Omitted trailing
//! arguments are not emitted; an omitted argument followed by a supplied
//! one leaves an empty slot (`gravity:sm::10`).

use super::encoding::{decode_text, encode_text, percent_decode, percent_encode};
use super::{Options, Value};

/// One value or a list of values for directives that accept either
/// (`preset`, `skip_processing`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOrMany(Vec<String>);

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for OneOrMany {
    fn from(s: &str) -> Self {
        OneOrMany(vec![s.to_string()])
    }
}

impl From<String> for OneOrMany {
    fn from(s: String) -> Self {
        OneOrMany(vec![s])
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(v: Vec<String>) -> Self {
        OneOrMany(v)
    }
}

impl From<Vec<&str>> for OneOrMany {
    fn from(v: Vec<&str>) -> Self {
        OneOrMany(v.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for OneOrMany {
    fn from(v: &[&str]) -> Self {
        OneOrMany(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany {
    fn from(v: [&str; N]) -> Self {
        OneOrMany(v.iter().map(|s| s.to_string()).collect())
    }
}

macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        vec![$(Value::from($arg)),*]
    };
}

/// Directives with exactly one argument: a setter plus a typed getter each
macro_rules! single_value_directives {
    ($(
        $(#[$meta:meta])*
        $name:literal => $setter:ident / $getter:ident ($ty:ty) -> $ret:ty, $read:path;
    )*) => {
        impl Options {
            $(
                $(#[$meta])*
                pub fn $setter(&mut self, value: $ty) -> &mut Self {
                    self.set($name, args![value])
                }

                pub fn $getter(&self) -> Option<$ret> {
                    self.first($name).and_then($read)
                }
            )*
        }
    };
}

single_value_directives! {
    /// `fit`, `fill`, `fill-down`, `force` or `auto`
    "resizing_type" => set_resizing_type / resizing_type (&str) -> &str, Value::as_str;
    "width" => set_width / width (i64) -> i64, Value::as_i64;
    "height" => set_height / height (i64) -> i64, Value::as_i64;
    "min-width" => set_min_width / min_width (i64) -> i64, Value::as_i64;
    "min-height" => set_min_height / min_height (i64) -> i64, Value::as_i64;
    /// Device pixel ratio
    "dpr" => set_dpr / dpr (f64) -> f64, Value::as_f64;
    "enlarge" => set_enlarge / enlarge (bool) -> bool, Value::as_bool;
    "auto_rotate" => set_auto_rotate / auto_rotate (bool) -> bool, Value::as_bool;
    /// Rotation angle; the proxy accepts multiples of 90
    "rotate" => set_rotate / rotate (i64) -> i64, Value::as_i64;
    /// Hex color (`ffffff`) or `r:g:b` triple
    "background" => set_background / background (&str) -> &str, Value::as_str;
    "blur" => set_blur / blur (f64) -> f64, Value::as_f64;
    "sharpen" => set_sharpen / sharpen (f64) -> f64, Value::as_f64;
    "pixelate" => set_pixelate / pixelate (i64) -> i64, Value::as_i64;
    "strip_metadata" => set_strip_metadata / strip_metadata (bool) -> bool, Value::as_bool;
    "keep_copyright" => set_keep_copyright / keep_copyright (bool) -> bool, Value::as_bool;
    "strip_color_profile" => set_strip_color_profile / strip_color_profile (bool) -> bool, Value::as_bool;
    "quality" => set_quality / quality (i64) -> i64, Value::as_i64;
    "max_bytes" => set_max_bytes / max_bytes (i64) -> i64, Value::as_i64;
    /// Output format (`png`, `jpg`, `webp`, `avif`, ...)
    "format" => set_format / format (&str) -> &str, Value::as_str;
    "resizing_algorithm" => set_resizing_algorithm / resizing_algorithm (&str) -> &str, Value::as_str;
    "enforce_thumbnail" => set_enforce_thumbnail / enforce_thumbnail (bool) -> bool, Value::as_bool;
    "cache_buster" => set_cache_buster / cache_buster (&str) -> &str, Value::as_str;
    /// Unix timestamp after which the proxy refuses the URL
    "expires" => set_expires / expires (i64) -> i64, Value::as_i64;
    "raw" => set_raw / raw (bool) -> bool, Value::as_bool;
    "return_attachment" => set_return_attachment / return_attachment (bool) -> bool, Value::as_bool;
    "background_alpha" => set_background_alpha / background_alpha (f64) -> f64, Value::as_f64;
    "brightness" => set_brightness / brightness (i64) -> i64, Value::as_i64;
    "contrast" => set_contrast / contrast (f64) -> f64, Value::as_f64;
    "saturation" => set_saturation / saturation (f64) -> f64, Value::as_f64;
    "watermark_rotate" => set_watermark_rotate / watermark_rotate (f64) -> f64, Value::as_f64;
    "dpi" => set_dpi / dpi (i64) -> i64, Value::as_i64;
    "page" => set_page / page (i64) -> i64, Value::as_i64;
    "pages" => set_pages / pages (i64) -> i64, Value::as_i64;
    "disable_animation" => set_disable_animation / disable_animation (bool) -> bool, Value::as_bool;
    "video_thumbnail_second" => set_video_thumbnail_second / video_thumbnail_second (f64) -> f64, Value::as_f64;
    "video_thumbnail_keyframes" => set_video_thumbnail_keyframes / video_thumbnail_keyframes (bool) -> bool, Value::as_bool;
    /// Megapixels
    "max_src_resolution" => set_max_src_resolution / max_src_resolution (f64) -> f64, Value::as_f64;
    "max_src_file_size" => set_max_src_file_size / max_src_file_size (i64) -> i64, Value::as_i64;
    "max_animation_frames" => set_max_animation_frames / max_animation_frames (i64) -> i64, Value::as_i64;
    /// Megapixels
    "max_animation_frame_resolution" => set_max_animation_frame_resolution / max_animation_frame_resolution (f64) -> f64, Value::as_f64;
}

/// Getters for multi-argument directives, returning the stored positional
/// arguments as set
macro_rules! positional_getters {
    ($($name:literal => $getter:ident;)*) => {
        impl Options {
            $(
                pub fn $getter(&self) -> Option<&[Value]> {
                    self.get($name)
                }
            )*
        }
    };
}

positional_getters! {
    "extend" => extend;
    "extend_aspect_ratio" => extend_aspect_ratio;
    "gravity" => gravity;
    "crop" => crop;
    "padding" => padding;
    "trim" => trim;
    "watermark" => watermark;
    "format_quality" => format_quality;
    "resize" => resize;
    "size" => size;
    "adjust" => adjust;
    "monochrome" => monochrome;
    "duotone" => duotone;
    "unsharp_masking" => unsharp_masking;
    "blur_detections" => blur_detections;
    "draw_detections" => draw_detections;
    "objects_position" => objects_position;
    "colorize" => colorize;
    "gradient" => gradient;
    "watermark_shadow" => watermark_shadow;
    "jpeg_options" => jpeg_options;
    "png_options" => png_options;
    "webp_options" => webp_options;
    "autoquality" => autoquality;
    "video_thumbnail_tile" => video_thumbnail_tile;
    "video_thumbnail_animation" => video_thumbnail_animation;
    "hashsum" => hashsum;
}

impl Options {
    /// Zoom factor; `y` defaults to `x` on the proxy side when omitted
    pub fn set_zoom(&mut self, x: f64, y: Option<f64>) -> &mut Self {
        self.set_positional("zoom", args![x, y])
    }

    /// `(x, y)` zoom factors
    pub fn zoom(&self) -> Option<(f64, Option<f64>)> {
        let args = self.get("zoom")?;
        let x = args.first()?.as_f64()?;
        Some((x, args.get(1).and_then(Value::as_f64)))
    }

    pub fn set_extend(&mut self, extend: bool, gravity: Option<&str>) -> &mut Self {
        self.set_positional("extend", args![extend, gravity])
    }

    pub fn set_extend_aspect_ratio(&mut self, extend: bool, gravity: Option<&str>) -> &mut Self {
        self.set_positional("extend_aspect_ratio", args![extend, gravity])
    }

    /// Gravity type (`ce`, `no`, `sm`, `fp`, ...) with optional offsets,
    /// or focus point coordinates for `fp`
    pub fn set_gravity(
        &mut self,
        gravity_type: &str,
        x_offset: Option<f64>,
        y_offset: Option<f64>,
    ) -> &mut Self {
        self.set_positional("gravity", args![gravity_type, x_offset, y_offset])
    }

    pub fn set_crop(
        &mut self,
        width: i64,
        height: i64,
        x: Option<i64>,
        y: Option<i64>,
    ) -> &mut Self {
        self.set_positional("crop", args![width, height, x, y])
    }

    /// CSS-like padding: missing sides mirror the supplied ones on the proxy side
    pub fn set_padding(
        &mut self,
        top: i64,
        right: Option<i64>,
        bottom: Option<i64>,
        left: Option<i64>,
    ) -> &mut Self {
        self.set_positional("padding", args![top, right, bottom, left])
    }

    pub fn set_trim(
        &mut self,
        threshold: f64,
        color: Option<&str>,
        equal_hor: Option<bool>,
        equal_ver: Option<bool>,
    ) -> &mut Self {
        self.set_positional("trim", args![threshold, color, equal_hor, equal_ver])
    }

    pub fn set_watermark(
        &mut self,
        opacity: f64,
        position: Option<&str>,
        x_offset: Option<f64>,
        y_offset: Option<f64>,
        scale: Option<f64>,
    ) -> &mut Self {
        self.set_positional(
            "watermark",
            args![opacity, position, x_offset, y_offset, scale],
        )
    }

    pub fn set_format_quality(&mut self, format: &str, quality: i64) -> &mut Self {
        self.set("format_quality", args![format, quality])
    }

    pub fn set_resize(
        &mut self,
        resizing_type: &str,
        width: Option<i64>,
        height: Option<i64>,
        enlarge: Option<bool>,
        extend: Option<bool>,
    ) -> &mut Self {
        self.set_positional(
            "resize",
            args![resizing_type, width, height, enlarge, extend],
        )
    }

    pub fn set_size(
        &mut self,
        width: Option<i64>,
        height: Option<i64>,
        enlarge: Option<bool>,
        extend: Option<bool>,
    ) -> &mut Self {
        self.set_positional("size", args![width, height, enlarge, extend])
    }

    /// One preset name or several, applied in order
    pub fn set_preset(&mut self, presets: impl Into<OneOrMany>) -> &mut Self {
        let values = presets.into().0.into_iter().map(Value::from).collect();
        self.set("preset", values)
    }

    /// Preset names in the order they are applied
    pub fn preset(&self) -> Option<Vec<&str>> {
        self.get("preset")?.iter().map(Value::as_str).collect()
    }

    /// Filename for the `Content-Disposition` header
    ///
    /// With `encode` the name is stored as base64 and flagged `1`; otherwise
    /// it is percent-encoded and flagged `0`.
    pub fn set_filename(&mut self, filename: &str, encode: bool) -> &mut Self {
        let stored = if encode {
            encode_text(filename)
        } else {
            percent_encode(filename)
        };
        self.set("filename", args![stored, encode])
    }

    pub fn filename(&self) -> Option<String> {
        let args = self.get("filename")?;
        let stored = args.first()?.as_str()?;
        match args.get(1).and_then(Value::as_bool) {
            Some(false) => percent_decode(stored),
            _ => decode_text(stored),
        }
    }

    /// Source extensions the proxy should pass through untouched
    pub fn set_skip_processing(&mut self, extensions: impl Into<OneOrMany>) -> &mut Self {
        let values = extensions.into().0.into_iter().map(Value::from).collect();
        self.set("skip_processing", values)
    }

    pub fn skip_processing(&self) -> Option<Vec<&str>> {
        self.get("skip_processing")?.iter().map(Value::as_str).collect()
    }

    pub fn set_adjust(
        &mut self,
        brightness: Option<i64>,
        contrast: Option<f64>,
        saturation: Option<f64>,
    ) -> &mut Self {
        self.set_positional("adjust", args![brightness, contrast, saturation])
    }

    pub fn set_monochrome(&mut self, intensity: f64, color: Option<&str>) -> &mut Self {
        self.set_positional("monochrome", args![intensity, color])
    }

    pub fn set_duotone(
        &mut self,
        intensity: f64,
        color1: Option<&str>,
        color2: Option<&str>,
    ) -> &mut Self {
        self.set_positional("duotone", args![intensity, color1, color2])
    }

    pub fn set_unsharp_masking(
        &mut self,
        sigma: f64,
        amount: Option<f64>,
        threshold: Option<f64>,
    ) -> &mut Self {
        self.set_positional("unsharp_masking", args![sigma, amount, threshold])
    }

    pub fn set_blur_detections(&mut self, class_names: &str, sigma: Option<f64>) -> &mut Self {
        self.set_positional("blur_detections", args![class_names, sigma])
    }

    pub fn set_draw_detections(
        &mut self,
        class_names: &str,
        color: Option<&str>,
        thickness: Option<f64>,
    ) -> &mut Self {
        self.set_positional("draw_detections", args![class_names, color, thickness])
    }

    pub fn set_objects_position(
        &mut self,
        position_type: &str,
        expand: Option<bool>,
        gravity: Option<f64>,
        no_overlap: Option<bool>,
    ) -> &mut Self {
        self.set_positional(
            "objects_position",
            args![position_type, expand, gravity, no_overlap],
        )
    }

    pub fn set_colorize(
        &mut self,
        opacity: f64,
        color: Option<&str>,
        keep_alpha: Option<bool>,
    ) -> &mut Self {
        self.set_positional("colorize", args![opacity, color, keep_alpha])
    }

    pub fn set_gradient(
        &mut self,
        opacity: f64,
        color: Option<&str>,
        direction: Option<&str>,
        start: Option<f64>,
        stop: Option<f64>,
    ) -> &mut Self {
        self.set_positional(
            "gradient",
            args![opacity, color, direction, start, stop],
        )
    }

    /// Custom watermark image; stored base64-encoded
    pub fn set_watermark_url(&mut self, url: &str) -> &mut Self {
        self.set("watermark_url", args![encode_text(url)])
    }

    pub fn watermark_url(&self) -> Option<String> {
        self.first("watermark_url")
            .and_then(Value::as_str)
            .and_then(decode_text)
    }

    /// Text watermark; the text is stored base64-encoded
    pub fn set_watermark_text(
        &mut self,
        text: &str,
        font: Option<&str>,
        font_size: Option<f64>,
        color: Option<&str>,
        wrap: Option<bool>,
    ) -> &mut Self {
        self.set_positional(
            "watermark_text",
            args![encode_text(text), font, font_size, color, wrap],
        )
    }

    /// Watermark text arguments with the text (slot 0) decoded
    pub fn watermark_text(&self) -> Option<Vec<Value>> {
        let args = self.get("watermark_text")?;
        let (text, rest) = args.split_first()?;
        let text = text.as_str().and_then(decode_text)?;

        let mut decoded = Vec::with_capacity(args.len());
        decoded.push(Value::Str(text));
        decoded.extend_from_slice(rest);
        Some(decoded)
    }

    pub fn set_watermark_size(&mut self, width: i64, height: i64) -> &mut Self {
        self.set("watermark_size", args![width, height])
    }

    /// `(width, height)` of the watermark
    pub fn watermark_size(&self) -> Option<(i64, i64)> {
        let args = self.get("watermark_size")?;
        Some((args.first()?.as_i64()?, args.get(1)?.as_i64()?))
    }

    pub fn set_watermark_shadow(
        &mut self,
        opacity: f64,
        sigma: Option<f64>,
        x_offset: Option<i64>,
        y_offset: Option<i64>,
    ) -> &mut Self {
        self.set_positional(
            "watermark_shadow",
            args![opacity, sigma, x_offset, y_offset],
        )
    }

    /// CSS applied to SVG sources; stored base64-encoded
    pub fn set_style(&mut self, style: &str) -> &mut Self {
        self.set("style", args![encode_text(style)])
    }

    pub fn style(&self) -> Option<String> {
        self.first("style").and_then(Value::as_str).and_then(decode_text)
    }

    pub fn set_jpeg_options(
        &mut self,
        progressive: Option<bool>,
        no_subsample: Option<bool>,
        trellis_quant: Option<bool>,
        overshoot_deringing: Option<bool>,
        optimize_scans: Option<bool>,
        quant_table: Option<i64>,
    ) -> &mut Self {
        self.set_positional(
            "jpeg_options",
            args![
                progressive,
                no_subsample,
                trellis_quant,
                overshoot_deringing,
                optimize_scans,
                quant_table
            ],
        )
    }

    pub fn set_png_options(
        &mut self,
        interlaced: Option<bool>,
        quantize: Option<bool>,
        quantization_colors: Option<i64>,
    ) -> &mut Self {
        self.set_positional(
            "png_options",
            args![interlaced, quantize, quantization_colors],
        )
    }

    pub fn set_webp_options(
        &mut self,
        compression: Option<&str>,
        smart_subsample: Option<bool>,
    ) -> &mut Self {
        self.set_positional("webp_options", args![compression, smart_subsample])
    }

    /// Quality autodetection: method (`none`, `size`, `dssim`, `ml`) plus
    /// its target and bounds
    pub fn set_autoquality(
        &mut self,
        method: &str,
        target: Option<f64>,
        min_quality: Option<i64>,
        max_quality: Option<i64>,
        allowed_error: Option<f64>,
    ) -> &mut Self {
        self.set_positional(
            "autoquality",
            args![method, target, min_quality, max_quality, allowed_error],
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_video_thumbnail_tile(
        &mut self,
        step: f64,
        columns: Option<i64>,
        rows: Option<i64>,
        tile_width: Option<i64>,
        tile_height: Option<i64>,
        extend_tile: Option<bool>,
        trim: Option<bool>,
        fill: Option<bool>,
        focus_x: Option<f64>,
        focus_y: Option<f64>,
    ) -> &mut Self {
        self.set_positional(
            "video_thumbnail_tile",
            args![
                step,
                columns,
                rows,
                tile_width,
                tile_height,
                extend_tile,
                trim,
                fill,
                focus_x,
                focus_y
            ],
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_video_thumbnail_animation(
        &mut self,
        step: f64,
        delay: Option<i64>,
        frames: Option<i64>,
        frame_width: Option<i64>,
        frame_height: Option<i64>,
        extend_frame: Option<bool>,
        trim: Option<bool>,
        fill: Option<bool>,
        focus_x: Option<f64>,
        focus_y: Option<f64>,
    ) -> &mut Self {
        self.set_positional(
            "video_thumbnail_animation",
            args![
                step,
                delay,
                frames,
                frame_width,
                frame_height,
                extend_frame,
                trim,
                fill,
                focus_x,
                focus_y
            ],
        )
    }

    /// Image served when the source can't be fetched; stored base64-encoded
    pub fn set_fallback_image_url(&mut self, url: &str) -> &mut Self {
        self.set("fallback_image_url", args![encode_text(url)])
    }

    pub fn fallback_image_url(&self) -> Option<String> {
        self.first("fallback_image_url")
            .and_then(Value::as_str)
            .and_then(decode_text)
    }

    pub fn set_hashsum(&mut self, hashsum_type: &str, hashsum: Option<&str>) -> &mut Self {
        self.set_positional("hashsum", args![hashsum_type, hashsum])
    }
}
