// Pure helpers shared by the DOM glue: backing-store sizing, overlay text and
// `data-*` attribute parsing. Nothing here touches `web_sys`.

use room_core::constants::MAX_DEVICE_PIXEL_RATIO;
use std::cell::RefCell;

/// Device pixel ratio actually used for the backing store.
pub fn capped_dpr(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Backing-store size in device pixels for a CSS box, never smaller than 1x1.
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let px = |v: f64| {
        let scaled = (v * dpr).round();
        if scaled.is_finite() && scaled >= 1.0 {
            scaled as u32
        } else {
            1
        }
    };
    (px(css_width), px(css_height))
}

/// Whole percent shown next to the loader bar.
pub fn percent(progress: f32) -> u32 {
    let p = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    (p * 100.0).round() as u32
}

pub fn percent_label(progress: f32) -> String {
    format!("{}%", percent(progress))
}

/// Frame delta clamped to `[0, max]`; NaN counts as no time.
pub fn clamp_frame_dt(dt_sec: f32, max_sec: f32) -> f32 {
    if dt_sec.is_nan() {
        0.0
    } else {
        dt_sec.clamp(0.0, max_sec)
    }
}

/// Parse a viewport-fraction attribute such as `"0.75"` or `"75%"`.
pub fn parse_fraction(raw: Option<&str>, fallback: f32) -> f32 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return fallback;
    };
    let parsed = match raw.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f32>().map(|v| v / 100.0),
        None => raw.parse::<f32>(),
    };
    match parsed {
        Ok(v) if v.is_finite() => v,
        _ => {
            log::warn!("[scroll] ignoring fraction {:?}", raw);
            fallback
        }
    }
}

pub fn label_font(font_px: f32, weight: u32, family: &str) -> String {
    format!("{} {:.1}px {}", weight, font_px, family)
}

/// Run `step` over every item and collect what it yields. The list is no
/// longer borrowed when this returns.
pub fn step_all<T, R>(
    list: &RefCell<Vec<T>>,
    step: impl FnMut(&mut T) -> Option<R>,
) -> Vec<R> {
    list.borrow_mut().iter_mut().filter_map(step).collect()
}
