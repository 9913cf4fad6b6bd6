// Host-side tests for the DOM-free helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod layout {
    include!("../src/layout.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use layout::*;
use std::cell::RefCell;

#[test]
fn dpr_is_capped_at_two() {
    assert_eq!(capped_dpr(1.0), 1.0);
    assert_eq!(capped_dpr(1.5), 1.5);
    assert_eq!(capped_dpr(3.0), 2.0);
    assert_eq!(capped_dpr(0.0), 1.0);
    assert_eq!(capped_dpr(f64::NAN), 1.0);
}

#[test]
fn backing_store_scales_css_size() {
    assert_eq!(backing_size(400.0, 300.0, 2.0), (800, 600));
    assert_eq!(backing_size(333.3, 100.0, 1.5), (500, 150));
    assert_eq!(backing_size(0.0, -10.0, 2.0), (1, 1));
}

#[test]
fn percent_label_rounds_and_clamps() {
    assert_eq!(percent_label(0.0), "0%");
    assert_eq!(percent_label(0.424), "42%");
    assert_eq!(percent_label(0.995), "100%");
    assert_eq!(percent_label(7.0), "100%");
    assert_eq!(percent_label(f32::NAN), "0%");
}

#[test]
fn frame_delta_is_clamped() {
    assert_eq!(clamp_frame_dt(0.016, constants::MAX_FRAME_DT_SEC), 0.016);
    assert_eq!(clamp_frame_dt(3.0, constants::MAX_FRAME_DT_SEC), 0.1);
    assert_eq!(clamp_frame_dt(-1.0, constants::MAX_FRAME_DT_SEC), 0.0);
    assert_eq!(clamp_frame_dt(f32::NAN, constants::MAX_FRAME_DT_SEC), 0.0);
}

#[test]
fn fractions_parse_plain_and_percent() {
    assert_eq!(parse_fraction(Some("0.75"), 0.8), 0.75);
    assert_eq!(parse_fraction(Some(" 25% "), 0.8), 0.25);
    assert_eq!(parse_fraction(Some(""), 0.8), 0.8);
    assert_eq!(parse_fraction(Some("top"), 0.2), 0.2);
    assert_eq!(parse_fraction(None, 0.2), 0.2);
}

#[test]
fn label_font_matches_canvas_shorthand() {
    assert_eq!(
        label_font(10.0, constants::LABEL_FONT_WEIGHT, constants::LABEL_FONT_FAMILY),
        "300 10.0px Montserrat, sans-serif"
    );
}

#[test]
fn step_all_releases_the_list_before_results_are_handled() {
    let list = RefCell::new(vec![0u32, 5, 9]);
    let done = step_all(&list, |n| {
        *n += 1;
        (*n >= 6).then_some(*n)
    });
    assert_eq!(done, vec![6, 10]);
    // a completion handler may step the list again
    for _ in &done {
        let again = step_all(&list, |n| {
            *n += 1;
            None::<u32>
        });
        assert!(again.is_empty());
    }
    assert_eq!(*list.borrow(), vec![3, 8, 12]);
}
