// Host-side tests for scroll-driven narrative layers and the progress bar.

#![allow(dead_code)]
include!("support/tree.rs");

use crate::constants::LAYER_THRESHOLDS;
use crate::core::narrative::*;

#[test]
fn layer_boundaries_are_exact() {
    assert_eq!(layer_for(0.0), 0);
    assert_eq!(layer_for(LAYER_THRESHOLDS[0] - 1e-4), 0);
    assert_eq!(layer_for(LAYER_THRESHOLDS[0]), 1);
    assert_eq!(layer_for(0.5), 1);
    assert_eq!(layer_for(LAYER_THRESHOLDS[1] - 1e-4), 1);
    assert_eq!(layer_for(LAYER_THRESHOLDS[1]), 2);
    assert_eq!(layer_for(1.0), 2);
}

#[test]
fn layer_for_out_of_range_positions() {
    assert_eq!(layer_for(-0.5), 0);
    assert_eq!(layer_for(7.0), 2);
}

#[test]
fn progress_width_formats_one_decimal() {
    assert_eq!(progress_width(0.0), "0.0%");
    assert_eq!(progress_width(0.5), "50.0%");
    assert_eq!(progress_width(0.1234), "12.3%");
    assert_eq!(progress_width(1.0), "100.0%");
    assert_eq!(progress_width(1.5), "100.0%");
    assert_eq!(progress_width(-0.2), "0.0%");
}

#[test]
fn tracker_reports_only_changes() {
    let mut t = NarrativeTracker::default();
    assert_eq!(t.current(), None);
    assert_eq!(t.update_layer(0.1), Some((0, LAYERS[0])));
    assert_eq!(t.update_layer(0.2), None);
    assert_eq!(t.update_layer(0.4), Some((1, LAYERS[1])));
    assert_eq!(t.update_layer(0.9), Some((2, LAYERS[2])));
    assert_eq!(t.update_layer(0.1), Some((0, LAYERS[0])));
    assert_eq!(t.current(), Some(0));

    assert_eq!(t.update_progress(0.25).as_deref(), Some("25.0%"));
    assert_eq!(t.update_progress(0.2501), None);
    assert_eq!(t.update_progress(0.3).as_deref(), Some("30.0%"));
}

#[test]
fn layers_have_titles() {
    assert_eq!(LAYERS.len(), LAYER_THRESHOLDS.len() + 1);
    assert!(LAYERS.iter().all(|l| !l.title.is_empty() && !l.body.is_empty()));
}
