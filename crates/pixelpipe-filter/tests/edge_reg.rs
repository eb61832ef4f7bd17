//! Test gradient-magnitude edge detection

use pixelpipe_core::{ChannelModel, PixelBuffer, PixelBufferMut};
use pixelpipe_filter::{detect_edges, FilterError};
use pixelpipe_test::{gradient_rgb, uniform_gray};

/// Create a grayscale image with a vertical step at x = split
fn make_vertical_step(width: u32, height: u32, split: u32) -> PixelBuffer {
    let mut m = PixelBufferMut::new(width, height, ChannelModel::Gray);
    for y in 0..height {
        for x in split..width {
            m.set_gray_unchecked(x, y, 255);
        }
    }
    m.into()
}

/// Create a grayscale image with a horizontal step at y = split
fn make_horizontal_step(width: u32, height: u32, split: u32) -> PixelBuffer {
    let mut m = PixelBufferMut::new(width, height, ChannelModel::Gray);
    for y in split..height {
        for x in 0..width {
            m.set_gray_unchecked(x, y, 255);
        }
    }
    m.into()
}

#[test]
fn test_vertical_step_marks_both_flanks() {
    let pix = make_vertical_step(8, 8, 4);
    let out = detect_edges(&pix, 70).unwrap();
    for y in 1..7 {
        // one pixel either side of the step sees the full gradient
        assert_eq!(out.gray(3, y), Some(255));
        assert_eq!(out.gray(4, y), Some(255));
        // two pixels away the neighborhood is flat
        assert_eq!(out.gray(2, y), Some(0));
        assert_eq!(out.gray(5, y), Some(0));
    }
}

#[test]
fn test_horizontal_step_detected_by_second_kernel() {
    let pix = make_horizontal_step(8, 8, 4);
    let out = detect_edges(&pix, 70).unwrap();
    for x in 1..7 {
        assert_eq!(out.gray(x, 3), Some(255));
        assert_eq!(out.gray(x, 4), Some(255));
        assert_eq!(out.gray(x, 2), Some(0));
        assert_eq!(out.gray(x, 5), Some(0));
    }
}

#[test]
fn test_diagonal_corner_combines_both_gradients() {
    // bright quadrant: both kernels respond at its corner
    let mut m = PixelBufferMut::new(8, 8, ChannelModel::Gray);
    for y in 4..8 {
        for x in 4..8 {
            m.set_gray_unchecked(x, y, 255);
        }
    }
    let pix: PixelBuffer = m.into();
    let out = detect_edges(&pix, 70).unwrap();
    assert_eq!(out.gray(3, 3), Some(255));
    assert_eq!(out.gray(1, 1), Some(0));
}

#[test]
fn test_output_is_binary() {
    let pix = make_vertical_step(10, 10, 5);
    let out = detect_edges(&pix, 70).unwrap();
    assert!(out.data().iter().all(|&s| s == 0 || s == 255));
    assert_eq!(out.channels(), ChannelModel::Gray);
    assert!(out.sizes_equal(&pix));
}

#[test]
fn test_border_ring_is_always_black() {
    let pix = make_vertical_step(6, 6, 1);
    let out = detect_edges(&pix, 0).unwrap();
    for x in 0..6 {
        assert_eq!(out.gray(x, 0), Some(0));
        assert_eq!(out.gray(x, 5), Some(0));
    }
    for y in 0..6 {
        assert_eq!(out.gray(0, y), Some(0));
        assert_eq!(out.gray(5, y), Some(0));
    }
}

#[test]
fn test_uniform_input_has_no_edges_at_zero_threshold() {
    let pix = uniform_gray(12, 12, 77);
    let out = detect_edges(&pix, 0).unwrap();
    assert!(out.data().iter().all(|&s| s == 0));
}

#[test]
fn test_color_input_is_rejected() {
    let pix = gradient_rgb(6, 6);
    let err = detect_edges(&pix, 70).unwrap_err();
    assert!(matches!(err, FilterError::UnsupportedChannels { .. }));
}
