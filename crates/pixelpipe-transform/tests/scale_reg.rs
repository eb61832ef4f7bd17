//! Test bilinear resize

use pixelpipe_core::{ChannelModel, PixelBuffer, PixelBufferMut};
use pixelpipe_test::{gradient_gray, gradient_rgb, max_sample_diff, uniform_gray};
use pixelpipe_transform::{resize, TransformError};

/// Create a grayscale image with a smooth horizontal ramp
fn make_ramp(width: u32, height: u32) -> PixelBuffer {
    let mut m = PixelBufferMut::new(width, height, ChannelModel::Gray);
    for y in 0..height {
        for x in 0..width {
            m.set_gray_unchecked(x, y, (x * 255 / (width - 1)) as u8);
        }
    }
    m.into()
}

#[test]
fn test_downscale_halves_dimensions() {
    let pix = gradient_gray(16, 10);
    let out = resize(&pix, 0.5).unwrap();
    assert_eq!(out.width(), 8);
    assert_eq!(out.height(), 5);
    assert_eq!(out.channels(), ChannelModel::Gray);
}

#[test]
fn test_upscale_doubles_dimensions() {
    let pix = gradient_rgb(7, 4);
    let out = resize(&pix, 2.0).unwrap();
    assert_eq!(out.width(), 14);
    assert_eq!(out.height(), 8);
    assert_eq!(out.channels(), ChannelModel::Rgb);
}

#[test]
fn test_identity_scale() {
    let pix = gradient_gray(9, 9);
    let out = resize(&pix, 1.0).unwrap();
    assert_eq!(max_sample_diff(&pix, &out), 0);
}

#[test]
fn test_downscale_samples_source_grid() {
    // halving an even-width ramp maps output x to source 2x exactly
    let pix = make_ramp(8, 4);
    let out = resize(&pix, 0.5).unwrap();
    for x in 0..4u32 {
        assert_eq!(out.gray(x, 1), pix.gray(x * 2, 2));
    }
}

#[test]
fn test_upscale_monotone_on_ramp() {
    let pix = make_ramp(6, 2);
    let out = resize(&pix, 3.0).unwrap();
    let mut prev = 0u8;
    for x in 0..out.width() {
        let v = out.gray(x, 0).unwrap();
        assert!(v >= prev, "ramp not monotone at {x}");
        prev = v;
    }
    assert_eq!(out.gray(0, 0), Some(0));
    assert_eq!(out.gray(out.width() - 1, 0), Some(255));
}

#[test]
fn test_uniform_invariant_under_any_scale() {
    let pix = uniform_gray(10, 10, 66);
    for scale in [0.3f32, 0.5, 0.77, 1.0, 1.9, 3.1] {
        let out = resize(&pix, scale).unwrap();
        assert!(out.data().iter().all(|&s| s == 66), "scale {scale}");
    }
}

#[test]
fn test_degenerate_and_invalid_scales() {
    let pix = uniform_gray(4, 4, 1);
    // small but valid scale floors to an empty buffer
    let out = resize(&pix, 0.2).unwrap();
    assert!(out.is_empty());
    // invalid scales are errors, not empty buffers
    for bad in [0.0f32, -0.5, f32::NAN, f32::INFINITY] {
        assert!(matches!(
            resize(&pix, bad),
            Err(TransformError::InvalidParameters(_))
        ));
    }
}

#[test]
fn test_resize_of_empty_buffer() {
    let pix = PixelBuffer::new(0, 5, ChannelModel::Gray);
    let out = resize(&pix, 2.0).unwrap();
    assert!(out.is_empty());
}
