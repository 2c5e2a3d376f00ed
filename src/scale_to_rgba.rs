/*
 * Copyright (c) Radzivon Bartoshyk, 2/2025. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::scale_row::{half_row_to_rgbx, scale_row_to_rgbx};
use crate::yuv_error::check_rgba_destination;
use crate::yuv_support::{PackedChannels, RotationMode, YuvChromaSample};
use crate::{YuvError, YuvPlanarImage};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Reverses the packed pixels of one finished destination row.
#[inline]
fn mirror_packed_row(rgba_row: &mut [u8], scaled_width: usize, channels: usize) {
    for x in 0..scaled_width / 2 {
        let left = x * channels;
        let right = (scaled_width - 1 - x) * channels;
        for c in 0..channels {
            rgba_row.swap(left + c, right + c);
        }
    }
}

fn scale_yuv_to_rgbx<const DESTINATION_CHANNELS: u8, const SAMPLING: u8>(
    planar_image: &YuvPlanarImage,
    rgba: &mut [u8],
    rgba_stride: u32,
    scaled_width: u32,
    scaled_height: u32,
    rotation: RotationMode,
) -> Result<(), YuvError> {
    let chroma_subsampling: YuvChromaSample = SAMPLING.into();
    let dst_chans: PackedChannels = DESTINATION_CHANNELS.into();
    let channels = dst_chans.get_channels_count();

    if scaled_width == 0 || scaled_height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    if !rotation.is_supported() {
        return Err(YuvError::UnsupportedRotation(rotation));
    }
    planar_image.check_constraints(chroma_subsampling)?;
    check_rgba_destination(rgba, rgba_stride, scaled_width, scaled_height, channels)?;

    let width = planar_image.width as usize;
    let height = planar_image.height as usize;
    let scaled_width = scaled_width as usize;
    let scaled_height = scaled_height as usize;
    let chroma_width = chroma_subsampling.chroma_width(planar_image.width) as usize;

    let flip_columns = rotation.flips_columns();
    let flip_rows = rotation.flips_rows();

    let y_plane = planar_image.y_plane;
    let u_plane = planar_image.u_plane;
    let v_plane = planar_image.v_plane;
    let y_stride = planar_image.y_stride as usize;
    let u_stride = planar_image.u_stride as usize;
    let v_stride = planar_image.v_stride as usize;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = rgba.par_chunks_exact_mut(rgba_stride as usize);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = rgba.chunks_exact_mut(rgba_stride as usize);
    }

    iter.enumerate().for_each(|(y, rgba_row)| {
        // Bottom-to-top rotations fill destination rows from the opposite
        // end, the per row conversion itself is always the 0 degree one.
        let source_order_y = if flip_rows { scaled_height - 1 - y } else { y };
        let scaled_y = source_order_y * height / scaled_height;
        let chroma_y = match chroma_subsampling {
            YuvChromaSample::Yuv420 => scaled_y >> 1,
            YuvChromaSample::Yuv422 => scaled_y,
        };

        let y_row = &y_plane[scaled_y * y_stride..][..width];
        let u_row = &u_plane[chroma_y * u_stride..][..chroma_width];
        let v_row = &v_plane[chroma_y * v_stride..][..chroma_width];
        let rgba_row = &mut rgba_row[..scaled_width * channels];

        if width == scaled_width * 2 {
            half_row_to_rgbx::<DESTINATION_CHANNELS>(y_row, u_row, v_row, rgba_row, scaled_width);
        } else {
            scale_row_to_rgbx::<DESTINATION_CHANNELS>(
                y_row,
                u_row,
                v_row,
                rgba_row,
                width,
                scaled_width,
            );
        }

        if flip_columns {
            mirror_packed_row(rgba_row, scaled_width, channels);
        }
    });

    Ok(())
}

/// Scales a YUV 420 planar frame to RGBA while converting.
///
/// Vertical resampling is nearest neighbor, horizontal resampling blends
/// neighboring luma samples with quarter pixel accuracy. The color
/// transform is the fixed point BT.601 TV range matrix, alpha is always
/// fully opaque.
///
/// # Arguments
///
/// * `planar_image` - Source planar image.
/// * `rgba` - A mutable slice to store the scaled RGBA data.
/// * `rgba_stride` - Elements per destination row.
/// * `scaled_width` - Destination width in pixels, must not be zero.
/// * `scaled_height` - Destination height in pixels, must not be zero.
/// * `rotation` - Rotation applied while scaling. Only 0, 180 and their
///   mirrored forms are supported, the rest are rejected.
///
pub fn yuv420_scale_to_rgba(
    planar_image: &YuvPlanarImage,
    rgba: &mut [u8],
    rgba_stride: u32,
    scaled_width: u32,
    scaled_height: u32,
    rotation: RotationMode,
) -> Result<(), YuvError> {
    scale_yuv_to_rgbx::<{ PackedChannels::Rgba as u8 }, { YuvChromaSample::Yuv420 as u8 }>(
        planar_image,
        rgba,
        rgba_stride,
        scaled_width,
        scaled_height,
        rotation,
    )
}

/// Scales a YUV 420 planar frame to BGRA while converting.
///
/// BGRA byte order is little-endian packed 32 bit ARGB. See
/// [yuv420_scale_to_rgba] for the sampling and transform details.
///
/// # Arguments
///
/// * `planar_image` - Source planar image.
/// * `bgra` - A mutable slice to store the scaled BGRA data.
/// * `bgra_stride` - Elements per destination row.
/// * `scaled_width` - Destination width in pixels, must not be zero.
/// * `scaled_height` - Destination height in pixels, must not be zero.
/// * `rotation` - Rotation applied while scaling. Only 0, 180 and their
///   mirrored forms are supported, the rest are rejected.
///
pub fn yuv420_scale_to_bgra(
    planar_image: &YuvPlanarImage,
    bgra: &mut [u8],
    bgra_stride: u32,
    scaled_width: u32,
    scaled_height: u32,
    rotation: RotationMode,
) -> Result<(), YuvError> {
    scale_yuv_to_rgbx::<{ PackedChannels::Bgra as u8 }, { YuvChromaSample::Yuv420 as u8 }>(
        planar_image,
        bgra,
        bgra_stride,
        scaled_width,
        scaled_height,
        rotation,
    )
}

/// Scales a YUV 422 planar frame to RGBA while converting.
///
/// Chroma rows are full height for this layout, otherwise identical to
/// [yuv420_scale_to_rgba].
///
/// # Arguments
///
/// * `planar_image` - Source planar image.
/// * `rgba` - A mutable slice to store the scaled RGBA data.
/// * `rgba_stride` - Elements per destination row.
/// * `scaled_width` - Destination width in pixels, must not be zero.
/// * `scaled_height` - Destination height in pixels, must not be zero.
/// * `rotation` - Rotation applied while scaling. Only 0, 180 and their
///   mirrored forms are supported, the rest are rejected.
///
pub fn yuv422_scale_to_rgba(
    planar_image: &YuvPlanarImage,
    rgba: &mut [u8],
    rgba_stride: u32,
    scaled_width: u32,
    scaled_height: u32,
    rotation: RotationMode,
) -> Result<(), YuvError> {
    scale_yuv_to_rgbx::<{ PackedChannels::Rgba as u8 }, { YuvChromaSample::Yuv422 as u8 }>(
        planar_image,
        rgba,
        rgba_stride,
        scaled_width,
        scaled_height,
        rotation,
    )
}

/// Scales a YUV 422 planar frame to BGRA while converting.
///
/// BGRA byte order is little-endian packed 32 bit ARGB. See
/// [yuv422_scale_to_rgba] for the sampling and transform details.
///
/// # Arguments
///
/// * `planar_image` - Source planar image.
/// * `bgra` - A mutable slice to store the scaled BGRA data.
/// * `bgra_stride` - Elements per destination row.
/// * `scaled_width` - Destination width in pixels, must not be zero.
/// * `scaled_height` - Destination height in pixels, must not be zero.
/// * `rotation` - Rotation applied while scaling. Only 0, 180 and their
///   mirrored forms are supported, the rest are rejected.
///
pub fn yuv422_scale_to_bgra(
    planar_image: &YuvPlanarImage,
    bgra: &mut [u8],
    bgra_stride: u32,
    scaled_width: u32,
    scaled_height: u32,
    rotation: RotationMode,
) -> Result<(), YuvError> {
    scale_yuv_to_rgbx::<{ PackedChannels::Bgra as u8 }, { YuvChromaSample::Yuv422 as u8 }>(
        planar_image,
        bgra,
        bgra_stride,
        scaled_width,
        scaled_height,
        rotation,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    struct PlanarFrame {
        y_plane: Vec<u8>,
        u_plane: Vec<u8>,
        v_plane: Vec<u8>,
        width: u32,
        height: u32,
        subsampling: YuvChromaSample,
    }

    impl PlanarFrame {
        fn random(width: u32, height: u32, subsampling: YuvChromaSample) -> Self {
            let mut rng = rand::rng();
            let chroma_size = (subsampling.chroma_width(width) * subsampling.chroma_height(height))
                as usize;
            PlanarFrame {
                y_plane: (0..width as usize * height as usize)
                    .map(|_| rng.random_range(0..=255))
                    .collect(),
                u_plane: (0..chroma_size).map(|_| rng.random_range(0..=255)).collect(),
                v_plane: (0..chroma_size).map(|_| rng.random_range(0..=255)).collect(),
                width,
                height,
                subsampling,
            }
        }

        fn solid(width: u32, height: u32, subsampling: YuvChromaSample, yuv: [u8; 3]) -> Self {
            let chroma_size = (subsampling.chroma_width(width) * subsampling.chroma_height(height))
                as usize;
            PlanarFrame {
                y_plane: vec![yuv[0]; width as usize * height as usize],
                u_plane: vec![yuv[1]; chroma_size],
                v_plane: vec![yuv[2]; chroma_size],
                width,
                height,
                subsampling,
            }
        }

        fn image(&self) -> YuvPlanarImage<'_> {
            YuvPlanarImage {
                y_plane: &self.y_plane,
                y_stride: self.width,
                u_plane: &self.u_plane,
                u_stride: self.subsampling.chroma_width(self.width),
                v_plane: &self.v_plane,
                v_stride: self.subsampling.chroma_width(self.width),
                width: self.width,
                height: self.height,
            }
        }

        fn scale_rgba(
            &self,
            scaled_width: u32,
            scaled_height: u32,
            rotation: RotationMode,
        ) -> Vec<u8> {
            let mut rgba = vec![0u8; scaled_width as usize * scaled_height as usize * 4];
            let result = match self.subsampling {
                YuvChromaSample::Yuv420 => yuv420_scale_to_rgba(
                    &self.image(),
                    &mut rgba,
                    scaled_width * 4,
                    scaled_width,
                    scaled_height,
                    rotation,
                ),
                YuvChromaSample::Yuv422 => yuv422_scale_to_rgba(
                    &self.image(),
                    &mut rgba,
                    scaled_width * 4,
                    scaled_width,
                    scaled_height,
                    rotation,
                ),
            };
            result.unwrap();
            rgba
        }
    }

    fn reference_pixel(y: u8, u: u8, v: u8) -> [f64; 3] {
        let y = (y as f64 - 16.0) * (255.0 / 219.0);
        let d = u as f64 - 128.0;
        let e = v as f64 - 128.0;
        let uv_scale = 255.0 / 224.0;
        let r = y + 2.0 * (1.0 - 0.299) * uv_scale * e;
        let b = y + 2.0 * (1.0 - 0.114) * uv_scale * d;
        let g = y - 2.0 * (1.0 - 0.114) * 0.114 / 0.587 * uv_scale * d
            - 2.0 * (1.0 - 0.299) * 0.299 / 0.587 * uv_scale * e;
        [
            r.clamp(0.0, 255.0),
            g.clamp(0.0, 255.0),
            b.clamp(0.0, 255.0),
        ]
    }

    fn assert_close(actual: &[u8], expected: [f64; 3], tolerance: f64, context: &str) {
        for (channel, (&a, e)) in actual.iter().zip(expected.iter()).enumerate() {
            assert!(
                (a as f64 - e).abs() <= tolerance,
                "{}: channel {} was {} but the reference value is {}",
                context,
                channel,
                a,
                e
            );
        }
    }

    #[test]
    fn identity_scale_matches_float_reference_420() {
        let frame = PlanarFrame::random(64, 48, YuvChromaSample::Yuv420);
        let rgba = frame.scale_rgba(64, 48, RotationMode::Rotate0);
        for y in 0..48usize {
            for x in 0..64usize {
                let pixel = &rgba[(y * 64 + x) * 4..][..4];
                let chroma_index = (y / 2) * 32 + x / 2;
                let expected = reference_pixel(
                    frame.y_plane[y * 64 + x],
                    frame.u_plane[chroma_index],
                    frame.v_plane[chroma_index],
                );
                assert_close(pixel, expected, 2.0, &format!("pixel ({}, {})", x, y));
                assert_eq!(pixel[3], 255);
            }
        }
    }

    #[test]
    fn identity_scale_matches_float_reference_422() {
        let frame = PlanarFrame::random(32, 20, YuvChromaSample::Yuv422);
        let rgba = frame.scale_rgba(32, 20, RotationMode::Rotate0);
        for y in 0..20usize {
            for x in 0..32usize {
                let pixel = &rgba[(y * 32 + x) * 4..][..4];
                let chroma_index = y * 16 + x / 2;
                let expected = reference_pixel(
                    frame.y_plane[y * 32 + x],
                    frame.u_plane[chroma_index],
                    frame.v_plane[chroma_index],
                );
                assert_close(pixel, expected, 2.0, &format!("pixel ({}, {})", x, y));
            }
        }
    }

    #[test]
    fn white_frame_saturates_every_channel() {
        let frame = PlanarFrame::solid(2, 2, YuvChromaSample::Yuv420, [235, 128, 128]);
        let rgba = frame.scale_rgba(2, 2, RotationMode::Rotate0);
        for pixel in rgba.chunks_exact(4) {
            for &channel in &pixel[..3] {
                assert!(channel >= 253, "white converted to {}", channel);
            }
            assert_eq!(pixel[3], 255);
        }
    }

    #[test]
    fn rotate180_reverses_rows_and_columns() {
        let frame = PlanarFrame::random(20, 10, YuvChromaSample::Yuv420);
        let (scaled_width, scaled_height) = (13usize, 7usize);
        let upright = frame.scale_rgba(13, 7, RotationMode::Rotate0);
        let rotated = frame.scale_rgba(13, 7, RotationMode::Rotate180);
        for y in 0..scaled_height {
            for x in 0..scaled_width {
                let expected =
                    &upright[((scaled_height - 1 - y) * scaled_width + (scaled_width - 1 - x)) * 4..][..4];
                let actual = &rotated[(y * scaled_width + x) * 4..][..4];
                assert_eq!(actual, expected, "mismatch at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn mirror_rotate0_reverses_columns_only() {
        let frame = PlanarFrame::random(16, 9, YuvChromaSample::Yuv422);
        let (scaled_width, scaled_height) = (11usize, 5usize);
        let upright = frame.scale_rgba(11, 5, RotationMode::Rotate0);
        let mirrored = frame.scale_rgba(11, 5, RotationMode::MirrorRotate0);
        for y in 0..scaled_height {
            for x in 0..scaled_width {
                let expected = &upright[(y * scaled_width + (scaled_width - 1 - x)) * 4..][..4];
                let actual = &mirrored[(y * scaled_width + x) * 4..][..4];
                assert_eq!(actual, expected, "mismatch at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn mirror_rotate180_reverses_rows_only() {
        let frame = PlanarFrame::random(16, 9, YuvChromaSample::Yuv420);
        let (scaled_width, scaled_height) = (8usize, 6usize);
        let upright = frame.scale_rgba(8, 6, RotationMode::Rotate0);
        let flipped = frame.scale_rgba(8, 6, RotationMode::MirrorRotate180);
        for y in 0..scaled_height {
            let expected = &upright[(scaled_height - 1 - y) * scaled_width * 4..][..scaled_width * 4];
            let actual = &flipped[y * scaled_width * 4..][..scaled_width * 4];
            assert_eq!(actual, expected, "mismatch at row {}", y);
        }
    }

    #[test]
    fn unsupported_rotations_are_reported() {
        let frame = PlanarFrame::random(8, 8, YuvChromaSample::Yuv420);
        let mut rgba = vec![0u8; 8 * 8 * 4];
        for rotation in [
            RotationMode::Rotate90,
            RotationMode::Rotate270,
            RotationMode::MirrorRotate90,
            RotationMode::MirrorRotate270,
        ] {
            let result = yuv420_scale_to_rgba(&frame.image(), &mut rgba, 8 * 4, 8, 8, rotation);
            assert!(matches!(result, Err(YuvError::UnsupportedRotation(_))));
        }
    }

    #[test]
    fn arbitrary_ratios_fill_every_pixel() {
        let dimensions = [(1u32, 1u32), (3, 3), (5, 4), (7, 7), (16, 16), (17, 5)];
        let scaled = [(1u32, 1u32), (2, 2), (3, 5), (8, 8), (31, 9)];
        let rotations = [
            RotationMode::Rotate0,
            RotationMode::Rotate180,
            RotationMode::MirrorRotate0,
            RotationMode::MirrorRotate180,
        ];
        for &(width, height) in dimensions.iter() {
            for subsampling in [YuvChromaSample::Yuv420, YuvChromaSample::Yuv422] {
                let frame = PlanarFrame::random(width, height, subsampling);
                for &(scaled_width, scaled_height) in scaled.iter() {
                    for rotation in rotations {
                        let rgba = frame.scale_rgba(scaled_width, scaled_height, rotation);
                        // Alpha doubles as a full coverage witness, the
                        // buffers start zeroed.
                        for pixel in rgba.chunks_exact(4) {
                            assert_eq!(pixel[3], 255);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn half_width_downscale_averages_luma_pairs() {
        let mut frame = PlanarFrame::solid(8, 2, YuvChromaSample::Yuv420, [0, 128, 128]);
        frame.y_plane = vec![0, 255, 100, 200, 16, 235, 50, 50, 0, 255, 100, 200, 16, 235, 50, 50];
        let rgba = frame.scale_rgba(4, 2, RotationMode::Rotate0);
        for y in 0..2usize {
            for x in 0..4usize {
                let pixel = &rgba[(y * 4 + x) * 4..][..4];
                let averaged = (frame.y_plane[y * 8 + x * 2] as u32
                    + frame.y_plane[y * 8 + x * 2 + 1] as u32)
                    / 2;
                let expected = reference_pixel(averaged as u8, 128, 128);
                assert_close(pixel, expected, 2.0, &format!("pixel ({}, {})", x, y));
            }
        }
    }

    #[test]
    fn padded_destination_stride_is_respected() {
        let frame = PlanarFrame::random(10, 6, YuvChromaSample::Yuv420);
        let stride = 10 * 4 + 12;
        let mut padded = vec![0u8; stride * 6];
        yuv420_scale_to_rgba(&frame.image(), &mut padded, stride as u32, 10, 6, RotationMode::Rotate0)
            .unwrap();
        let tight = frame.scale_rgba(10, 6, RotationMode::Rotate0);
        for y in 0..6usize {
            assert_eq!(
                &padded[y * stride..][..10 * 4],
                &tight[y * 10 * 4..][..10 * 4]
            );
            // Padding bytes stay untouched.
            assert!(padded[y * stride + 10 * 4..][..12].iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn padded_source_strides_are_respected() {
        let width = 6u32;
        let height = 4u32;
        let frame = PlanarFrame::random(width, height, YuvChromaSample::Yuv420);
        let y_stride = width as usize + 5;
        let chroma_stride = 3usize + 2;
        let mut y_padded = vec![0u8; y_stride * height as usize];
        let mut u_padded = vec![0u8; chroma_stride * 2];
        let mut v_padded = vec![0u8; chroma_stride * 2];
        for row in 0..height as usize {
            y_padded[row * y_stride..][..width as usize]
                .copy_from_slice(&frame.y_plane[row * width as usize..][..width as usize]);
        }
        for row in 0..2usize {
            u_padded[row * chroma_stride..][..3].copy_from_slice(&frame.u_plane[row * 3..][..3]);
            v_padded[row * chroma_stride..][..3].copy_from_slice(&frame.v_plane[row * 3..][..3]);
        }
        let padded_image = YuvPlanarImage {
            y_plane: &y_padded,
            y_stride: y_stride as u32,
            u_plane: &u_padded,
            u_stride: chroma_stride as u32,
            v_plane: &v_padded,
            v_stride: chroma_stride as u32,
            width,
            height,
        };
        let mut from_padded = vec![0u8; 6 * 4 * 4];
        yuv420_scale_to_rgba(&padded_image, &mut from_padded, 6 * 4, 6, 4, RotationMode::Rotate0)
            .unwrap();
        assert_eq!(from_padded, frame.scale_rgba(6, 4, RotationMode::Rotate0));
    }

    #[test]
    fn zero_destination_dimensions_are_rejected() {
        let frame = PlanarFrame::random(4, 4, YuvChromaSample::Yuv420);
        let mut rgba = vec![0u8; 16];
        assert!(matches!(
            yuv420_scale_to_rgba(&frame.image(), &mut rgba, 16, 0, 4, RotationMode::Rotate0),
            Err(YuvError::ZeroBaseSize)
        ));
        assert!(matches!(
            yuv420_scale_to_rgba(&frame.image(), &mut rgba, 16, 4, 0, RotationMode::Rotate0),
            Err(YuvError::ZeroBaseSize)
        ));
    }

    #[test]
    fn undersized_destination_is_rejected() {
        let frame = PlanarFrame::random(4, 4, YuvChromaSample::Yuv420);
        let mut rgba = vec![0u8; 4 * 4 * 4 - 4];
        assert!(yuv420_scale_to_rgba(&frame.image(), &mut rgba, 16, 4, 4, RotationMode::Rotate0)
            .is_err());
    }

    #[test]
    fn bgra_output_is_byte_swapped_rgba() {
        let frame = PlanarFrame::random(12, 8, YuvChromaSample::Yuv420);
        let rgba = frame.scale_rgba(9, 5, RotationMode::Rotate0);
        let mut bgra = vec![0u8; 9 * 5 * 4];
        yuv420_scale_to_bgra(&frame.image(), &mut bgra, 9 * 4, 9, 5, RotationMode::Rotate0)
            .unwrap();
        for (px_rgba, px_bgra) in rgba.chunks_exact(4).zip(bgra.chunks_exact(4)) {
            assert_eq!(px_rgba[0], px_bgra[2]);
            assert_eq!(px_rgba[1], px_bgra[1]);
            assert_eq!(px_rgba[2], px_bgra[0]);
            assert_eq!(px_bgra[3], 255);
        }
    }
}
