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

/// Integer YCbCr -> RGB transform coefficients.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct CbCrInverseTransform {
    pub y_coef: i32,
    pub cr_coef: i32,
    pub cb_coef: i32,
    pub g_coeff_1: i32,
    pub g_coeff_2: i32,
}

/// Fixed point precision of the color transform, low `PRECISION` bits are fractional.
pub(crate) const PRECISION: i32 = 8;

/// BT.601 TV range coefficients scaled by `1 << PRECISION`.
pub(crate) const BT601_TV: CbCrInverseTransform = CbCrInverseTransform {
    y_coef: 298,
    cr_coef: 409,
    cb_coef: 516,
    g_coeff_1: 208,
    g_coeff_2: 100,
};

pub(crate) const BIAS_Y: i32 = 16;
pub(crate) const BIAS_UV: i32 = 128;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Declares chroma plane subsampling of the source frame
pub enum YuvChromaSample {
    /// Chroma halved horizontally and vertically
    Yuv420 = 0,
    /// Chroma halved horizontally only
    Yuv422 = 1,
}

impl From<u8> for YuvChromaSample {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => YuvChromaSample::Yuv420,
            1 => YuvChromaSample::Yuv422,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl YuvChromaSample {
    #[inline]
    pub const fn chroma_width(&self, width: u32) -> u32 {
        width.div_ceil(2)
    }

    #[inline]
    pub const fn chroma_height(&self, height: u32) -> u32 {
        match self {
            YuvChromaSample::Yuv420 => height.div_ceil(2),
            YuvChromaSample::Yuv422 => height,
        }
    }
}

/// Declares view rotation applied while scaling.
///
/// Mirrored variants flip the frame around its vertical axis before the
/// rotation. Only `Rotate0`, `Rotate180` and their mirrored forms are
/// supported, the scalers report [crate::YuvError::UnsupportedRotation]
/// for the rest.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum RotationMode {
    Rotate0,
    Rotate90,
    Rotate180,
    Rotate270,
    MirrorRotate0,
    MirrorRotate90,
    MirrorRotate180,
    MirrorRotate270,
}

impl RotationMode {
    /// Rotations the scalers can express by reversing rows and columns.
    #[inline]
    pub const fn is_supported(self) -> bool {
        matches!(
            self,
            RotationMode::Rotate0
                | RotationMode::Rotate180
                | RotationMode::MirrorRotate0
                | RotationMode::MirrorRotate180
        )
    }

    /// Destination columns are filled right to left.
    #[inline]
    pub(crate) const fn flips_columns(self) -> bool {
        matches!(self, RotationMode::Rotate180 | RotationMode::MirrorRotate0)
    }

    /// Destination rows are filled bottom to top.
    #[inline]
    pub(crate) const fn flips_rows(self) -> bool {
        matches!(
            self,
            RotationMode::Rotate180 | RotationMode::MirrorRotate180
        )
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum PackedChannels {
    Rgba = 0,
    Bgra = 1,
}

impl From<u8> for PackedChannels {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => PackedChannels::Rgba,
            1 => PackedChannels::Bgra,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl PackedChannels {
    #[inline(always)]
    pub(crate) const fn get_channels_count(&self) -> usize {
        4
    }

    #[inline(always)]
    pub(crate) const fn get_r_channel_offset(&self) -> usize {
        match self {
            PackedChannels::Rgba => 0,
            PackedChannels::Bgra => 2,
        }
    }

    #[inline(always)]
    pub(crate) const fn get_g_channel_offset(&self) -> usize {
        1
    }

    #[inline(always)]
    pub(crate) const fn get_b_channel_offset(&self) -> usize {
        match self {
            PackedChannels::Rgba => 2,
            PackedChannels::Bgra => 0,
        }
    }

    #[inline(always)]
    pub(crate) const fn get_a_channel_offset(&self) -> usize {
        3
    }
}
