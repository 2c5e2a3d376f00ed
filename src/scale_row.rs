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
use crate::clip::clip;
use crate::yuv_support::{PackedChannels, BIAS_UV, BIAS_Y, BT601_TV, PRECISION};

// The horizontal walk runs in 28.4 fixed point. A shift by 4 isolates the
// luma sample, a shift by 5 further subsamples the half resolution chroma.
// The two fraction bits below the integer part select a quarter pixel
// blend weight pair for luma.
const QUARTER_WEIGHTS: [[i32; 2]; 4] = [[4, 0], [3, 1], [2, 2], [1, 3]];

#[inline(always)]
fn chroma_terms(u: u8, v: u8) -> (i32, i32, i32) {
    let d = u as i32 - BIAS_UV;
    let e = v as i32 - BIAS_UV;
    let rounding = 1 << (PRECISION - 1);
    let cb = BT601_TV.cb_coef * d + rounding;
    let cg = -BT601_TV.g_coeff_2 * d - BT601_TV.g_coeff_1 * e + rounding;
    let cr = BT601_TV.cr_coef * e + rounding;
    (cb, cg, cr)
}

#[inline(always)]
fn store_pixel<const DESTINATION_CHANNELS: u8>(
    rgba: &mut [u8],
    luma: i32,
    cb: i32,
    cg: i32,
    cr: i32,
) {
    let dst_chans: PackedChannels = DESTINATION_CHANNELS.into();
    let y_value = (luma - BIAS_Y) * BT601_TV.y_coef + (1 << (PRECISION - 1));
    rgba[dst_chans.get_r_channel_offset()] = clip(y_value + cr);
    rgba[dst_chans.get_g_channel_offset()] = clip(y_value + cg);
    rgba[dst_chans.get_b_channel_offset()] = clip(y_value + cb);
    rgba[dst_chans.get_a_channel_offset()] = 255;
}

/// Converts one scanline to packed pixels at an arbitrary horizontal ratio.
///
/// The walk is center aligned so an exact 2:1 ratio lands on the 50/50
/// blend of each sample pair, and an identity ratio degenerates to plain
/// per sample conversion with no blending. The one sample luma lookahead
/// saturates at the end of the row, source rows need no padding.
pub(crate) fn scale_row_to_rgbx<const DESTINATION_CHANNELS: u8>(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    rgba_row: &mut [u8],
    width: usize,
    scaled_width: usize,
) {
    let dst_chans: PackedChannels = DESTINATION_CHANNELS.into();
    let channels = dst_chans.get_channels_count();
    let scaled_dx = (width as u64 * 16 / scaled_width as u64) as i64;
    let phase = (scaled_dx - 16) >> 1;
    let last = width - 1;
    let mut scaled_x = phase;
    for rgba in rgba_row.chunks_exact_mut(channels).take(scaled_width) {
        let sx = scaled_x.max(0) as usize;
        let (cb, cg, cr) = chroma_terms(u_row[sx >> 5], v_row[sx >> 5]);
        let y0 = y_row[sx >> 4] as i32;
        let y1 = y_row[((sx >> 4) + 1).min(last)] as i32;
        let weights = QUARTER_WEIGHTS[(sx & 15) >> 2];
        let luma = (y0 * weights[0] + y1 * weights[1]) >> 2;
        store_pixel::<DESTINATION_CHANNELS>(rgba, luma, cb, cg, cr);
        scaled_x += scaled_dx;
    }
}

/// 2:1 fast path. Chroma is already at destination resolution and is read
/// 1:1, luma is the average of the two contributing samples.
pub(crate) fn half_row_to_rgbx<const DESTINATION_CHANNELS: u8>(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    rgba_row: &mut [u8],
    scaled_width: usize,
) {
    let dst_chans: PackedChannels = DESTINATION_CHANNELS.into();
    let channels = dst_chans.get_channels_count();
    for (x, rgba) in rgba_row
        .chunks_exact_mut(channels)
        .take(scaled_width)
        .enumerate()
    {
        let (cb, cg, cr) = chroma_terms(u_row[x], v_row[x]);
        let luma = (y_row[x * 2] as i32 + y_row[x * 2 + 1] as i32) >> 1;
        store_pixel::<DESTINATION_CHANNELS>(rgba, luma, cb, cg, cr);
    }
}
