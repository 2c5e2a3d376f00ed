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

const CLIP_OVERFLOW: usize = 128;
const CLIP_TABLE_SIZE: usize = 256;

/// Saturation table for 8.8 fixed point channel values.
///
/// Entries below the identity span resolve to 0, entries above it to 255, so
/// a rebased lookup replaces both range branches. Built at compile time,
/// never mutated, safe for unsynchronized concurrent reads.
static RGB_CLIP_TABLE: [u8; CLIP_OVERFLOW + CLIP_TABLE_SIZE + CLIP_OVERFLOW] = make_clip_table();

const fn make_clip_table() -> [u8; CLIP_OVERFLOW + CLIP_TABLE_SIZE + CLIP_OVERFLOW] {
    let mut table = [0u8; CLIP_OVERFLOW + CLIP_TABLE_SIZE + CLIP_OVERFLOW];
    let mut i = CLIP_OVERFLOW;
    while i < CLIP_OVERFLOW + CLIP_TABLE_SIZE {
        table[i] = (i - CLIP_OVERFLOW) as u8;
        i += 1;
    }
    let mut i = CLIP_OVERFLOW + CLIP_TABLE_SIZE;
    while i < CLIP_OVERFLOW + CLIP_TABLE_SIZE + CLIP_OVERFLOW {
        table[i] = 255;
        i += 1;
    }
    table
}

/// Clips an 8.8 fixed point value to an unsigned channel byte.
///
/// The index saturates into the table, full range 8-bit inputs may overshoot
/// the ±128 margin on the brightest chroma extremes.
#[inline(always)]
pub(crate) fn clip(value: i32) -> u8 {
    let index = (value >> 8) + CLIP_OVERFLOW as i32;
    RGB_CLIP_TABLE[index.clamp(0, (RGB_CLIP_TABLE.len() - 1) as i32) as usize]
}
