/*
 * Copyright (c) Radzivon Bartoshyk, 3/2025. All rights reserved.
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

#![no_main]

use libfuzzer_sys::fuzz_target;
use yuv_scale::{
    yuv420_scale_to_bgra, yuv420_scale_to_rgba, yuv422_scale_to_bgra, yuv422_scale_to_rgba,
    RotationMode, YuvPlanarImage,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8, u8, u8)| {
    fuzz_scale_420(data.0, data.1, data.2, data.3, data.4, data.5, data.6, data.7);
    fuzz_scale_422(data.0, data.1, data.2, data.3, data.4, data.5, data.6, data.7);
});

fn rotation_from(value: u8) -> RotationMode {
    match value % 8 {
        0 => RotationMode::Rotate0,
        1 => RotationMode::Rotate90,
        2 => RotationMode::Rotate180,
        3 => RotationMode::Rotate270,
        4 => RotationMode::MirrorRotate0,
        5 => RotationMode::MirrorRotate90,
        6 => RotationMode::MirrorRotate180,
        _ => RotationMode::MirrorRotate270,
    }
}

#[allow(clippy::too_many_arguments)]
fn fuzz_scale_420(
    i_width: u8,
    i_height: u8,
    scaled_width: u8,
    scaled_height: u8,
    y_value: u8,
    u_value: u8,
    v_value: u8,
    rotation_value: u8,
) {
    if i_width == 0 || i_height == 0 || scaled_width == 0 || scaled_height == 0 {
        return;
    }
    let y_plane = vec![y_value; i_height as usize * i_width as usize];
    let u_plane =
        vec![u_value; (i_width as usize).div_ceil(2) * (i_height as usize).div_ceil(2)];
    let v_plane =
        vec![v_value; (i_width as usize).div_ceil(2) * (i_height as usize).div_ceil(2)];

    let planar_image = YuvPlanarImage {
        y_plane: &y_plane,
        y_stride: i_width as u32,
        u_plane: &u_plane,
        u_stride: (i_width as u32).div_ceil(2),
        v_plane: &v_plane,
        v_stride: (i_width as u32).div_ceil(2),
        width: i_width as u32,
        height: i_height as u32,
    };

    let rotation = rotation_from(rotation_value);
    let mut target_rgba =
        vec![0u8; scaled_width as usize * scaled_height as usize * 4];
    let result = yuv420_scale_to_rgba(
        &planar_image,
        &mut target_rgba,
        scaled_width as u32 * 4,
        scaled_width as u32,
        scaled_height as u32,
        rotation,
    );
    if rotation.is_supported() {
        result.unwrap();
        assert!(target_rgba.chunks_exact(4).all(|px| px[3] == 255));
    } else {
        assert!(result.is_err());
    }

    let mut target_bgra =
        vec![0u8; scaled_width as usize * scaled_height as usize * 4];
    _ = yuv420_scale_to_bgra(
        &planar_image,
        &mut target_bgra,
        scaled_width as u32 * 4,
        scaled_width as u32,
        scaled_height as u32,
        rotation,
    );
}

#[allow(clippy::too_many_arguments)]
fn fuzz_scale_422(
    i_width: u8,
    i_height: u8,
    scaled_width: u8,
    scaled_height: u8,
    y_value: u8,
    u_value: u8,
    v_value: u8,
    rotation_value: u8,
) {
    if i_width == 0 || i_height == 0 || scaled_width == 0 || scaled_height == 0 {
        return;
    }
    let y_plane = vec![y_value; i_height as usize * i_width as usize];
    let u_plane = vec![u_value; (i_width as usize).div_ceil(2) * i_height as usize];
    let v_plane = vec![v_value; (i_width as usize).div_ceil(2) * i_height as usize];

    let planar_image = YuvPlanarImage {
        y_plane: &y_plane,
        y_stride: i_width as u32,
        u_plane: &u_plane,
        u_stride: (i_width as u32).div_ceil(2),
        v_plane: &v_plane,
        v_stride: (i_width as u32).div_ceil(2),
        width: i_width as u32,
        height: i_height as u32,
    };

    let rotation = rotation_from(rotation_value);
    let mut target_rgba =
        vec![0u8; scaled_width as usize * scaled_height as usize * 4];
    _ = yuv422_scale_to_rgba(
        &planar_image,
        &mut target_rgba,
        scaled_width as u32 * 4,
        scaled_width as u32,
        scaled_height as u32,
        rotation,
    );

    let mut target_bgra =
        vec![0u8; scaled_width as usize * scaled_height as usize * 4];
    _ = yuv422_scale_to_bgra(
        &planar_image,
        &mut target_bgra,
        scaled_width as u32 * 4,
        scaled_width as u32,
        scaled_height as u32,
        rotation,
    );
}
