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
use image::RgbaImage;
use std::time::Instant;
use yuv_scale::{yuv420_scale_to_rgba, RotationMode, YuvPlanarImage};

/// Synthetic 4:2:0 test frame, smooth luma gradient over color bars.
fn make_frame(width: u32, height: u32) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let chroma_width = width.div_ceil(2) as usize;
    let chroma_height = height.div_ceil(2) as usize;
    let mut y_plane = vec![0u8; width as usize * height as usize];
    let mut u_plane = vec![0u8; chroma_width * chroma_height];
    let mut v_plane = vec![0u8; chroma_width * chroma_height];

    for y in 0..height as usize {
        for x in 0..width as usize {
            y_plane[y * width as usize + x] =
                (16 + (x * 219 / width as usize + y * 219 / height as usize) / 2) as u8;
        }
    }
    for y in 0..chroma_height {
        for x in 0..chroma_width {
            let bar = x * 8 / chroma_width;
            u_plane[y * chroma_width + x] = (bar * 255 / 7) as u8;
            v_plane[y * chroma_width + x] = 255 - (bar * 255 / 7) as u8;
        }
    }
    (y_plane, u_plane, v_plane)
}

fn main() {
    let width = 1920u32;
    let height = 1080u32;
    let (y_plane, u_plane, v_plane) = make_frame(width, height);

    let planar_image = YuvPlanarImage {
        y_plane: &y_plane,
        y_stride: width,
        u_plane: &u_plane,
        u_stride: width.div_ceil(2),
        v_plane: &v_plane,
        v_stride: width.div_ceil(2),
        width,
        height,
    };

    let targets = [
        ("identity", width, height, RotationMode::Rotate0),
        ("half", width / 2, height / 2, RotationMode::Rotate0),
        ("arbitrary", 1280, 720, RotationMode::Rotate0),
        ("rotate180", 1280, 720, RotationMode::Rotate180),
        ("mirror", 1280, 720, RotationMode::MirrorRotate0),
    ];

    for (name, scaled_width, scaled_height, rotation) in targets {
        let mut rgba = vec![0u8; scaled_width as usize * scaled_height as usize * 4];
        let start_time = Instant::now();
        yuv420_scale_to_rgba(
            &planar_image,
            &mut rgba,
            scaled_width * 4,
            scaled_width,
            scaled_height,
            rotation,
        )
        .unwrap();
        println!(
            "scale {} {}x{} -> {}x{}: {:?}",
            name,
            width,
            height,
            scaled_width,
            scaled_height,
            start_time.elapsed()
        );

        let img = RgbaImage::from_raw(scaled_width, scaled_height, rgba)
            .expect("frame dimensions match the buffer");
        img.save(format!("scaled_{}.png", name)).unwrap();
    }
}
