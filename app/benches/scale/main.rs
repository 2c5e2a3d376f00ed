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
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use yuv_scale::{
    yuv420_scale_to_bgra, yuv420_scale_to_rgba, yuv422_scale_to_rgba, RotationMode,
    YuvPlanarImage,
};

fn random_plane(size: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..size).map(|_| rng.random_range(0..=255)).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920u32;
    let height = 1080u32;
    let chroma_width = width.div_ceil(2);

    let y_plane = random_plane(width as usize * height as usize);
    let u_plane_420 = random_plane(chroma_width as usize * height.div_ceil(2) as usize);
    let v_plane_420 = random_plane(chroma_width as usize * height.div_ceil(2) as usize);
    let u_plane_422 = random_plane(chroma_width as usize * height as usize);
    let v_plane_422 = random_plane(chroma_width as usize * height as usize);

    let planar_420 = YuvPlanarImage {
        y_plane: &y_plane,
        y_stride: width,
        u_plane: &u_plane_420,
        u_stride: chroma_width,
        v_plane: &v_plane_420,
        v_stride: chroma_width,
        width,
        height,
    };

    let planar_422 = YuvPlanarImage {
        y_plane: &y_plane,
        y_stride: width,
        u_plane: &u_plane_422,
        u_stride: chroma_width,
        v_plane: &v_plane_422,
        v_stride: chroma_width,
        width,
        height,
    };

    c.bench_function("yuv420 identity 1920x1080", |b| {
        let mut rgba = vec![0u8; width as usize * height as usize * 4];
        b.iter(|| {
            yuv420_scale_to_rgba(
                &planar_420,
                &mut rgba,
                width * 4,
                width,
                height,
                RotationMode::Rotate0,
            )
            .unwrap();
        })
    });

    c.bench_function("yuv420 half 960x540", |b| {
        let mut rgba = vec![0u8; 960 * 540 * 4];
        b.iter(|| {
            yuv420_scale_to_rgba(
                &planar_420,
                &mut rgba,
                960 * 4,
                960,
                540,
                RotationMode::Rotate0,
            )
            .unwrap();
        })
    });

    c.bench_function("yuv420 arbitrary 1280x720", |b| {
        let mut rgba = vec![0u8; 1280 * 720 * 4];
        b.iter(|| {
            yuv420_scale_to_rgba(
                &planar_420,
                &mut rgba,
                1280 * 4,
                1280,
                720,
                RotationMode::Rotate0,
            )
            .unwrap();
        })
    });

    c.bench_function("yuv420 rotate180 1280x720", |b| {
        let mut bgra = vec![0u8; 1280 * 720 * 4];
        b.iter(|| {
            yuv420_scale_to_bgra(
                &planar_420,
                &mut bgra,
                1280 * 4,
                1280,
                720,
                RotationMode::Rotate180,
            )
            .unwrap();
        })
    });

    c.bench_function("yuv422 identity 1920x1080", |b| {
        let mut rgba = vec![0u8; width as usize * height as usize * 4];
        b.iter(|| {
            yuv422_scale_to_rgba(
                &planar_422,
                &mut rgba,
                width * 4,
                width,
                height,
                RotationMode::Rotate0,
            )
            .unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
