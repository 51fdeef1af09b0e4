/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pixedit_benches::bench_image;
use pixedit_core::image::RasterImage;
use pixedit_core::traits::OperationsTrait;
use pixedit_imageprocs::box_blur::BoxBlur;
use pixedit_imageprocs::brighten::Brighten;
use pixedit_imageprocs::edge_detect::EdgeDetect;
use pixedit_imageprocs::grayscale::Grayscale;
use pixedit_imageprocs::invert::Invert;
use pixedit_imageprocs::mirror::{Mirror, MirrorMode};
use pixedit_imageprocs::rotate::Rotate;

fn bench_operation<T: OperationsTrait>(c: &mut Criterion, name: &str, operation: T) {
    let image: RasterImage = bench_image();

    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Bytes(image.metadata().byte_size() as u64));

    group.bench_function("pixedit", |b| {
        b.iter(|| {
            let im = operation.clone_and_execute(&image).unwrap();
            black_box(im);
        })
    });
}

fn bench_rotate90(c: &mut Criterion) {
    bench_operation(c, "imageprocs: rotate 90", Rotate::right());
}

fn bench_rotate180(c: &mut Criterion) {
    bench_operation(c, "imageprocs: rotate 180", Rotate::new(2));
}

fn bench_mirror_horizontal(c: &mut Criterion) {
    bench_operation(
        c,
        "imageprocs: mirror-horizontal",
        Mirror::new(MirrorMode::Horizontal)
    );
}

fn bench_mirror_vertical(c: &mut Criterion) {
    bench_operation(
        c,
        "imageprocs: mirror-vertical",
        Mirror::new(MirrorMode::Vertical)
    );
}

fn bench_greyscale(c: &mut Criterion) {
    bench_operation(c, "imageprocs: greyscale", Grayscale::new());
}

fn bench_invert(c: &mut Criterion) {
    bench_operation(c, "imageprocs: invert", Invert::new());
}

fn bench_brighten(c: &mut Criterion) {
    bench_operation(c, "imageprocs: brighten", Brighten::new(0.25));
}

fn bench_blur(c: &mut Criterion) {
    bench_operation(c, "imageprocs: box-blur 5x5", BoxBlur::default());
}

fn bench_edge_detect(c: &mut Criterion) {
    bench_operation(c, "imageprocs: edge-detect", EdgeDetect::new());
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(10))
      };
    targets=bench_rotate90,bench_rotate180,bench_mirror_horizontal,bench_mirror_vertical,bench_greyscale,bench_invert,bench_brighten,bench_blur,bench_edge_detect);

criterion_main!(benches);
