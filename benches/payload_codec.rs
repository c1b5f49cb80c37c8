// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_enhancer::domain::enhancement::{EnhancementMode, EnhancementRequest, ImagePayload};
use iced_enhancer::infrastructure::gemini::wire::GenerateContentRequest;
use iced_enhancer::media;
use std::hint::black_box;
use std::io::Cursor;

/// A 1024x768 gradient, roughly the size of a phone photo thumbnail.
fn sample_png() -> Vec<u8> {
    let image = image_rs::RgbImage::from_fn(1024, 768, |x, y| {
        image_rs::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
        .unwrap();
    bytes
}

fn payload_codec_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload_codec");
    let png = sample_png();
    let payload = ImagePayload::new(png.clone(), "image/png").unwrap();
    let encoded = payload.to_base64();

    group.bench_function("to_base64", |b| {
        b.iter(|| black_box(payload.to_base64()));
    });

    group.bench_function("from_base64", |b| {
        b.iter(|| black_box(ImagePayload::from_base64(&encoded, "image/png").unwrap()));
    });

    group.bench_function("request_body", |b| {
        let request = EnhancementRequest::new(payload.clone(), EnhancementMode::General);
        b.iter(|| {
            let body = GenerateContentRequest::from_request(&request);
            black_box(serde_json::to_vec(&body).unwrap())
        });
    });

    group.bench_function("payload_from_bytes", |b| {
        b.iter(|| black_box(media::payload_from_bytes(png.clone()).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, payload_codec_benchmark);
criterion_main!(benches);
