use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba, RgbaImage};
use pixelveil_core::LsbCodec;

fn carrier_512() -> RgbaImage {
    ImageBuffer::from_fn(512, 512, |x, y| {
        let i = ((x + y * 17) % 256) as u8;
        Rgba([i, i.wrapping_add(85), i.wrapping_add(170), 255])
    })
}

fn embedding(c: &mut Criterion) {
    let carrier = carrier_512();
    let payload = vec![0xa5u8; 4096];

    c.bench_function("embed 4 KiB into 512x512", |b| {
        b.iter(|| LsbCodec::embed(black_box(&carrier), black_box(&payload)).unwrap())
    });
}

fn extraction(c: &mut Criterion) {
    let carrier = carrier_512();
    let payload = vec![0xa5u8; 4096];
    let secret = LsbCodec::embed(&carrier, &payload).unwrap();

    c.bench_function("extract 4 KiB from 512x512", |b| {
        b.iter(|| LsbCodec::extract(black_box(&secret)))
    });
}

criterion_group!(benches, embedding, extraction);
criterion_main!(benches);
