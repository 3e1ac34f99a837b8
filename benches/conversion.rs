use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use photon_color_conversion::*;

fn generate_rgb8_data(count: usize) -> Vec<u8> {
    (0..count * 3).map(|i| ((i * 37) % 256) as u8).collect()
}

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");
    group.bench_function("linearize", |b| {
        b.iter(|| linearize(black_box(Rgb::new(0.2f32, 0.5, 0.8))))
    });
    group.bench_function("gamma_encode", |b| {
        b.iter(|| gamma_encode(black_box(Rgb::new(0.2f32, 0.5, 0.8))))
    });
    group.bench_function("rgb_to_xyz", |b| {
        b.iter(|| convert_rgb_to_xyz(black_box(Rgb::new(0.2f32, 0.5, 0.8)), &SRGB_TO_XYZ_D65))
    });
    group.finish();
}

fn bench_image(c: &mut Criterion) {
    let (width, height) = (512u32, 512u32);
    let pixels = (width * height) as usize;
    let src = generate_rgb8_data(pixels);
    let mut xyz = vec![0f32; pixels * 3];
    let mut linear = vec![0f32; pixels * 3];

    let mut group = c.benchmark_group("image");
    group.throughput(Throughput::Elements(pixels as u64));
    group.bench_function("srgb_to_xyz", |b| {
        b.iter(|| srgb_to_xyz(black_box(&src), width * 3, &mut xyz, width * 3, width, height))
    });
    group.bench_function("rgb_to_linear", |b| {
        b.iter(|| {
            rgb_to_linear(
                black_box(&src),
                width * 3,
                &mut linear,
                width * 3,
                width,
                height,
                TransferFunction::Srgb,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, bench_scalar, bench_image);
criterion_main!(benches);
