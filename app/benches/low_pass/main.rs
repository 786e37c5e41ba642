use criterion::{criterion_group, criterion_main, Criterion};
use libspectral::{
    forward_2d, zero_pad, DirectDft, FastDft, LowPassPipeline, SpectralImage, SpectralImageMut,
    ThreadingPolicy, TransformKind,
};

fn synthetic_scan(width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0u8; width as usize * height as usize];
    for (y, row) in data.chunks_exact_mut(width as usize).enumerate() {
        for (x, dst) in row.iter_mut().enumerate() {
            let ring = ((x * x + y * y) / 7) % 97;
            *dst = (ring as u32 * 2 + (x as u32 ^ y as u32) % 61) as u8;
        }
    }
    data
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut c = c.benchmark_group("LowPass");
    c.sample_size(10);

    let (width, height) = (48u32, 40u32);
    let src = synthetic_scan(width, height);
    let src_image = SpectralImage::borrow(&src, width, height);
    let padded = zero_pad::<u8, f64>(&src_image).unwrap();

    c.bench_function("Forward spectrum direct: 48x40", |b| {
        b.iter(|| {
            forward_2d(&padded, &DirectDft, ThreadingPolicy::Single).unwrap();
        })
    });

    c.bench_function("Forward spectrum direct adaptive: 48x40", |b| {
        b.iter(|| {
            forward_2d(&padded, &DirectDft, ThreadingPolicy::Adaptive).unwrap();
        })
    });

    c.bench_function("Forward spectrum fast: 48x40", |b| {
        let fast = FastDft::<f64>::new();
        b.iter(|| {
            forward_2d(&padded, &fast, ThreadingPolicy::Single).unwrap();
        })
    });

    let pipeline =
        LowPassPipeline::<f64>::with_kind(&src_image, TransformKind::Fast, ThreadingPolicy::Single)
            .unwrap();

    c.bench_function("Low pass reconstruct fast: D0 10", |b| {
        let mut dst = SpectralImageMut::alloc(width, height);
        b.iter(|| {
            pipeline.filter::<u8>(10., &mut dst).unwrap();
        })
    });

    c.bench_function("Low pass all cutoffs fast: D0 10, 160", |b| {
        b.iter(|| {
            pipeline.filter_all::<u8>(&[10., 160.]).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
