use bmp_blob::{convert::bgr_row_to_0rgb, convert_slice};
use core::hint::black_box;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

// Helper to generate a bottom-up 24-bit BMP with predictable pixel patterns
fn generate_test_bmp(width: usize, height: usize) -> Vec<u8> {
    let row_size = (width * 3).next_multiple_of(4);
    let mut data = vec![0u8; 54];
    data[0..2].copy_from_slice(b"BM");
    data[0x0A..0x0E].copy_from_slice(&54u32.to_le_bytes());
    data[0x0E..0x12].copy_from_slice(&40u32.to_le_bytes());
    data[0x12..0x16].copy_from_slice(&(width as i32).to_le_bytes());
    data[0x16..0x1A].copy_from_slice(&(height as i32).to_le_bytes());
    data[0x1A..0x1C].copy_from_slice(&1u16.to_le_bytes());
    data[0x1C..0x1E].copy_from_slice(&24u16.to_le_bytes());

    data.extend((0..row_size * height).map(|i| (i % 251) as u8));
    data
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BMP to 0RGB Conversion");

    // Odd width exercises row padding.
    for (width, height) in [(512, 512), (1920, 1080), (4095, 2048)] {
        let input = generate_test_bmp(width, height);
        let mut output = vec![0u8; width * height * 4];

        group.throughput(criterion::Throughput::Bytes((width * height * 3) as u64));
        group.bench_with_input(
            BenchmarkId::new("convert_slice", format!("{width}x{height}")),
            &input,
            |b, input| {
                b.iter(|| convert_slice(black_box(input), black_box(&mut output)).unwrap());
            },
        );
    }

    let row: Vec<u8> = (0..4096 * 3).map(|i| i as u8).collect();
    let mut row_output = vec![0u8; 4096 * 4];
    group.throughput(criterion::Throughput::Bytes(row.len() as u64));
    group.bench_function("bgr_row_to_0rgb 4096px", |b| {
        b.iter(|| bgr_row_to_0rgb(black_box(&row), black_box(&mut row_output)));
    });

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
