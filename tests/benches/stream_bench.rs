use std::io::{self, Cursor};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mcrypt_engine::StreamOptions;
use mcrypt_tests::fixtures::{data, keyed};

fn bench_stream_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream-encrypt");

    for (algorithm, mode) in [("rijndael-128", "cbc"), ("idea", "ncfb"), ("arcfour", "stream")] {
        for size in [1024usize, 64 * 1024, 1024 * 1024] {
            let plaintext = data(size, 1);
            let mut ctx = keyed(algorithm, mode, 2);
            let options = StreamOptions::for_encrypt();

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{algorithm}/{mode}"), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        ctx.reinit().unwrap();
                        ctx.encrypt_file(Cursor::new(&plaintext), io::sink(), &options)
                            .unwrap();
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_buffer_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer-blocks");
    let plaintext = data(1024 * 1024, 3);
    group.throughput(Throughput::Bytes(plaintext.len() as u64));

    for blocks in [16usize, 256, 1024, 8192] {
        let mut ctx = keyed("rijndael-128", "ctr", 4);
        let options = StreamOptions::for_encrypt().with_buffer_blocks(blocks);
        group.bench_with_input(BenchmarkId::from_parameter(blocks), &blocks, |b, _| {
            b.iter(|| {
                ctx.reinit().unwrap();
                ctx.encrypt_file(Cursor::new(&plaintext), io::sink(), &options)
                    .unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stream_encrypt, bench_buffer_blocks);
criterion_main!(benches);
