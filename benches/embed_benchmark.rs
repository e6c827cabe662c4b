//! Performance benchmarks for the embedding service.
//!
//! Measures the parts of a request that the service itself owns, leaving
//! model inference out so results do not depend on ONNX Runtime or model
//! files being present.
//!
//! **Benchmarks Included:**
//! - `mean_pool`: attention-masked pooling at common sequence lengths
//! - `embed_request`: a full `/embed` round-trip through the router with a
//!   placeholder embedder
//!
//! **Run benchmarks:**
//! ```bash
//! cargo bench                      # Run all benchmarks
//! cargo bench -- mean_pool         # Pooling only
//! ```

use axum::body::Body;
use axum::http::{header, Request};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use embedding_service::embeddings::{l2_normalize, mean_pool, PlaceholderEmbedder};
use embedding_service::server::{App, ServerConfig};
use ndarray::Array2;
use tower::ServiceExt;

const HIDDEN: usize = 384;

#[allow(clippy::cast_precision_loss)]
fn bench_mean_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("mean_pool");

    for seq_len in [16usize, 64, 128] {
        let hidden_states = Array2::from_shape_fn((seq_len, HIDDEN), |(i, j)| {
            ((i * HIDDEN + j) % 97) as f32 / 97.0
        });
        let mask: Vec<i64> = (0..seq_len).map(|i| i64::from(i < seq_len * 3 / 4)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(seq_len), &seq_len, |b, _| {
            b.iter(|| {
                let mut pooled = mean_pool(black_box(hidden_states.view()), black_box(&mask));
                l2_normalize(&mut pooled);
                pooled
            });
        });
    }

    group.finish();
}

fn bench_embed_request(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("failed to build runtime");
    let router = App::new(
        ServerConfig::default(),
        PlaceholderEmbedder::new("bench/placeholder", HIDDEN),
    )
    .router();

    c.bench_function("embed_request", |b| {
        b.iter(|| {
            let request = Request::builder()
                .method("POST")
                .uri("/embed")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"text": "the quick brown fox"}"#))
                .expect("failed to build request");

            runtime.block_on(async {
                router
                    .clone()
                    .oneshot(request)
                    .await
                    .expect("request failed")
            })
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_mean_pool, bench_embed_request
}
criterion_main!(benches);
