//! Criterion benchmarks of the distance passes run by `coords bench`. See `benches/`.
