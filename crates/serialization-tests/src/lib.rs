//! Test crate for the `serde` feature of ndcell; see `tests/`.
