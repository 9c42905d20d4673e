//! Sampled one-dimensional functions.
//!
//! A function is kept as a sorted set of `(x, y)` samples. The
//! [`sampling::FunctionSampler`] evaluates it at arbitrary arguments, densifies
//! sparse samples by midpoint insertion, fills samples with unknown values and
//! approximates derivatives by forward differences.

pub mod sampling;
