//! Value-layer tests, grouped by primitive.

mod operators_tests;
mod value_tests;
