//! Tests for the `cchooks` binary.

mod inspect_test;
