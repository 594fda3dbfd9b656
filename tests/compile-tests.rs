//! Borrow-checker guarantees of the public API.
//!
//! Sources under `tests/compile-tests/compile-fail` must be rejected by rustc
//! with the annotated `//~ ERROR`.

extern crate compiletest_rs as compiletest;
use std::path::PathBuf;

fn compile_fail_config() -> compiletest::Config {
    let mut config = compiletest::Config::default();
    config.mode = compiletest::common::Mode::CompileFail;
    config.src_base = PathBuf::from("tests/compile-tests/compile-fail");
    // Sources link against the freshly built blocking_queue rlib.
    config.target_rustcflags = Some("-L target/debug -L target/debug/deps".to_string());
    config.clean_rmeta();
    config
}

// Stale rlibs in target/debug/deps cause E0464: `cargo clean` on failure.
#[test]
fn batch_borrows_do_not_escape() {
    compiletest::run_tests(&compile_fail_config());
}
