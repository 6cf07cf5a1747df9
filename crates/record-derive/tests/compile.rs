// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#[test]
fn compile_pass() {
    let t = trybuild::TestCases::new();
    t.pass("tests/cases/pass/*.rs");
}

#[test]
fn compile_fail() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/cases/fail/*.rs");
}

#[cfg(all(feature = "uuid", feature = "chrono"))]
#[test]
fn compile_pass_foreign_types() {
    let t = trybuild::TestCases::new();
    t.pass("tests/cases/features/*.rs");
}
