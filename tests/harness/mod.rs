#![allow(dead_code, unused_imports)]

pub(crate) mod fake_dcc;

pub(crate) use test_context::TestContext;
