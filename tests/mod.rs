// Integration tests for migsync

pub mod helpers;
