mod common;
mod integration_tests;
