//! Integration tests for the circulation desk

mod circulation_tests;
mod console_tests;
