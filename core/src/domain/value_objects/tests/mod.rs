//! Tests for the credential value objects

mod password_tests;
