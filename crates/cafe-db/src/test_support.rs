//! Shared test utilities for cafe-db unit tests.
