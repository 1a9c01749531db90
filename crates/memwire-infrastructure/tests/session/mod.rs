//! Session handler tests
