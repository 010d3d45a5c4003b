//! Miscellaneous helpers shared by unit tests, integration tests and demos.

pub mod testing;
