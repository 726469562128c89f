//! Test-only helpers shared by unit tests.

pub mod fakes;
pub mod socket_guard;
