//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod classify_spreads;

pub use classify_spreads::ClassifySpreadsUseCase;
