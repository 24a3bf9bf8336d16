//! Authentication backend adapters.

mod in_memory;

pub use in_memory::{
    DEFAULT_LATENCY, DEFAULT_LOGOUT_LATENCY, InMemoryAuthRepository, MOCK_TOKEN,
};
