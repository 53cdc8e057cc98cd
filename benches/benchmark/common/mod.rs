use criterion::Criterion;
use erreur::{Erreur, Key, Stack};
use std::time::Duration;

// ============================================================================
// Shared keys & fixtures
// ============================================================================

pub struct Keys {
    pub user_id: Key<u64>,
    pub host: Key<&'static str>,
    pub attempt: Key<u32>,
    pub query: Key<String>,
}

impl Keys {
    pub fn new() -> Self {
        Self {
            user_id: Key::new("UserId"),
            host: Key::new("Host"),
            attempt: Key::new("Attempt"),
            query: Key::new("Query"),
        }
    }
}

/// An error annotated the way a request handler typically does it.
pub fn realistic_error(keys: &Keys) -> Erreur {
    Erreur::create("connection pool exhausted")
        .with_name("DatabaseError")
        .with(keys.host.provide("db-primary-01.company.local"))
        .with(keys.query.provide("SELECT * FROM users".to_string()))
        .with(keys.user_id.provide(42))
        .with(keys.attempt.provide(3))
}

/// A stack with `depth` entries cycling over four keys.
pub fn stack_of_depth(keys: &Keys, depth: usize) -> Stack {
    (0..depth).fold(Stack::new(), |stack, i| match i % 4 {
        0 => stack.push(keys.user_id.provide(i as u64)),
        1 => stack.push(keys.host.provide("db")),
        2 => stack.push(keys.attempt.provide(i as u32)),
        _ => stack.push(keys.query.provide(format!("q{i}"))),
    })
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
