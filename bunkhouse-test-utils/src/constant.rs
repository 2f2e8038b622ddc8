//! Shared constants for test environments.
//!
//! These values are placeholders for testing purposes, not real credentials.

/// Signing secret used for test tokens.
pub static TEST_JWT_SECRET: &str = "bunkhouse-test-secret";

/// Plaintext password shared by all fixture users.
pub static TEST_PASSWORD: &str = "password123";

/// Bcrypt cost for fixture password hashes.
///
/// Minimum cost to keep test setup fast; production hashing uses a higher cost.
pub const TEST_BCRYPT_COST: u32 = 4;
