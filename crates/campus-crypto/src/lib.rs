//! Campus Crypto Library
//!
//! Password digests for the two credential families:
//! - Student and staff accounts use a salted, adaptive hash (Argon2id).
//! - ID-card viewing uses a fast unsalted digest (hex SHA-256). Equal
//!   passwords produce equal digests; kept only because stored cards
//!   depend on it.
//!
//! Both sit behind [`PasswordScheme`] so handlers never pick an algorithm
//! by name.

pub mod passwords;

pub use passwords::{AdaptiveSaltedHash, FastUnsaltedHash, PasswordScheme};
