//! Password strength checking library
//!
//! This library rates a password on a 1-10 scale derived from an entropy
//! estimate, and produces plain-language improvement tips. The entropy
//! estimate comes from a pluggable strength estimator (zxcvbn-backed by
//! default); the tips combine the estimator's own feedback with a set of
//! local heuristic checks.
//!
//! # Features
//!
//! - `async` (default): Enables a cancellable check and channel-based delivery
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Custom path to a common-password list file
//!   (default: `./assets/common-passwords.txt`). A small built-in list is
//!   always active, with or without a file.
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_check::{check_password, ZxcvbnEstimator};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let report = check_password(&ZxcvbnEstimator, &password, None);
//!
//! #[cfg(not(feature = "async"))]
//! let report = check_password(&ZxcvbnEstimator, &password);
//!
//! println!("{}", report.expect("check failed"));
//! ```

// Internal modules
mod advisor;
mod analyzer;
mod blacklist;
mod check;
mod estimator;
mod message;
mod sections;
mod types;

// Public API
pub use advisor::suggest_improvements;
pub use analyzer::analyze_password;
pub use blacklist::{
    BlacklistError, get_blacklist, init_blacklist, init_blacklist_from_path, is_blacklisted,
};
pub use check::{CheckError, check_password};
pub use estimator::{Estimate, EstimatorError, StrengthEstimator, ZxcvbnEstimator};
pub use message::compose_report;
pub use types::{ACCEPTABLE_SCORE, Analysis};

#[cfg(feature = "async")]
pub use check::check_password_tx;
