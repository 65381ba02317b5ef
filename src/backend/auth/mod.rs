//! Authentication Module
//!
//! Logins for the three account kinds. There are no sessions or tokens: a
//! successful login returns the account record, without its password.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── accounts.rs     - Role-dispatched account lookup
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Response types
//!     ├── google.rs   - Federated login handler
//!     └── login.rs    - Credential login handler
//! ```
//!
//! # Login Flow
//!
//! 1. The role string is parsed (`admin`, `doctor`, `patient`); anything else is 400
//! 2. The account is looked up in that role's repository; missing is 404
//! 3. Credential login compares the password; a mismatch is 401

/// Role-dispatched account lookup
pub mod accounts;

/// HTTP handlers for login endpoints
pub mod handlers;

pub use accounts::Account;
pub use handlers::{google_login, login};
