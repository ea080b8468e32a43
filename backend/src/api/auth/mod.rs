//! Identity provider adapter.

mod session_status;
pub use session_status::{auth_status_for, session_auth_status};
