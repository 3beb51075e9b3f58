//! Vault resource operations built on the authenticated dispatcher.
//!
//! Each operation serializes its request, hands it to [`PamClient::send`](crate::PamClient::send)
//! through the shared JSON helpers, and decodes the answer. Non-success statuses surface as
//! [`RemoteError`](crate::error::RemoteError) with the vendor `ErrorCode`/`ErrorMessage`
//! intact, so callers can branch on them (for example, fetch an existing safe after a
//! duplicate-creation error).

pub mod account;
pub mod platform;
pub mod safe;
pub mod safe_member;

pub use account::*;
pub use platform::*;
pub use safe::*;
pub use safe_member::*;
