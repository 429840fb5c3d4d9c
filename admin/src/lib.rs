//! Administrator-facing record management.
//!
//! - [`SessionGuard`]: two-state login machine (`LoggedOut` / `LoggedIn`),
//!   checking credentials through a pluggable [`Authenticator`].
//! - [`CrudCoordinator`]: validated add/update/delete over the record store,
//!   with confirmation on deletes and the university → certificate cascade.
//!
//! The guard does not wrap the coordinator; the application checks
//! [`SessionGuard::require_admin`] before handing out a coordinator.

pub mod authenticator;
pub mod confirm;
pub mod coordinator;
pub mod drafts;
pub mod error;
pub mod session;

pub use authenticator::{Authenticator, StaticAuthenticator};
pub use confirm::{Confirm, Confirmation, DestructiveAction};
pub use coordinator::{CrudCoordinator, DeleteOutcome};
pub use drafts::{CertificateDraft, UniversityDraft};
pub use error::AdminError;
pub use session::{SessionGuard, SessionState};
