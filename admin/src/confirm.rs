//! Confirmation for destructive operations.
//!
//! Instead of a blocking dialog, destructive calls take a [`Confirm`]
//! implementation. Tests pass [`Confirmation::Granted`] or
//! [`Confirmation::Declined`]; an interactive host passes a prompt.

use certify_types::{CertificateId, UniversityId};
use std::fmt;

/// An operation that needs the caller's explicit go-ahead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DestructiveAction {
    Logout,
    DeleteCertificate(CertificateId),
    /// Also removes every certificate issued by the university.
    DeleteUniversity(UniversityId),
}

impl fmt::Display for DestructiveAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Logout => f.write_str("Are you sure you want to log out?"),
            Self::DeleteCertificate(id) => {
                write!(f, "Are you sure you want to delete certificate {id}?")
            }
            Self::DeleteUniversity(id) => write!(
                f,
                "Are you sure you want to delete university {id}? All of its certificates will be deleted as well."
            ),
        }
    }
}

/// Answers a confirmation request.
pub trait Confirm {
    fn confirm(&mut self, action: &DestructiveAction) -> bool;
}

/// A fixed answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Granted,
    Declined,
}

impl Confirm for Confirmation {
    fn confirm(&mut self, _action: &DestructiveAction) -> bool {
        matches!(self, Self::Granted)
    }
}

impl<F> Confirm for F
where
    F: FnMut(&DestructiveAction) -> bool,
{
    fn confirm(&mut self, action: &DestructiveAction) -> bool {
        self(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_answers() {
        assert!(Confirmation::Granted.confirm(&DestructiveAction::Logout));
        assert!(!Confirmation::Declined.confirm(&DestructiveAction::Logout));
    }

    #[test]
    fn closures_see_the_action() {
        let mut seen = Vec::new();
        let mut ask = |action: &DestructiveAction| {
            seen.push(action.clone());
            true
        };
        assert!(ask.confirm(&DestructiveAction::DeleteCertificate("X".into())));
        assert_eq!(seen, vec![DestructiveAction::DeleteCertificate("X".into())]);
    }

    #[test]
    fn university_prompt_mentions_cascade() {
        let prompt = DestructiveAction::DeleteUniversity("u1".into()).to_string();
        assert!(prompt.contains("u1"));
        assert!(prompt.contains("certificates will be deleted"));
    }
}
