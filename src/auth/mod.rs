use crate::auth::error::AuthError;
use serde::{Deserialize, Serialize};

pub(crate) mod client;
pub use client::PortalClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// Student profile as served by the portal.
///
/// The session treats "no profile yet" as still loading, not as an error.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Display name of the student.
    pub name: String,
    /// Class section the student belongs to.
    pub section: String,
    /// Avatar image URL, if the student uploaded one.
    pub profile_picture_url: Option<String>,
}

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    /// Fetch the signed-in student's profile.
    async fn fetch_profile(&self) -> Result<Profile, AuthError>;

    /// Invalidate the current session on the portal.
    async fn sign_out(&self) -> Result<(), AuthError>;
}
