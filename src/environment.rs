use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the different portal deployments available for the CLI.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development environment.
    Local,
    /// Staging environment for pre-production testing.
    Staging,
    /// Production portal used by students.
    #[default]
    Production,
}

impl Environment {
    /// Returns the portal service URL associated with the environment.
    pub fn portal_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:54321".to_string(),
            Environment::Staging => "https://staging.portal.catholink.app".to_string(),
            Environment::Production => "https://portal.catholink.app".to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Staging => write!(f, "Staging"),
            Environment::Production => write!(f, "Production"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.portal_url())
    }
}
