use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the different alarm server deployments the monitor can watch.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development alarm server.
    Local,
    /// Staging deployment for pre-production testing.
    Staging,
    /// Production alarm server.
    #[default]
    Production,
}

impl Environment {
    /// Returns the alarm webmon base URL associated with the environment.
    pub fn alarm_server_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8080/alarm-webmon".to_string(),
            Environment::Staging => "https://staging.alarms.internal/alarm-webmon".to_string(),
            Environment::Production => "https://alarms.internal/alarm-webmon".to_string(),
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
        write!(f, "Environment::{}, URL: {}", self, self.alarm_server_url())
    }
}
