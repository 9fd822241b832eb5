//! Username and hostname for the info box title.

use std::process::Command;

/// Supplies the `user@host` strings shown in the title bar.
#[cfg_attr(test, mockall::automock)]
pub trait IdentitySource {
    /// Login name of the current user.
    fn username(&self) -> String;
    /// Name of this machine.
    fn hostname(&self) -> String;
}

/// Identity read from the environment once and cached.
#[derive(Debug, Clone)]
pub struct SystemIdentity {
    user: String,
    host: String,
}

impl SystemIdentity {
    /// Resolve the current user and host.
    #[must_use]
    pub fn detect() -> Self {
        let user = std::env::var("USER")
            .or_else(|_| std::env::var("LOGNAME"))
            .unwrap_or_else(|_| "unknown".to_string());

        Self {
            user,
            host: detect_hostname(),
        }
    }
}

impl IdentitySource for SystemIdentity {
    fn username(&self) -> String {
        self.user.clone()
    }

    fn hostname(&self) -> String {
        self.host.clone()
    }
}

fn detect_hostname() -> String {
    Command::new("hostname")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .or_else(|| std::env::var("HOSTNAME").ok())
        .unwrap_or_else(|| "localhost".to_string())
}

/// Title for the info box.
#[must_use]
pub fn title_label(source: &dyn IdentitySource) -> String {
    format!("{}@{}", source.username(), source.hostname())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_label() {
        let mut source = MockIdentitySource::new();
        source.expect_username().return_const("ada".to_string());
        source.expect_hostname().return_const("engine".to_string());

        assert_eq!(title_label(&source), "ada@engine");
    }

    #[test]
    fn test_title_label_asks_every_time() {
        let mut source = MockIdentitySource::new();
        source
            .expect_username()
            .times(2)
            .return_const("ada".to_string());
        source
            .expect_hostname()
            .times(2)
            .return_const("engine".to_string());

        assert_eq!(title_label(&source), title_label(&source));
    }

    #[test]
    fn test_system_identity_is_never_empty() {
        let identity = SystemIdentity::detect();
        assert!(!identity.username().is_empty());
        assert!(!identity.hostname().is_empty());
    }
}
