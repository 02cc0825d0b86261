use crate::config::AuthConfig;
use crate::error::{DormError, Result};
use crate::models::UserProfile;
use crate::services::UserService;

pub const LOGIN_FAILED: &str = "아이디 또는 비밀번호를 확인하세요.";

/// Demo sign-in against the configured credential pair.
#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
    users: UserService,
}

impl AuthService {
    pub fn new(config: AuthConfig, users: UserService) -> Self {
        Self { config, users }
    }

    /// Returns the viewer's profile when both values match exactly.
    pub fn login(&self, username: &str, password: &str) -> Result<UserProfile> {
        if username != self.config.demo_username || password != self.config.demo_password {
            tracing::warn!(username, "Login rejected");
            return Err(DormError::Auth(LOGIN_FAILED.to_string()));
        }

        let profile = self.users.profile()?;
        tracing::info!(username, user_id = %profile.id, "Login succeeded");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, MockCatalog};
    use std::sync::Arc;

    fn service() -> AuthService {
        let catalog: Arc<dyn Catalog> = Arc::new(MockCatalog::new().unwrap());
        AuthService::new(AuthConfig::default(), UserService::new(catalog).unwrap())
    }

    #[test]
    fn demo_credentials_log_in() {
        let profile = service().login("sunmoon", "sunmoon").unwrap();
        assert_eq!(profile.id, "user-001");
    }

    #[test]
    fn anything_else_is_rejected() {
        let service = service();
        let attempts = [
            ("sunmoon", "wrong"),
            ("other", "sunmoon"),
            ("", ""),
            ("sunmoon ", "sunmoon"),
        ];
        for (user, pass) in attempts {
            let err = service.login(user, pass).unwrap_err();
            assert!(matches!(err, DormError::Auth(ref msg) if msg == LOGIN_FAILED));
        }
    }
}
