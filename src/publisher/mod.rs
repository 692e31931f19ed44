pub mod blogger;

use async_trait::async_trait;

use crate::app::{BookrakeError, Result};

pub use blogger::BloggerPublisher;

/// An access credential obtained from the [`Authenticator`] seam.
#[derive(Debug, Clone)]
pub struct Credential {
    pub token: String,
}

/// Credential seam for the publish boundary.
///
/// The publisher must not depend on which credential strategy is active
/// (service account, cached interactive token, plain env token); it only
/// asks for a credential when it is about to publish.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self) -> Result<Credential>;
}

/// Reads a ready-made access token from an environment variable.
pub struct EnvAuthenticator {
    var: String,
}

impl EnvAuthenticator {
    pub fn new(var: String) -> Self {
        Self { var }
    }
}

#[async_trait]
impl Authenticator for EnvAuthenticator {
    async fn authenticate(&self) -> Result<Credential> {
        match std::env::var(&self.var) {
            Ok(token) if !token.is_empty() => Ok(Credential { token }),
            _ => Err(BookrakeError::Auth(format!(
                "no access token in ${}",
                self.var
            ))),
        }
    }
}

/// Accepts a rendered document and returns the published post's URL.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, title: &str, content: &str, labels: &[String]) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_env_authenticator_reads_token() {
        std::env::set_var("BOOKRAKE_TEST_TOKEN_SET", "tok-123");
        let auth = EnvAuthenticator::new("BOOKRAKE_TEST_TOKEN_SET".into());
        let cred = auth.authenticate().await.unwrap();
        assert_eq!(cred.token, "tok-123");
    }

    #[tokio::test]
    async fn test_env_authenticator_missing_token_is_auth_error() {
        let auth = EnvAuthenticator::new("BOOKRAKE_TEST_TOKEN_UNSET".into());
        let err = auth.authenticate().await.unwrap_err();
        assert!(matches!(err, BookrakeError::Auth(_)));
    }
}
