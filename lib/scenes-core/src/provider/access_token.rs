/// Caller-supplied source of the bearer token attached to every request.
///
/// Invoked once per request, so implementations may refresh expiring tokens.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, anyhow::Error>;
}

/// Fixed token, for scripts and tests
#[derive(Clone)]
pub struct StaticAccessToken(String);

impl StaticAccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for StaticAccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticAccessToken(<redacted>)")
    }
}

#[async_trait::async_trait]
impl AccessTokenProvider for StaticAccessToken {
    async fn access_token(&self) -> Result<String, anyhow::Error> {
        Ok(self.0.clone())
    }
}
