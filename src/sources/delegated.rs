use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::error::AuthError;
use crate::sources::IssuedToken;

type IssueFn = dyn Fn() -> BoxFuture<'static, anyhow::Result<IssuedToken>> + Send + Sync;

/// Caller-supplied token issuance routine.
#[derive(Clone)]
pub struct DelegatedIssuer {
    issue: Arc<IssueFn>,
}

impl DelegatedIssuer {
    pub fn new<F, Fut>(issue: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<IssuedToken>> + Send + 'static,
    {
        Self {
            issue: Arc::new(move || issue().boxed()),
        }
    }

    pub async fn issue(&self) -> Result<IssuedToken, AuthError> {
        (self.issue)()
            .await
            .map_err(|e| AuthError::DelegateFailure(Arc::new(e)))
    }
}
