use anyhow::Result;
use async_trait::async_trait;
use oauth2::AccessToken;

#[async_trait(?Send)]
pub trait TokenRetriever {
    /// Returns `None` when the provider answered without a usable token.
    async fn retrieve(&self) -> Result<Option<AccessToken>>;
}
