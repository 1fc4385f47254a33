use crate::domain::model::{ContactPayload, SubmissionOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Turns an opaque media reference into something a page can display.
/// Implementations must always return a usable reference, falling back when
/// the requested one cannot be served.
pub trait AssetResolver: Send + Sync {
    fn resolve(&self, media_ref: &str) -> String;
}

/// Receives contact form payloads. Resolves to accepted or rejected;
/// transport and server failures surface as `SubmissionError`.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    async fn submit(&self, payload: &ContactPayload) -> Result<SubmissionOutcome>;
}

impl<T: AssetResolver + ?Sized> AssetResolver for Box<T> {
    fn resolve(&self, media_ref: &str) -> String {
        (**self).resolve(media_ref)
    }
}
