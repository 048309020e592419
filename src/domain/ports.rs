use crate::domain::model::{ErrorPolicy, Snippet};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &Path) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &Path) -> impl std::future::Future<Output = bool> + Send;
}

impl<S: Storage> Storage for &S {
    fn read_file(&self, path: &Path) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send {
        (**self).read_file(path)
    }

    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        (**self).write_file(path, data)
    }

    fn exists(&self, path: &Path) -> impl std::future::Future<Output = bool> + Send {
        (**self).exists(path)
    }
}

pub trait ConfigProvider: Send + Sync {
    fn target(&self) -> &Path;
    fn snippet(&self) -> &Snippet;
    fn license_url(&self) -> Option<&str>;
    fn error_policy(&self) -> ErrorPolicy;
}
