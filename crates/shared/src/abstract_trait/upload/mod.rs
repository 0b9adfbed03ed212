use crate::{
    domain::responses::UploadResponse,
    errors::{ServiceError, UploadError},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUploadGateway = Arc<dyn UploadGatewayTrait + Send + Sync>;
pub type DynUploadService = Arc<dyn UploadServiceTrait + Send + Sync>;

/// External image host. Takes the raw bytes and hands back a public URL.
#[async_trait]
pub trait UploadGatewayTrait {
    async fn upload(&self, payload: Vec<u8>, file_name: &str) -> Result<String, UploadError>;
}

#[async_trait]
pub trait UploadServiceTrait {
    async fn upload_image(
        &self,
        payload: Option<Vec<u8>>,
        file_name: &str,
    ) -> Result<UploadResponse, ServiceError>;
}
