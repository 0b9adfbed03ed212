use crate::{
    abstract_trait::{DynUploadGateway, UploadServiceTrait},
    domain::responses::UploadResponse,
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use tracing::{error, warn};

pub const MISSING_IMAGE_MESSAGE: &str = "No se envió ninguna imagen";

pub struct UploadService {
    pub gateway: DynUploadGateway,
    pub metrics: Metrics,
}

impl UploadService {
    pub fn new(gateway: DynUploadGateway, metrics: Metrics) -> Self {
        Self { gateway, metrics }
    }
}

#[async_trait]
impl UploadServiceTrait for UploadService {
    async fn upload_image(
        &self,
        payload: Option<Vec<u8>>,
        file_name: &str,
    ) -> Result<UploadResponse, ServiceError> {
        let tracing_ctx = TracingContext::start("upload_image");

        let payload = match payload {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => {
                warn!("⚠️ Upload request without an image");
                tracing_ctx.complete(&self.metrics, Method::Post, false, MISSING_IMAGE_MESSAGE);
                return Err(ServiceError::Validation(MISSING_IMAGE_MESSAGE.to_string()));
            }
        };

        match self.gateway.upload(payload, file_name).await {
            Ok(image_url) => {
                tracing_ctx.complete(&self.metrics, Method::Post, true, "Image uploaded");
                Ok(UploadResponse { image_url })
            }
            Err(err) => {
                error!("❌ Failed to upload image: {err:?}");
                tracing_ctx.complete(&self.metrics, Method::Post, false, &err.to_string());
                Err(ServiceError::Upload(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::UploadGatewayTrait, errors::UploadError};
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    struct FakeGateway {
        calls: AtomicUsize,
        outcome: Result<String, String>,
    }

    #[async_trait]
    impl UploadGatewayTrait for FakeGateway {
        async fn upload(&self, _payload: Vec<u8>, _file_name: &str) -> Result<String, UploadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone().map_err(UploadError::Rejected)
        }
    }

    fn service(outcome: Result<String, String>) -> (UploadService, Arc<FakeGateway>) {
        let gateway = Arc::new(FakeGateway {
            calls: AtomicUsize::new(0),
            outcome,
        });
        (
            UploadService::new(gateway.clone(), Metrics::new()),
            gateway,
        )
    }

    #[tokio::test]
    async fn missing_payload_never_reaches_gateway() {
        let (service, gateway) = service(Ok("http://img/1.png".into()));

        for payload in [None, Some(Vec::new())] {
            let err = service.upload_image(payload, "a.png").await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation(ref msg) if msg == MISSING_IMAGE_MESSAGE));
        }

        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn relays_gateway_url() {
        let (service, gateway) = service(Ok("http://img/1.png".into()));

        let response = service
            .upload_image(Some(vec![1, 2, 3]), "a.png")
            .await
            .unwrap();

        assert_eq!(response.image_url, "http://img/1.png");
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn relays_gateway_error_message() {
        let (service, _) = service(Err("Invalid image file".into()));

        let err = service
            .upload_image(Some(vec![1, 2, 3]), "a.png")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Upload(_)));
        assert_eq!(err.to_string(), "Invalid image file");
    }
}
