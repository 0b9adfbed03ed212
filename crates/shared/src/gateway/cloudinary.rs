//! Cloudinary signed-upload client.
//!
//! Images are sent to `POST {api_base}/v1_1/{cloud_name}/image/upload` as
//! multipart form data. Requests are signed with SHA-1 (or SHA-256 when
//! configured) over the signed parameters followed by the API secret.

use crate::{
    abstract_trait::UploadGatewayTrait,
    config::{CloudinaryConfig, SignatureAlgorithm},
    errors::UploadError,
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{error, info};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct UploadResult {
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

pub struct CloudinaryGateway {
    client: reqwest::Client,
    upload_url: String,
    api_key: String,
    api_secret: SecretString,
    signature_algorithm: SignatureAlgorithm,
}

impl CloudinaryGateway {
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &CloudinaryConfig) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        let upload_url = format!(
            "{}/v1_1/{}/image/upload",
            config.api_base.trim_end_matches('/'),
            config.cloud_name
        );

        Ok(Self {
            client,
            upload_url,
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            signature_algorithm: config.signature_algorithm,
        })
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    fn sign(&self, timestamp: u64) -> String {
        let to_sign = format!("timestamp={timestamp}{}", self.api_secret.expose_secret());
        match self.signature_algorithm {
            SignatureAlgorithm::Sha1 => hex::encode(Sha1::digest(to_sign.as_bytes())),
            SignatureAlgorithm::Sha256 => hex::encode(Sha256::digest(to_sign.as_bytes())),
        }
    }

    async fn parse_error(response: reqwest::Response) -> UploadError {
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return UploadError::Transport(e),
        };

        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => UploadError::Rejected(parsed.error.message),
            Err(_) if body.is_empty() => UploadError::Rejected(status.to_string()),
            Err(_) => UploadError::Rejected(body),
        }
    }
}

#[async_trait]
impl UploadGatewayTrait for CloudinaryGateway {
    async fn upload(&self, payload: Vec<u8>, file_name: &str) -> Result<String, UploadError> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        info!(
            "☁️ Uploading image {} ({} bytes)",
            file_name,
            payload.len()
        );

        let mut form = Form::new()
            .part("file", Part::bytes(payload).file_name(file_name.to_string()))
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("signature", self.sign(timestamp));

        // SHA-1 is Cloudinary's default and needs no marker
        if self.signature_algorithm != SignatureAlgorithm::Sha1 {
            form = form.text("signature_algorithm", self.signature_algorithm.as_str());
        }

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("❌ Image host unreachable: {e:?}");
                UploadError::Transport(e)
            })?;

        if !response.status().is_success() {
            let err = Self::parse_error(response).await;
            error!("❌ Image host rejected upload: {err}");
            return Err(err);
        }

        let result: UploadResult = response
            .json()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

        info!("✅ Image uploaded to {}", result.secure_url);
        Ok(result.secure_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_string_contains, method, path},
    };

    fn config(api_base: &str) -> CloudinaryConfig {
        config_with(api_base, SignatureAlgorithm::Sha1)
    }

    fn config_with(api_base: &str, signature_algorithm: SignatureAlgorithm) -> CloudinaryConfig {
        CloudinaryConfig {
            cloud_name: "demo".into(),
            api_key: "123456".into(),
            api_secret: SecretString::from("shh".to_string()),
            api_base: api_base.to_string(),
            signature_algorithm,
        }
    }

    #[test]
    fn upload_url_targets_cloud() {
        let gateway = CloudinaryGateway::new(&config("https://api.cloudinary.com/")).unwrap();
        assert_eq!(
            gateway.upload_url(),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
    }

    #[test]
    fn signature_defaults_to_hex_sha1() {
        let gateway = CloudinaryGateway::new(&config("http://localhost")).unwrap();

        assert_eq!(
            gateway.sign(1_700_000_000),
            "27f24ba4e7c8af749fac327e0bbdccc23dc3afb7"
        );
        assert_ne!(gateway.sign(1_700_000_000), gateway.sign(1_700_000_001));
    }

    #[test]
    fn signature_can_use_sha256() {
        let gateway =
            CloudinaryGateway::new(&config_with("http://localhost", SignatureAlgorithm::Sha256))
                .unwrap();

        assert_eq!(
            gateway.sign(1_700_000_000),
            "289b5026acd442186d7bb7b7c0389c0929709fa8094d0592b5180610c56df137"
        );
    }

    #[tokio::test]
    async fn returns_secure_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1_1/demo/image/upload"))
            .and(body_string_contains("name=\"api_key\""))
            .and(body_string_contains("name=\"signature\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "public_id": "sample",
                "secure_url": "https://res.cloudinary.com/demo/image/upload/v1/sample.png"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = CloudinaryGateway::new(&config(&server.uri())).unwrap();
        let url = gateway
            .upload(b"fake png bytes".to_vec(), "sample.png")
            .await
            .unwrap();

        assert_eq!(url, "https://res.cloudinary.com/demo/image/upload/v1/sample.png");

        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(!body.contains("signature_algorithm"));
    }

    #[tokio::test]
    async fn sha256_uploads_declare_the_algorithm() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1_1/demo/image/upload"))
            .and(body_string_contains("name=\"signature_algorithm\""))
            .and(body_string_contains("sha256"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "secure_url": "https://res.cloudinary.com/demo/image/upload/v1/sample.png"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway =
            CloudinaryGateway::new(&config_with(&server.uri(), SignatureAlgorithm::Sha256))
                .unwrap();
        let url = gateway
            .upload(b"fake png bytes".to_vec(), "sample.png")
            .await
            .unwrap();

        assert_eq!(url, "https://res.cloudinary.com/demo/image/upload/v1/sample.png");
    }

    #[tokio::test]
    async fn surfaces_host_message_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1_1/demo/image/upload"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": { "message": "Invalid image file" }
            })))
            .mount(&server)
            .await;

        let gateway = CloudinaryGateway::new(&config(&server.uri())).unwrap();
        let err = gateway
            .upload(b"not an image".to_vec(), "notes.txt")
            .await
            .unwrap_err();

        assert!(matches!(err, UploadError::Rejected(_)));
        assert_eq!(err.to_string(), "Invalid image file");
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        let gateway = CloudinaryGateway::new(&config("http://127.0.0.1:1")).unwrap();
        let err = gateway.upload(vec![1, 2, 3], "a.png").await.unwrap_err();

        assert!(matches!(err, UploadError::Transport(_)));
    }
}
