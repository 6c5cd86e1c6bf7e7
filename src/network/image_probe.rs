//! Loads the captured image to decide between the real image and the placeholder

use crate::api::error::ImageLoadError;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

/// Content types accepted besides `image/*`; S3 serves untyped uploads as these.
const GENERIC_BINARY_TYPES: [&str; 2] = ["application/octet-stream", "binary/octet-stream"];

/// Request the image and check that it is served as an image.
pub async fn probe(client: &Client, url: &str) -> Result<(), ImageLoadError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ImageLoadError::Status(status.as_u16()));
    }

    if let Some(content_type) = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        if !is_image_content_type(content_type) {
            return Err(ImageLoadError::NotAnImage(content_type.to_string()));
        }
    }
    Ok(())
}

fn is_image_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_ascii_lowercase();
    essence.starts_with("image/") || GENERIC_BINARY_TYPES.contains(&essence.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_content_type_check() {
        assert!(is_image_content_type("image/jpeg"));
        assert!(is_image_content_type("IMAGE/PNG; charset=binary"));
        assert!(is_image_content_type("binary/octet-stream"));
        assert!(!is_image_content_type("text/html; charset=utf-8"));
    }

    #[tokio::test]
    async fn test_probe_accepts_image() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/a.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(vec![0xFF, 0xD8], "image/jpeg"))
            .mount(&server)
            .await;

        let result = probe(&Client::new(), &format!("{}/a.jpg", server.uri())).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_probe_rejects_expired_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let result = probe(&Client::new(), &format!("{}/a.jpg", server.uri())).await;
        assert!(matches!(result, Err(ImageLoadError::Status(403))));
    }

    #[tokio::test]
    async fn test_probe_rejects_html() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("<html/>", "text/html"))
            .mount(&server)
            .await;

        let result = probe(&Client::new(), &format!("{}/a.jpg", server.uri())).await;
        assert!(matches!(result, Err(ImageLoadError::NotAnImage(_))));
    }
}
