// src/infrastructure/media.rs
use crate::application::{
    ApplicationResult, error::ApplicationError, ports::media::ImageEncoder,
};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Encodes uploads as base64 `data:` URIs, guessing the MIME type from the
/// file name. Encoding runs on the blocking pool.
#[derive(Default, Clone)]
pub struct DataUriImageEncoder;

pub fn encode_data_uri(filename: &str, bytes: &[u8]) -> String {
    let mime = mime_guess::from_path(filename).first_or_octet_stream();
    format!("data:{};base64,{}", mime.essence_str(), STANDARD.encode(bytes))
}

#[async_trait]
impl ImageEncoder for DataUriImageEncoder {
    async fn encode(&self, filename: &str, bytes: Vec<u8>) -> ApplicationResult<String> {
        let filename = filename.to_owned();
        tokio::task::spawn_blocking(move || encode_data_uri(&filename, &bytes))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_comes_from_extension() {
        assert_eq!(encode_data_uri("cover.png", b"abc"), "data:image/png;base64,YWJj");
        assert_eq!(encode_data_uri("foto.JPG", b"abc"), "data:image/jpeg;base64,YWJj");
        assert!(encode_data_uri("blob", b"").starts_with("data:application/octet-stream;base64,"));
    }

    #[tokio::test]
    async fn encodes_off_the_executor() {
        let uri = DataUriImageEncoder.encode("a.gif", vec![1, 2, 3]).await.unwrap();
        assert_eq!(uri, "data:image/gif;base64,AQID");
    }
}
