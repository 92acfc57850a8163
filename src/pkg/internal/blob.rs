use aws_sdk_s3::{config::Region, primitives::ByteStream, Client};
use chrono::Utc;
use rand::{distr::Alphanumeric, Rng};

use crate::{
    conf::settings,
    prelude::{AppError, Result},
};

const MIME_PDF: &str = "application/pdf";
const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Resolves the content type for an uploaded resume by file extension.
/// Anything other than PDF/DOCX is rejected upstream.
pub fn resume_mime_type(filename: &str) -> Option<&'static str> {
    let lower = filename.to_lowercase();
    if lower.ends_with(".pdf") {
        Some(MIME_PDF)
    } else if lower.ends_with(".docx") {
        Some(MIME_DOCX)
    } else {
        None
    }
}

/// S3-compatible store holding resume files under `resumes/`. Only ever
/// written at candidate creation and deleted at candidate removal; the
/// public URL lands in the sheet as the resume link.
#[derive(Debug, Clone)]
pub struct BlobStore {
    client: Client,
}

impl BlobStore {
    pub async fn new() -> Self {
        let base = aws_config::load_from_env().await;
        let conf = aws_sdk_s3::config::Builder::from(&base)
            .endpoint_url(&settings.s3_endpoint)
            .region(Region::new(settings.s3_region.clone()))
            .force_path_style(true)
            .build();
        BlobStore {
            client: Client::from_conf(conf),
        }
    }

    /// Uploads a resume and returns its public URL.
    pub async fn upload_resume(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        mime_type: &str,
    ) -> Result<String> {
        let key = resume_key(filename);
        self.client
            .put_object()
            .bucket(&settings.s3_bucket)
            .key(&key)
            .content_type(mime_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| AppError::Blob(e.to_string()))?;
        tracing::info!("stored resume at {}", &key);
        Ok(format!(
            "{}/{}",
            settings.s3_public_url.trim_end_matches('/'),
            key
        ))
    }

    /// Whether a resume link points into this app's own store.
    pub fn owns(&self, link: &str) -> bool {
        link.starts_with(settings.s3_public_url.trim_end_matches('/'))
    }

    pub async fn delete_resume(&self, link: &str) -> Result<()> {
        let base = settings.s3_public_url.trim_end_matches('/');
        let key = link
            .strip_prefix(base)
            .map(|rest| rest.trim_start_matches('/'))
            .filter(|k| !k.is_empty())
            .ok_or_else(|| AppError::Blob(format!("link outside the resume store: {link}")))?;
        self.client
            .delete_object()
            .bucket(&settings.s3_bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| AppError::Blob(e.to_string()))?;
        Ok(())
    }

    pub async fn ensure_bucket(&self) -> Result<()> {
        let constraint =
            aws_sdk_s3::types::BucketLocationConstraint::from(settings.s3_region.as_str());
        let cfg = aws_sdk_s3::types::CreateBucketConfiguration::builder()
            .location_constraint(constraint)
            .build();
        let create = self
            .client
            .create_bucket()
            .create_bucket_configuration(cfg)
            .bucket(&settings.s3_bucket)
            .send()
            .await;
        create.map(|_| ()).or_else(|err| {
            if err
                .as_service_error()
                .map(|se| se.is_bucket_already_exists() || se.is_bucket_already_owned_by_you())
                == Some(true)
            {
                Ok(())
            } else {
                Err(AppError::Blob(err.to_string()))
            }
        })
    }
}

// Object key: timestamp + random suffix + path-safe filename, so repeated
// uploads of the same file never collide.
fn resume_key(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .take(100)
        .collect();
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    format!("resumes/{}-{}-{}", Utc::now().timestamp_millis(), suffix, safe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_resume_mime_types() {
        assert_eq!(resume_mime_type("cv.pdf"), Some(MIME_PDF));
        assert_eq!(resume_mime_type("CV.PDF"), Some(MIME_PDF));
        assert_eq!(resume_mime_type("profile.docx"), Some(MIME_DOCX));
        assert_eq!(resume_mime_type("notes.txt"), None);
        assert_eq!(resume_mime_type("resume.doc"), None);
        assert_eq!(resume_mime_type(""), None);
    }

    #[test]
    fn resume_keys_are_path_safe() {
        let key = resume_key("my cv (final)!.pdf");
        assert!(key.starts_with("resumes/"));
        assert!(key.ends_with("my_cv__final__.pdf"));
        assert!(!key.contains(' '));
    }
}
