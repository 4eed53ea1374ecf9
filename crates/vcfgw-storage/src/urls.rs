//! Public URL and storage URI construction.
//!
//! Both are pure functions of the configured bucket, region and endpoint plus
//! the object key; they never query the store.

use url::Url;
use vcfgw_core::StorageConfig;

/// Builds the public URL and the `s3://` locator of an object.
#[derive(Debug, Clone)]
pub struct ObjectUrls {
    bucket: String,
    region: String,
    endpoint_url: Option<String>,
}

impl ObjectUrls {
    pub fn new(
        bucket: impl Into<String>,
        region: impl Into<String>,
        endpoint_url: Option<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
            endpoint_url,
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(
            config.bucket.clone(),
            config.region.clone(),
            config.endpoint.clone(),
        )
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Public URL of an object.
    ///
    /// For AWS S3: `https://{bucket}.s3.{region}.amazonaws.com/{key}`.
    /// With a custom endpoint, path-style: `{endpoint}/{bucket}/{key}`.
    pub fn public_url(&self, key: &str) -> String {
        if let Some(ref endpoint) = self.endpoint_url {
            let base_url = endpoint.trim_end_matches('/');
            format!("{}/{}/{}", base_url, self.bucket, key)
        } else {
            format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, key
            )
        }
    }

    /// `s3://{bucket}/{key}` locator, derived by parsing the public URL.
    pub fn storage_uri(&self, key: &str) -> Option<String> {
        s3_url_to_uri(&self.public_url(key), self.endpoint_url.is_some())
    }
}

/// Convert a public S3 URL into an `s3://` URI.
///
/// Virtual-hosted URLs take the bucket from the first label of the host;
/// path-style URLs take it from the first path segment. The key is the
/// remaining (percent-encoded) path. Returns `None` when the URL cannot be
/// parsed.
pub fn s3_url_to_uri(s3_url: &str, path_style: bool) -> Option<String> {
    let url = match Url::parse(s3_url) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(error = %e, url = %s3_url, "Invalid S3 URL");
            return None;
        }
    };

    let path = url.path();
    let path = path.strip_prefix('/').unwrap_or(path);

    let (bucket, key) = if path_style {
        path.split_once('/')?
    } else {
        let host = url.host_str()?;
        (host.split('.').next()?, path)
    };

    if bucket.is_empty() {
        tracing::warn!(url = %s3_url, "S3 URL has no bucket");
        return None;
    }

    Some(format!("s3://{}/{}", bucket, key))
}
