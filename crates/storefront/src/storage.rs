//! Public URLs for objects in the asset bucket.
//!
//! Objects in a public bucket are served from
//! `{base}/storage/v1/object/public/{bucket}/{key}`. Nothing here talks to the
//! storage service; URLs are derived from configuration only.

use url::Url;

use crate::config::StorageConfig;

const PUBLIC_OBJECT_PATH: [&str; 4] = ["storage", "v1", "object", "public"];

/// Derive the public URL of `key` in the configured bucket.
///
/// Returns `None` when no storage URL is configured. Each path segment of the
/// key is percent-encoded; empty segments are dropped.
#[must_use]
pub fn public_url(storage: &StorageConfig, key: &str) -> Option<Url> {
    let mut url = storage.base_url.clone()?;
    {
        let mut segments = url.path_segments_mut().ok()?;
        segments
            .pop_if_empty()
            .extend(PUBLIC_OBJECT_PATH)
            .push(&storage.bucket)
            .extend(key.split('/').filter(|s| !s.is_empty()));
    }
    url.set_query(None);
    url.set_fragment(None);
    Some(url)
}

/// Public URL of the hero photo, if storage is configured.
#[must_use]
pub fn hero_image_url(storage: &StorageConfig) -> Option<String> {
    public_url(storage, &storage.hero_image_key).map(String::from)
}

/// Origin (`scheme://host[:port]`) of the storage service, for CSP `img-src`.
#[must_use]
pub fn storage_origin(storage: &StorageConfig) -> Option<String> {
    storage
        .base_url
        .as_ref()
        .map(|url| url.origin().ascii_serialization())
        .filter(|origin| origin != "null")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn storage(base: &str) -> StorageConfig {
        StorageConfig {
            base_url: Some(Url::parse(base).unwrap()),
            ..StorageConfig::default()
        }
    }

    #[test]
    fn test_hero_image_url() {
        assert_eq!(
            hero_image_url(&storage("https://abc.supabase.co")).as_deref(),
            Some("https://abc.supabase.co/storage/v1/object/public/eblen-site-assets/utp-photo.png")
        );
    }

    #[test]
    fn test_trailing_slash_and_prefix_path() {
        assert_eq!(
            hero_image_url(&storage("https://cdn.example.com/proxy/")).as_deref(),
            Some("https://cdn.example.com/proxy/storage/v1/object/public/eblen-site-assets/utp-photo.png")
        );
    }

    #[test]
    fn test_nested_key_is_encoded_per_segment() {
        let url = public_url(&storage("https://abc.supabase.co"), "menu/сет 1.png").unwrap();
        assert_eq!(
            url.path(),
            "/storage/v1/object/public/eblen-site-assets/menu/%D1%81%D0%B5%D1%82%201.png"
        );
    }

    #[test]
    fn test_unconfigured_storage() {
        assert!(hero_image_url(&StorageConfig::default()).is_none());
        assert!(storage_origin(&StorageConfig::default()).is_none());
    }

    #[test]
    fn test_storage_origin() {
        assert_eq!(
            storage_origin(&storage("https://abc.supabase.co/some/path")).as_deref(),
            Some("https://abc.supabase.co")
        );
    }
}
