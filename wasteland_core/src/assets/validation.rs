//! Request validation - key charset, path sanity, extension whitelist, probe

use super::backend::AssetFetcher;
use super::{AssetError, AssetKind, AssetRequest};

/// File extensions accepted per asset kind
pub fn allowed_extensions(kind: AssetKind) -> &'static [&'static str] {
    match kind {
        AssetKind::Manifest => &["json"],
        AssetKind::Image => &["png", "jpg", "jpeg", "gif"],
        AssetKind::Atlas => &["json", "png"],
        AssetKind::Audio => &["ogg", "mp3", "wav"],
        AssetKind::Font => &["ttf", "otf", "woff", "woff2"],
    }
}

/// Cache keys: non-empty, lowercase alphanumeric plus `_ . -`
pub fn validate_key(key: &str) -> Result<(), AssetError> {
    let well_formed = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-'));
    if well_formed {
        Ok(())
    } else {
        Err(AssetError::InvalidKey(key.to_string()))
    }
}

/// Paths: non-empty, no traversal, no whitespace, must carry an extension
pub fn validate_path(url: &str) -> Result<(), AssetError> {
    let malformed = url.is_empty()
        || url.contains("..")
        || url.chars().any(char::is_whitespace)
        || extension_of(url).is_none();
    if malformed {
        Err(AssetError::InvalidPath(url.to_string()))
    } else {
        Ok(())
    }
}

/// Check the path's extension against the kind's whitelist
pub fn validate_extension(url: &str, kind: AssetKind) -> Result<(), AssetError> {
    let extension = extension_of(url).unwrap_or("");
    if allowed_extensions(kind)
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    {
        Ok(())
    } else {
        Err(AssetError::UnsupportedExtension {
            url: url.to_string(),
            kind,
        })
    }
}

/// Run all static checks on a request (primary and fallback paths)
pub fn validate_request(request: &AssetRequest) -> Result<(), AssetError> {
    validate_key(&request.key)?;
    validate_path(&request.url)?;
    validate_extension(&request.url, request.kind)?;
    if let Some(fallback) = &request.fallback_url {
        validate_path(fallback)?;
        validate_extension(fallback, request.kind)?;
    }
    Ok(())
}

/// Load-and-discard probe through the real fetcher
pub fn probe_request<F: AssetFetcher + ?Sized>(
    fetcher: &F,
    request: &AssetRequest,
) -> Result<(), AssetError> {
    match fetcher.fetch(request) {
        Ok(_) => Ok(()),
        Err(source) => {
            log::warn!("Probe failed for '{}': {}", request.key, source);
            Err(AssetError::ProbeFailed {
                key: request.key.clone(),
                source,
            })
        }
    }
}

fn extension_of(url: &str) -> Option<&str> {
    let file_name = url.rsplit('/').next()?;
    let (stem, extension) = file_name.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        None
    } else {
        Some(extension)
    }
}
