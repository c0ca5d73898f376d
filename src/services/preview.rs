//! Revocable preview references.
//!
//! Each accepted file gets a `preview://` URL backed by this registry. The
//! webview's scheme handler resolves the token to the file on disk until the
//! page reports the image as rendered and the reference is revoked. Previews
//! are the one scarce resource in the app; revoking promptly keeps the live
//! set bounded by what is still rendering.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tauri::http::Response;

use crate::models::file::FileCandidate;

pub const PREVIEW_SCHEME: &str = "preview";

const FALLBACK_MIME: &str = "application/octet-stream";

/// Backing data for one live preview reference.
#[derive(Debug, Clone)]
pub struct PreviewSource {
    pub path: PathBuf,
    pub mime_type: String,
}

/// Token to source map for live preview references.
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    sources: RwLock<HashMap<String, PreviewSource>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh revocable URL for a candidate's backing file.
    pub fn register(&self, candidate: &FileCandidate) -> String {
        let token = uuid::Uuid::new_v4().simple().to_string();
        let source = PreviewSource {
            path: PathBuf::from(&candidate.file_path),
            mime_type: candidate
                .mime_type
                .clone()
                .unwrap_or_else(|| FALLBACK_MIME.to_string()),
        };
        self.write().insert(token.clone(), source);
        format!("{}://localhost/{}", PREVIEW_SCHEME, token)
    }

    /// Resolves a live token. None once revoked.
    pub fn resolve(&self, token: &str) -> Option<PreviewSource> {
        self.read().get(token).cloned()
    }

    /// Revokes a reference. Idempotent; returns whether it was still live.
    pub fn revoke(&self, token: &str) -> bool {
        let removed = self.write().remove(token).is_some();
        if removed {
            log::debug!("revoked preview {}", token);
        }
        removed
    }

    /// Number of references not yet revoked.
    pub fn live_count(&self) -> usize {
        self.read().len()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, PreviewSource>> {
        self.sources.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, PreviewSource>> {
        self.sources.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// Extracts the token from a `preview://localhost/{token}` URL or request path.
pub fn token_of(url_or_path: &str) -> &str {
    url_or_path
        .rsplit('/')
        .next()
        .unwrap_or(url_or_path)
}

/// Builds the HTTP response for a `preview://` request.
///
/// Revoked or unknown tokens get a 404; an unreadable backing file gets a 404
/// as well, since the blob is owned by the OS and may disappear under us.
pub fn respond(registry: &PreviewRegistry, request_path: &str) -> Response<Vec<u8>> {
    let token = token_of(request_path);
    let Some(source) = registry.resolve(token) else {
        return http_response(404, "text/plain", b"preview revoked".to_vec());
    };
    match std::fs::read(&source.path) {
        Ok(bytes) => http_response(200, &source.mime_type, bytes),
        Err(e) => {
            log::warn!("preview {} unreadable: {}", token, e);
            http_response(404, "text/plain", b"preview unreadable".to_vec())
        }
    }
}

fn http_response(status: u16, content_type: &str, body: Vec<u8>) -> Response<Vec<u8>> {
    Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .header("Access-Control-Allow-Origin", "*")
        .body(body)
        .unwrap_or_else(|_| Response::new(Vec::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn candidate(path: &str, mime: Option<&str>) -> FileCandidate {
        FileCandidate {
            file_name: path.rsplit('/').next().unwrap_or(path).to_string(),
            file_path: path.to_string(),
            file_size: 0,
            modified_ms: 0,
            mime_type: mime.map(|m| m.to_string()),
        }
    }

    #[test]
    fn register_produces_preview_url() {
        let registry = PreviewRegistry::new();
        let url = registry.register(&candidate("/tmp/a.png", Some("image/png")));
        assert!(url.starts_with("preview://localhost/"), "got: {}", url);
        assert_eq!(registry.live_count(), 1);
    }

    #[test]
    fn tokens_are_unique_per_registration() {
        let registry = PreviewRegistry::new();
        let a = registry.register(&candidate("/tmp/a.png", Some("image/png")));
        let b = registry.register(&candidate("/tmp/a.png", Some("image/png")));
        assert_ne!(a, b);
        assert_eq!(registry.live_count(), 2);
    }

    #[test]
    fn resolve_returns_source_until_revoked() {
        let registry = PreviewRegistry::new();
        let url = registry.register(&candidate("/tmp/a.png", Some("image/png")));
        let token = token_of(&url).to_string();

        let source = registry.resolve(&token).unwrap();
        assert_eq!(source.mime_type, "image/png");
        assert_eq!(source.path, PathBuf::from("/tmp/a.png"));

        assert!(registry.revoke(&token));
        assert!(registry.resolve(&token).is_none());
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn revoke_is_idempotent() {
        let registry = PreviewRegistry::new();
        let url = registry.register(&candidate("/tmp/a.png", Some("image/png")));
        let token = token_of(&url).to_string();
        assert!(registry.revoke(&token));
        assert!(!registry.revoke(&token));
    }

    #[test]
    fn missing_mime_falls_back_to_octet_stream() {
        let registry = PreviewRegistry::new();
        let url = registry.register(&candidate("/tmp/blob", None));
        let source = registry.resolve(token_of(&url)).unwrap();
        assert_eq!(source.mime_type, FALLBACK_MIME);
    }

    #[test]
    fn token_of_handles_urls_and_paths() {
        assert_eq!(token_of("preview://localhost/abc123"), "abc123");
        assert_eq!(token_of("/abc123"), "abc123");
        assert_eq!(token_of("abc123"), "abc123");
    }

    #[test]
    fn respond_serves_bytes_for_live_token() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("pic.png");
        fs::write(&file_path, b"fakepng").unwrap();

        let registry = PreviewRegistry::new();
        let url = registry.register(&candidate(
            &file_path.to_string_lossy(),
            Some("image/png"),
        ));

        let response = respond(&registry, &format!("/{}", token_of(&url)));
        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), b"fakepng");
    }

    #[test]
    fn respond_404_after_revocation() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("pic.png");
        fs::write(&file_path, b"fakepng").unwrap();

        let registry = PreviewRegistry::new();
        let url = registry.register(&candidate(
            &file_path.to_string_lossy(),
            Some("image/png"),
        ));
        let token = token_of(&url).to_string();
        registry.revoke(&token);

        let response = respond(&registry, &format!("/{}", token));
        assert_eq!(response.status(), 404);
    }

    #[test]
    fn respond_404_for_unknown_token() {
        let registry = PreviewRegistry::new();
        let response = respond(&registry, "/never-registered");
        assert_eq!(response.status(), 404);
    }

    #[test]
    fn respond_404_when_backing_file_is_gone() {
        let registry = PreviewRegistry::new();
        let url = registry.register(&candidate("/nonexistent/pic.png", Some("image/png")));
        let response = respond(&registry, &format!("/{}", token_of(&url)));
        assert_eq!(response.status(), 404);
    }
}
