use crate::domain::ports::AssetResolver;
use std::path::{Component, Path, PathBuf};

/// Serves images out of a local public directory.
///
/// A reference resolves to itself when the file exists (or when it is a
/// remote URL); anything else resolves to the fallback image.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    public_dir: PathBuf,
    fallback: String,
}

impl StaticAssets {
    pub fn new(public_dir: impl Into<PathBuf>, fallback: impl Into<String>) -> Self {
        Self {
            public_dir: public_dir.into(),
            fallback: fallback.into(),
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl AssetResolver for StaticAssets {
    fn resolve(&self, media_ref: &str) -> String {
        if media_ref.starts_with("http://") || media_ref.starts_with("https://") {
            return media_ref.to_string();
        }

        let relative = Path::new(media_ref.trim_start_matches('/'));
        let stays_inside = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if stays_inside && self.public_dir.join(relative).is_file() {
            return media_ref.to_string();
        }

        tracing::warn!(
            "Image '{}' not found under {}, using fallback {}",
            media_ref,
            self.public_dir.display(),
            self.fallback
        );
        self.fallback.clone()
    }
}

/// Resolver that trusts every reference; used when no `[assets]` section is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughAssets;

impl AssetResolver for PassthroughAssets {
    fn resolve(&self, media_ref: &str) -> String {
        media_ref.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_existing_file_resolves_to_itself() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("butterfly-lifecycle")).unwrap();
        std::fs::write(dir.path().join("butterfly-lifecycle/egg.jpg"), b"jpg").unwrap();

        let assets = StaticAssets::new(dir.path(), "/fallback.jpeg");
        assert_eq!(
            assets.resolve("/butterfly-lifecycle/egg.jpg"),
            "/butterfly-lifecycle/egg.jpg"
        );
    }

    #[test]
    fn test_missing_file_uses_fallback() {
        let dir = TempDir::new().unwrap();
        let assets = StaticAssets::new(dir.path(), "/fallback.jpeg");
        assert_eq!(assets.resolve("/missing.jpg"), "/fallback.jpeg");
        assert_eq!(assets.resolve("/../etc/passwd"), "/fallback.jpeg");
        assert_eq!(assets.resolve(""), "/fallback.jpeg");
    }

    #[test]
    fn test_double_dots_inside_a_file_name_are_allowed() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("wing..v2.jpg"), b"jpg").unwrap();
        std::fs::create_dir_all(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("leak.jpg"), b"jpg").unwrap();

        let assets = StaticAssets::new(dir.path(), "/fallback.jpeg");
        assert_eq!(assets.resolve("/wing..v2.jpg"), "/wing..v2.jpg");
        assert_eq!(assets.resolve("/sub/../leak.jpg"), "/fallback.jpeg");
    }

    #[test]
    fn test_remote_references_pass_through() {
        let assets = StaticAssets::new("/nonexistent", "/fallback.jpeg");
        assert_eq!(
            assets.resolve("https://images.example.com/a.jpg"),
            "https://images.example.com/a.jpg"
        );
        assert_eq!(PassthroughAssets.resolve("/x.jpg"), "/x.jpg");
    }
}
