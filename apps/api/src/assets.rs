//! Asset Resolver: maps a logical asset name to a local file or a fallback.
//!
//! Lookups hit the filesystem on every call. There is no cache, so a file
//! dropped into the asset tree is picked up by the next request.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Image,
    Video,
}

impl AssetKind {
    /// Subdirectory of the asset root holding this kind of asset.
    pub fn subdir(self) -> &'static str {
        match self {
            AssetKind::Image => "images",
            AssetKind::Video => "video",
        }
    }
}

/// Result of a resolution.
///
/// `primary_path` holds the absolute local path when the file exists, and the
/// fallback otherwise, so renderers can read a single field. Both being `None`
/// means there is nothing to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetReference {
    pub primary_path: Option<String>,
    pub fallback_reference: Option<String>,
}

impl AssetReference {
    pub fn is_empty(&self) -> bool {
        self.primary_path.is_none() && self.fallback_reference.is_none()
    }

    /// The source a renderer should show: primary first, then fallback.
    pub fn display_source(&self) -> Option<&str> {
        self.primary_path
            .as_deref()
            .or(self.fallback_reference.as_deref())
    }
}

/// A static pointer to an asset: local file name plus remote fallback.
/// Catalog tables hold these; they become `AssetReference`s at request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSpec {
    pub kind: AssetKind,
    pub name: &'static str,
    pub fallback: &'static str,
}

impl AssetSpec {
    pub const fn image(name: &'static str, fallback: &'static str) -> Self {
        Self {
            kind: AssetKind::Image,
            name,
            fallback,
        }
    }

    pub const fn video(name: &'static str, fallback: &'static str) -> Self {
        Self {
            kind: AssetKind::Video,
            name,
            fallback,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    /// Builds a resolver rooted at `root`. Relative roots are made absolute
    /// against the current working directory.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = std::path::absolute(root.as_ref())?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, kind: AssetKind, name: &str, fallback: Option<&str>) -> AssetReference {
        let fallback_reference = fallback.map(str::to_string);

        let local = self
            .local_path(kind, name)
            .filter(|path| path.exists())
            .map(|path| path.display().to_string());

        match local {
            Some(path) => AssetReference {
                primary_path: Some(path),
                fallback_reference,
            },
            None => AssetReference {
                primary_path: fallback_reference.clone(),
                fallback_reference,
            },
        }
    }

    pub fn resolve_image(&self, name: &str, fallback: Option<&str>) -> AssetReference {
        self.resolve(AssetKind::Image, name, fallback)
    }

    pub fn resolve_video(&self, name: &str, fallback: Option<&str>) -> AssetReference {
        self.resolve(AssetKind::Video, name, fallback)
    }

    pub fn resolve_spec(&self, spec: &AssetSpec) -> AssetReference {
        self.resolve(spec.kind, spec.name, Some(spec.fallback))
    }

    /// Constructs `<root>/<subdir>/<name>`, or `None` when `name` would leave
    /// the subtree.
    fn local_path(&self, kind: AssetKind, name: &str) -> Option<PathBuf> {
        if !is_contained(Path::new(name)) {
            return None;
        }
        Some(self.root.join(kind.subdir()).join(name))
    }
}

fn is_contained(name: &Path) -> bool {
    let mut components = name.components().peekable();
    if components.peek().is_none() {
        return false;
    }
    components.all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
