use serde::Serialize;

use crate::assets::{AssetReference, AssetResolver, AssetSpec};

#[derive(Debug, Clone, Serialize)]
pub struct GalleryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<&'static str>,
    pub image: AssetReference,
}

/// Landing page media: a three-image gallery and an introductory video.
#[derive(Debug, Clone, Serialize)]
pub struct HomeMedia {
    pub gallery: Vec<GalleryItem>,
    pub video: AssetReference,
}

const HOME_GALLERY: [(Option<&str>, AssetSpec); 3] = [
    (
        Some("Essence 1"),
        AssetSpec::image(
            "Esencia1.jpg",
            "https://images.unsplash.com/photo-1501004318641-b39e6451bec6",
        ),
    ),
    (
        Some("Essence 2"),
        AssetSpec::image(
            "Esencia2.jpg",
            "https://images.unsplash.com/photo-1498837167922-ddd27525d352",
        ),
    ),
    (
        Some("Essence 3"),
        AssetSpec::image(
            "Esencia3.jpg",
            "https://images.unsplash.com/photo-1498842812179-c81beecf902c",
        ),
    ),
];

const HOME_VIDEO: AssetSpec = AssetSpec::video(
    "historia_perfume.mp4",
    "https://www.youtube.com/watch?v=QRZPy8Oag3g",
);

const LEGENDARY_GALLERY: [AssetSpec; 3] = [
    AssetSpec::image(
        "lengendario3.jpg",
        "https://images.unsplash.com/photo-1512767347951-df63c80f31ea?auto=compress&fit=crop&w=900",
    ),
    AssetSpec::image(
        "legendario1.jpg",
        "https://images.unsplash.com/photo-1487412720507-6297c0ae4bda",
    ),
    AssetSpec::image(
        "legendario2.jpg",
        "https://images.unsplash.com/photo-1498842812179-c81beecf902c",
    ),
];

pub fn home_gallery(resolver: &AssetResolver) -> Vec<GalleryItem> {
    HOME_GALLERY
        .iter()
        .map(|(caption, spec)| GalleryItem {
            caption: *caption,
            image: resolver.resolve_spec(spec),
        })
        .collect()
}

pub fn home_video(resolver: &AssetResolver) -> AssetReference {
    resolver.resolve_spec(&HOME_VIDEO)
}

pub fn home_media(resolver: &AssetResolver) -> HomeMedia {
    HomeMedia {
        gallery: home_gallery(resolver),
        video: home_video(resolver),
    }
}

pub fn legendary_gallery(resolver: &AssetResolver) -> Vec<GalleryItem> {
    LEGENDARY_GALLERY
        .iter()
        .map(|spec| GalleryItem {
            caption: None,
            image: resolver.resolve_spec(spec),
        })
        .collect()
}
