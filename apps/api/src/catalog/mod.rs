// Content Catalog: static, read-only datasets behind accessor functions.
// Tables are statics; records carrying imagery are assembled per call so the
// asset resolver always sees the current asset tree.

pub mod curiosities;
pub mod families;
pub mod graph;
pub mod handlers;
pub mod media;
pub mod perfume_types;
pub mod quiz_content;

pub use curiosities::{curiosities, timeline, Curiosity, TimelineEntry};
pub use families::{olfactive_families, olfactive_family, OlfactiveFamily};
pub use graph::{family_graph, FamilyEdge, FamilyGraph};
pub use media::{home_gallery, home_media, home_video, legendary_gallery, GalleryItem, HomeMedia};
pub use perfume_types::{
    perfume_examples, perfume_examples_map, perfume_type, perfume_type_advice,
    perfume_type_detail, perfume_type_image, perfume_types, PerfumeType, PerfumeTypeDetail,
};
pub use quiz_content::{
    quiz_questions, recommendation, recommendation_for_key, recommendations, Category,
    QuizOption, QuizQuestion, Recommendation,
};
