use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assets::{AssetReference, AssetResolver, AssetSpec};

/// Quiz outcome bucket. Variant order is the canonical tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Fresh,
    Floral,
    Oriental,
    Woody,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Fresh,
        Category::Floral,
        Category::Oriental,
        Category::Woody,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Fresh => "fresh",
            Category::Floral => "floral",
            Category::Oriental => "oriental",
            Category::Woody => "woody",
        }
    }

    /// Exact, case-sensitive key match.
    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub category: Category,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: [QuizOption; 4],
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub image: AssetReference,
}

const fn opt(category: Category, label: &'static str) -> QuizOption {
    QuizOption { category, label }
}

static QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        prompt: "What feeling do you look for in your everyday fragrance?",
        options: [
            opt(Category::Fresh, "Lightness and freshness"),
            opt(Category::Floral, "Romance and sweetness"),
            opt(Category::Oriental, "Sensuality and warmth"),
            opt(Category::Woody, "Sophistication and elegance"),
        ],
    },
    QuizQuestion {
        prompt: "Which notes do you prefer at the opening of a perfume?",
        options: [
            opt(Category::Fresh, "Sparkling citrus"),
            opt(Category::Floral, "Soft petals"),
            opt(Category::Oriental, "Exotic spices"),
            opt(Category::Woody, "Aromatic herbs and woods"),
        ],
    },
    QuizQuestion {
        prompt: "How do you want to be remembered?",
        options: [
            opt(Category::Floral, "Delicate and charming"),
            opt(Category::Oriental, "Mysterious and intense"),
            opt(Category::Woody, "Elegant and professional"),
            opt(Category::Fresh, "Vibrant and youthful"),
        ],
    },
    QuizQuestion {
        prompt: "Which setting inspires you the most?",
        options: [
            opt(Category::Fresh, "A Mediterranean coast"),
            opt(Category::Floral, "A garden in spring"),
            opt(Category::Oriental, "An oriental bazaar"),
            opt(Category::Woody, "A rainy forest"),
        ],
    },
    QuizQuestion {
        prompt: "Pick an accessory that complements your style",
        options: [
            opt(Category::Woody, "Leather watch"),
            opt(Category::Oriental, "Golden jewelry"),
            opt(Category::Floral, "Silk scarf"),
            opt(Category::Fresh, "Sunglasses"),
        ],
    },
];

struct RecommendationEntry {
    category: Category,
    title: &'static str,
    description: &'static str,
    image: AssetSpec,
}

static RECOMMENDATIONS: [RecommendationEntry; 4] = [
    RecommendationEntry {
        category: Category::Fresh,
        title: "Citrus/Aquatic Family",
        description: "Refreshing through and through, perfect for active days and warm climates.",
        image: AssetSpec::image(
            "esencia_3.jpg",
            "https://images.unsplash.com/photo-1521572267360-ee0c2909d518?auto=compress&fit=crop&w=900",
        ),
    },
    RecommendationEntry {
        category: Category::Floral,
        title: "Floral Family",
        description: "Delicate and romantic, ideal for intimate moments and special occasions.",
        image: AssetSpec::image(
            "esencia_2.jpg",
            "https://images.unsplash.com/photo-1487412720507-6297c0ae4bda",
        ),
    },
    RecommendationEntry {
        category: Category::Oriental,
        title: "Oriental/Amber Family",
        description: "Spiced, sweet notes that wrap you in a nocturnal magnetism.",
        image: AssetSpec::image(
            "esencia_1.jpg",
            "https://images.unsplash.com/photo-1512767347951-df63c80f31ea?auto=compress&fit=crop&w=900",
        ),
    },
    RecommendationEntry {
        category: Category::Woody,
        title: "Woody/Aromatic Family",
        description: "Serene elegance built on vetiver, cedar and noble herbs.",
        image: AssetSpec::image(
            "esencia_1.jpg",
            "https://images.unsplash.com/photo-1498842812179-c81beecf902c?auto=compress&fit=crop&w=800",
        ),
    },
];

pub fn quiz_questions() -> &'static [QuizQuestion] {
    &QUESTIONS
}

pub fn recommendation(resolver: &AssetResolver, category: Category) -> Recommendation {
    // Rows are laid out in `Category::ALL` order.
    let entry = &RECOMMENDATIONS[category as usize];
    Recommendation {
        category: entry.category,
        title: entry.title,
        description: entry.description,
        image: resolver.resolve_spec(&entry.image),
    }
}

/// Lookup by raw key. Unknown keys yield `None`.
pub fn recommendation_for_key(resolver: &AssetResolver, key: &str) -> Option<Recommendation> {
    Category::from_key(key).map(|c| recommendation(resolver, c))
}

pub fn recommendations(resolver: &AssetResolver) -> Vec<Recommendation> {
    Category::ALL
        .into_iter()
        .map(|c| recommendation(resolver, c))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_five_questions_each_spanning_all_categories() {
        assert_eq!(quiz_questions().len(), 5);
        for q in quiz_questions() {
            let categories: BTreeSet<_> = q.options.iter().map(|o| o.category).collect();
            assert_eq!(categories.len(), 4, "{}", q.prompt);
            assert_eq!(categories.into_iter().collect::<Vec<_>>(), Category::ALL);
        }
    }

    #[test]
    fn test_category_keys_round_trip_case_sensitively() {
        for c in Category::ALL {
            assert_eq!(Category::from_key(c.key()), Some(c));
        }
        assert_eq!(Category::from_key("Fresh"), None);
        assert_eq!(Category::from_key("spicy"), None);
    }

    #[test]
    fn test_category_serializes_as_key() {
        assert_eq!(serde_json::to_string(&Category::Woody).unwrap(), "\"woody\"");
    }

    #[test]
    fn test_recommendation_rows_follow_canonical_order() {
        for (row, category) in RECOMMENDATIONS.iter().zip(Category::ALL) {
            assert_eq!(row.category, category);
        }
    }

    #[test]
    fn test_one_recommendation_per_category() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = AssetResolver::new(dir.path()).unwrap();
        let recs = recommendations(&resolver);
        let categories: Vec<_> = recs.iter().map(|r| r.category).collect();
        assert_eq!(categories, Category::ALL);
        assert_eq!(recommendation(&resolver, Category::Floral).title, "Floral Family");
        assert!(recommendation_for_key(&resolver, "amber").is_none());
    }
}
