use serde::Serialize;

use crate::assets::{AssetReference, AssetResolver, AssetSpec};

/// One row of the concentration table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerfumeType {
    pub name: &'static str,
    pub concentration_range: &'static str,
    pub duration_range: &'static str,
    pub olfactive_profile: &'static str,
}

/// Everything known about a single type, assembled per request.
#[derive(Debug, Clone, Serialize)]
pub struct PerfumeTypeDetail {
    #[serde(flatten)]
    pub record: PerfumeType,
    pub examples: &'static [&'static str],
    pub usage_advice: Option<&'static str>,
    pub image: Option<AssetReference>,
}

struct TypeExtras {
    name: &'static str,
    examples: &'static [&'static str],
    image: AssetSpec,
    advice: &'static str,
}

// Ordered by concentration, strongest first.
static PERFUME_TYPES: [PerfumeType; 5] = [
    PerfumeType {
        name: "Parfum (Extract)",
        concentration_range: "20-40% essence",
        duration_range: "8-12 hours",
        olfactive_profile: "Rich, intense, close to the skin",
    },
    PerfumeType {
        name: "Eau de Parfum",
        concentration_range: "15-20% essence",
        duration_range: "6-8 hours",
        olfactive_profile: "Depth, generous sillage",
    },
    PerfumeType {
        name: "Eau de Toilette",
        concentration_range: "8-12% essence",
        duration_range: "4-6 hours",
        olfactive_profile: "Versatile, made for daytime",
    },
    PerfumeType {
        name: "Eau de Cologne",
        concentration_range: "2-5% essence",
        duration_range: "2-3 hours",
        olfactive_profile: "Refreshing, citrus",
    },
    PerfumeType {
        name: "Body Mist",
        concentration_range: "1-3% essence",
        duration_range: "1-2 hours",
        olfactive_profile: "Very light, frequent use",
    },
];

static TYPE_EXTRAS: [TypeExtras; 5] = [
    TypeExtras {
        name: "Parfum (Extract)",
        examples: &["Chanel No.5 Parfum", "Maison Francis Kurkdjian Baccarat Rouge 540"],
        image: AssetSpec::image(
            "baccarat.jpg",
            "https://images.unsplash.com/photo-1512767347951-df63c80f31ea?auto=compress&fit=crop&w=900",
        ),
        advice: "Memorable events, evenings and cold weather where intensity stands out.",
    },
    TypeExtras {
        name: "Eau de Parfum",
        examples: &["Dior J'adore", "YSL Libre"],
        image: AssetSpec::image(
            "dior.jpg",
            "https://images.unsplash.com/photo-1487412720507-6297c0ae4bda?auto=compress&fit=crop&w=900",
        ),
        advice: "Versatile wear, ideal for the office, dates and social outings.",
    },
    TypeExtras {
        name: "Eau de Toilette",
        examples: &["Acqua di Gio", "CH 212"],
        image: AssetSpec::image(
            "acqua.jpg",
            "https://images.unsplash.com/photo-1521572267360-ee0c2909d518?auto=compress&fit=crop&w=900",
        ),
        advice: "Everyday wear, warm settings or informal gatherings.",
    },
    TypeExtras {
        name: "Eau de Cologne",
        examples: &["4711 Original", "Tom Ford Neroli Portofino"],
        image: AssetSpec::image(
            "Cologne.jpg",
            "https://images.unsplash.com/photo-1498837167922-ddd27525d352?auto=compress&fit=crop&w=900",
        ),
        advice: "Freshen up after exercise or during intense summers.",
    },
    TypeExtras {
        name: "Body Mist",
        examples: &["Victoria's Secret Love Spell", "Bath & Body Works Gingham"],
        image: AssetSpec::image(
            "body.jpg",
            "https://images.unsplash.com/photo-1465408953385-7c4624fa7d6a?auto=compress&fit=crop&w=900",
        ),
        advice: "Reapply often to keep a subtle halo throughout the day.",
    },
];

pub fn perfume_types() -> &'static [PerfumeType] {
    &PERFUME_TYPES
}

pub fn perfume_type(name: &str) -> Option<&'static PerfumeType> {
    PERFUME_TYPES.iter().find(|t| t.name == name)
}

/// Example fragrances for a type. Unknown names yield an empty slice.
pub fn perfume_examples(name: &str) -> &'static [&'static str] {
    extras(name).map(|e| e.examples).unwrap_or(&[])
}

/// Type name → examples, in table order.
pub fn perfume_examples_map() -> Vec<(&'static str, &'static [&'static str])> {
    TYPE_EXTRAS.iter().map(|e| (e.name, e.examples)).collect()
}

pub fn perfume_type_advice(name: &str) -> Option<&'static str> {
    extras(name).map(|e| e.advice)
}

pub fn perfume_type_image(resolver: &AssetResolver, name: &str) -> Option<AssetReference> {
    extras(name).map(|e| resolver.resolve_spec(&e.image))
}

pub fn perfume_type_detail(resolver: &AssetResolver, name: &str) -> Option<PerfumeTypeDetail> {
    let record = perfume_type(name)?.clone();
    Some(PerfumeTypeDetail {
        record,
        examples: perfume_examples(name),
        usage_advice: perfume_type_advice(name),
        image: perfume_type_image(resolver, name),
    })
}

fn extras(name: &str) -> Option<&'static TypeExtras> {
    TYPE_EXTRAS.iter().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_types_in_concentration_order() {
        let names: Vec<_> = perfume_types().iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            [
                "Parfum (Extract)",
                "Eau de Parfum",
                "Eau de Toilette",
                "Eau de Cologne",
                "Body Mist"
            ]
        );
    }

    #[test]
    fn test_every_type_has_examples_and_advice() {
        for t in perfume_types() {
            assert_eq!(perfume_examples(t.name).len(), 2, "{}", t.name);
            assert!(perfume_type_advice(t.name).is_some(), "{}", t.name);
        }
        assert_eq!(perfume_examples_map().len(), perfume_types().len());
    }

    #[test]
    fn test_unknown_type_has_no_examples() {
        assert!(perfume_examples("Eau Fraiche").is_empty());
        assert!(perfume_type("Eau Fraiche").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(perfume_type("body mist").is_none());
        assert!(perfume_examples("EAU DE PARFUM").is_empty());
        assert!(perfume_type("Body Mist").is_some());
    }

    #[test]
    fn test_detail_falls_back_to_remote_image() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = AssetResolver::new(dir.path()).unwrap();
        let detail = perfume_type_detail(&resolver, "Eau de Toilette").unwrap();
        assert_eq!(detail.examples, ["Acqua di Gio", "CH 212"]);
        let image = detail.image.unwrap();
        assert_eq!(image.primary_path, image.fallback_reference);
        assert!(perfume_type_detail(&resolver, "Unknown").is_none());
    }
}
