use serde::Serialize;

use crate::assets::{AssetReference, AssetResolver, AssetSpec};

#[derive(Debug, Clone, Serialize)]
pub struct OlfactiveFamily {
    pub name: &'static str,
    pub description: &'static str,
    pub representative_examples: &'static str,
    pub image: AssetReference,
}

struct FamilyEntry {
    name: &'static str,
    description: &'static str,
    examples: &'static str,
    image: AssetSpec,
}

static FAMILIES: [FamilyEntry; 5] = [
    FamilyEntry {
        name: "Floral",
        description: "Bouquets rich in fresh flower notes and sweet petals.",
        examples: "Chanel No.5, Marc Jacobs Daisy",
        image: AssetSpec::image(
            "floral.jpg",
            "https://images.unsplash.com/photo-1487412720507-6297c0ae4bda",
        ),
    },
    FamilyEntry {
        name: "Citrus",
        description: "Lively fragrances with notes of lemon, bergamot and mandarin.",
        examples: "Dior Eau Sauvage, Atelier Cologne Orange Sanguine",
        image: AssetSpec::image(
            "citricas.jpg",
            "https://images.unsplash.com/photo-1521572267360-ee0c2909d518?auto=compress&fit=crop&w=900",
        ),
    },
    FamilyEntry {
        name: "Woody",
        description: "Scents of noble woods, resins and vetiver.",
        examples: "Terre d'Hermès, Tom Ford Oud Wood",
        image: AssetSpec::image(
            "amaderadas.jpg",
            "https://images.unsplash.com/photo-1498842812179-c81beecf902c?auto=compress&fit=crop&w=800",
        ),
    },
    FamilyEntry {
        name: "Oriental",
        description: "Spiced, sweet and enveloping compositions.",
        examples: "Guerlain Shalimar, Yves Saint Laurent Opium",
        image: AssetSpec::image(
            "orientales.jpg",
            "https://images.unsplash.com/photo-1512767347951-df63c80f31ea?auto=compress&fit=crop&w=900",
        ),
    },
    FamilyEntry {
        name: "Aromatic",
        description: "Herbal notes such as lavender, sage and rosemary.",
        examples: "Giorgio Armani Acqua di Giò Profumo, Dior Sauvage",
        image: AssetSpec::image(
            "aromatica.jpg",
            "https://images.unsplash.com/photo-1465408953385-7c4624fa7d6a?auto=compress&fit=crop&w=800",
        ),
    },
];

/// Family names in display order.
pub fn family_names() -> impl Iterator<Item = &'static str> {
    FAMILIES.iter().map(|f| f.name)
}

/// All five families with their images resolved against the current asset tree.
pub fn olfactive_families(resolver: &AssetResolver) -> Vec<OlfactiveFamily> {
    FAMILIES.iter().map(|f| build(resolver, f)).collect()
}

pub fn olfactive_family(resolver: &AssetResolver, name: &str) -> Option<OlfactiveFamily> {
    FAMILIES
        .iter()
        .find(|f| f.name == name)
        .map(|f| build(resolver, f))
}

fn build(resolver: &AssetResolver, entry: &FamilyEntry) -> OlfactiveFamily {
    OlfactiveFamily {
        name: entry.name,
        description: entry.description,
        representative_examples: entry.examples,
        image: resolver.resolve_spec(&entry.image),
    }
}
