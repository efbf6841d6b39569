use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Curiosity {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub year: u16,
    pub description: &'static str,
}

static CURIOSITIES: [Curiosity; 4] = [
    Curiosity {
        title: "Where the word perfume comes from",
        description: "It derives from the Latin 'per fumum', meaning 'through smoke'.",
    },
    Curiosity {
        title: "Perfume as a status symbol",
        description: "In Ancient Egypt only royalty could use certain aromatic oils.",
    },
    Curiosity {
        title: "The first modern house",
        description: "Guerlain, founded in 1828, revolutionized French perfumery with complex compositions.",
    },
    Curiosity {
        title: "Professional noses",
        description: "Master perfumers can identify hundreds of raw materials with a single sniff.",
    },
];

// Kept in ascending year order.
static TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        year: 1921,
        description: "Chanel No.5 introduces aldehydes and redefines modern perfumery.",
    },
    TimelineEntry {
        year: 1957,
        description: "Diorissimo celebrates green floral notes with lily of the valley.",
    },
    TimelineEntry {
        year: 1992,
        description: "Thierry Mugler Angel popularizes the gourmand family.",
    },
    TimelineEntry {
        year: 2013,
        description: "Maison Francis Kurkdjian Baccarat Rouge 540 comes to embody modern luxury.",
    },
];

pub fn curiosities() -> &'static [Curiosity] {
    &CURIOSITIES
}

pub fn timeline() -> &'static [TimelineEntry] {
    &TIMELINE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curiosities_are_populated() {
        assert_eq!(curiosities().len(), 4);
        assert!(curiosities()
            .iter()
            .all(|c| !c.title.is_empty() && !c.description.is_empty()));
    }

    #[test]
    fn test_timeline_is_chronological() {
        let years: Vec<u16> = timeline().iter().map(|e| e.year).collect();
        assert_eq!(years, [1921, 1957, 1992, 2013]);
        assert!(years.windows(2).all(|w| w[0] < w[1]));
    }
}
