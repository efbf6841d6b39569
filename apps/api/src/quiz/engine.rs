//! Quiz scoring.
//!
//! Algorithm:
//! 1. Start every category at zero, so the tally always has all four keys.
//! 2. Each response that exactly matches a category key adds one vote.
//!    Anything else is ignored.
//! 3. The winner is the first category in canonical order
//!    (fresh, floral, oriental, woody) that holds the maximum.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::assets::{AssetReference, AssetResolver};
use crate::catalog::{recommendation, Category};

/// Vote count per category. Always holds exactly the four canonical keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Scores(BTreeMap<Category, u32>);

impl Default for Scores {
    fn default() -> Self {
        Self(Category::ALL.into_iter().map(|c| (c, 0)).collect())
    }
}

impl Scores {
    pub fn get(&self, category: Category) -> u32 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.0.iter().map(|(c, n)| (*c, *n))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn record(&mut self, category: Category) {
        *self.0.entry(category).or_insert(0) += 1;
    }

    /// First category in canonical order holding the highest count.
    pub fn winner(&self) -> Category {
        let mut best = Category::ALL[0];
        for category in Category::ALL {
            // Strictly greater: earlier categories keep ties.
            if self.get(category) > self.get(best) {
                best = category;
            }
        }
        best
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResult {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub image: AssetReference,
    pub scores: Scores,
}

pub fn tally<S: AsRef<str>>(responses: &[S]) -> Scores {
    let mut scores = Scores::default();
    for category in responses
        .iter()
        .filter_map(|r| Category::from_key(r.as_ref()))
    {
        scores.record(category);
    }
    scores
}

pub fn evaluate<S: AsRef<str>>(resolver: &AssetResolver, responses: &[S]) -> QuizResult {
    let scores = tally(responses);
    let rec = recommendation(resolver, scores.winner());

    QuizResult {
        category: rec.category,
        title: rec.title,
        description: rec.description,
        image: rec.image,
        scores,
    }
}
