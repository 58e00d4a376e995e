#![allow(dead_code)]

//! Skill Classifier — assigns a free-text skill label to exactly one [`Category`].
//!
//! Default: `KeywordClassifier` (first-match-wins substring lookup over the registry).
//! The trait keeps the seam open for a stricter tokenizing classifier without touching the
//! aggregator or the handlers.
//!
//! Known limitation: matching is plain substring containment, so `"go"` also matches
//! `"Django"` and `"Algorithms"`, and those land in `Programming`. This is kept as-is.

use serde::Serialize;

use crate::taxonomy::Category;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Maps one skill string to one category. Implementations must be total and
/// deterministic: the same input always yields the same category.
pub trait SkillClassifier: Send + Sync {
    fn classify(&self, skill: &str) -> Category;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordClassifier
// ────────────────────────────────────────────────────────────────────────────

/// Keyword-membership classifier over the compiled-in registry.
///
/// Algorithm:
/// 1. Lower-case the skill.
/// 2. Walk `Category::ALL` in declaration order, skipping `Other`.
/// 3. Return the first category with any keyword contained in the skill.
/// 4. Nothing matched → `Other`.
///
/// Specificity and keyword length are ignored: an earlier category always wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl SkillClassifier for KeywordClassifier {
    fn classify(&self, skill: &str) -> Category {
        classify(skill)
    }
}

/// Classifies a single skill against the registry. See [`KeywordClassifier`].
pub fn classify(skill: &str) -> Category {
    let skill_lower = skill.to_lowercase();
    Category::keyed()
        .find(|category| {
            category
                .keywords()
                .iter()
                .any(|kw| skill_lower.contains(kw))
        })
        .unwrap_or(Category::Other)
}

// ────────────────────────────────────────────────────────────────────────────
// Set classification
// ────────────────────────────────────────────────────────────────────────────

/// Per-category buckets of skills, one bucket per [`Category`], always all present.
/// Skills keep their input order inside a bucket; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    buckets: [Vec<String>; Category::COUNT],
}

impl Classification {
    pub fn get(&self, category: Category) -> &[String] {
        &self.buckets[category.index()]
    }

    pub fn count(&self, category: Category) -> usize {
        self.buckets[category.index()].len()
    }

    /// Total skills across every bucket.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Buckets in taxonomy order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

/// Serialized as `{ "<category label>": [skills...] }` in taxonomy order.
impl Serialize for Classification {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, skills) in self.iter() {
            map.serialize_entry(category.label(), skills)?;
        }
        map.end()
    }
}

/// Classifies every skill in `skills`, partitioning the list exhaustively.
pub fn classify_set<C, S>(classifier: &C, skills: &[S]) -> Classification
where
    C: SkillClassifier + ?Sized,
    S: AsRef<str>,
{
    let mut result = Classification::default();
    for skill in skills {
        let skill = skill.as_ref();
        let category = classifier.classify(skill);
        result.buckets[category.index()].push(skill.to_string());
    }
    result
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
