//! Taxonomy Registry — the fixed, ordered skill categories and their keyword sets.
//!
//! Declaration order of [`Category::ALL`] is classification priority: the classifier walks
//! it front to back and the first category with a matching keyword wins. Changing a keyword
//! set or the order changes classification results, so bump [`TAXONOMY_VERSION`] with it.

pub mod classifier;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Version of the compiled-in taxonomy, echoed in every breakdown envelope.
pub const TAXONOMY_VERSION: &str = "2024.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Programming,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Data & Analytics")]
    DataAnalytics,
    #[serde(rename = "Tools & Frameworks")]
    ToolsFrameworks,
    Fundamentals,
    Other,
}

impl Category {
    pub const COUNT: usize = 6;

    /// Every category in priority order. `Other` is always last.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Programming,
        Category::WebDevelopment,
        Category::DataAnalytics,
        Category::ToolsFrameworks,
        Category::Fundamentals,
        Category::Other,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Category::Programming => "Programming",
            Category::WebDevelopment => "Web Development",
            Category::DataAnalytics => "Data & Analytics",
            Category::ToolsFrameworks => "Tools & Frameworks",
            Category::Fundamentals => "Fundamentals",
            Category::Other => "Other",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase substrings that pull a skill into this category.
    /// `Other` owns no keywords; it is the fallback.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Programming => &[
                "python",
                "java",
                "javascript",
                "c++",
                "c#",
                "php",
                "ruby",
                "go",
                "rust",
                "kotlin",
                "swift",
            ],
            Category::WebDevelopment => &[
                "html", "css", "react", "angular", "vue", "node", "express", "django", "flask",
                "spring",
            ],
            Category::DataAnalytics => &[
                "sql",
                "mongodb",
                "postgresql",
                "mysql",
                "redis",
                "elasticsearch",
                "machine learning",
                "data science",
                "statistics",
                "pandas",
                "numpy",
            ],
            Category::ToolsFrameworks => &[
                "git",
                "docker",
                "kubernetes",
                "aws",
                "azure",
                "jenkins",
                "webpack",
                "babel",
                "linux",
            ],
            Category::Fundamentals => &[
                "data structures",
                "algorithms",
                "object oriented programming",
                "system design",
                "software engineering",
                "computer networks",
                "operating systems",
            ],
            Category::Other => &[],
        }
    }

    /// Categories that carry keyword sets, in priority order.
    pub fn keyed() -> impl Iterator<Item = Category> {
        Category::ALL
            .into_iter()
            .filter(|c| *c != Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
