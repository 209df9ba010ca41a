//! Seed data: the built-in lesson catalog, section titles, the starting
//! wallet and leaderboard standings, plus loading catalogs from files.

pub mod economy;
pub mod loader;

use serde::{Deserialize, Serialize};

use crate::core::{Catalog, Lesson, LessonKind};

pub use economy::{LeaderboardEntry, Wallet, last_week_rank, seed_leaderboard};
pub use loader::{CatalogFile, SeedCatalog, load_catalog};

/// Display title for a section key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionInfo {
    pub key: u32,
    pub title: String,
}

impl SectionInfo {
    #[must_use]
    pub fn new(key: u32, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
        }
    }
}

/// Stars per seeded lesson.
const SEED_TOTAL: u32 = 3;

const FCRA_PARTS: [&str; 10] = [
    "Name the Parties",
    "Purpose and Scope",
    "Permissible Purpose",
    "Consumer Rights",
    "Furnisher Duties",
    "CRA Duties",
    "Dispute Process",
    "Enforcement",
    "Penalties",
    "Practical Application",
];

#[must_use]
pub fn builtin_sections() -> Vec<SectionInfo> {
    vec![
        SectionInfo::new(1, "Section 1 – FCRA Basics"),
        SectionInfo::new(2, "Section 2 – FDCPA Basics"),
        SectionInfo::new(3, "Section 3 – GLBA Basics"),
    ]
}

/// Lesson rows of the built-in catalog, in path order.
#[must_use]
pub fn builtin_lessons() -> Vec<Lesson> {
    let mut lessons = Vec::new();

    for (idx, topic) in FCRA_PARTS.iter().enumerate() {
        let part = idx + 1;
        lessons.push(Lesson::new(
            format!("S1P{part}"),
            format!("FCRA 101 Part {part} – {topic}"),
            LessonKind::Reading,
            SEED_TOTAL,
            1,
        ));
    }
    lessons.push(Lesson::new("S1Quiz", "FCRA 101 Quiz", LessonKind::Core, SEED_TOTAL, 1));
    lessons.push(Lesson::new("S1Workbook", "FCRA 101 Workbook", LessonKind::Core, SEED_TOTAL, 1));

    lessons.extend(short_section(
        2,
        "FDCPA 101",
        &["Overview", "Communication Rules"],
    ));
    lessons.extend(short_section(
        3,
        "GLBA 101",
        &["Overview", "Privacy Notices"],
    ));

    lessons
}

fn short_section(section: u32, course: &str, parts: &[&str]) -> Vec<Lesson> {
    let mut lessons: Vec<Lesson> = parts
        .iter()
        .enumerate()
        .map(|(idx, topic)| {
            Lesson::new(
                format!("S{section}P{}", idx + 1),
                format!("{course} Part {} – {topic}", idx + 1),
                LessonKind::Reading,
                SEED_TOTAL,
                section,
            )
        })
        .collect();
    lessons.push(Lesson::new(
        format!("S{section}Quiz"),
        format!("{course} Quiz"),
        LessonKind::Core,
        SEED_TOTAL,
        section,
    ));
    lessons.push(Lesson::new(
        format!("S{section}Workbook"),
        format!("{course} Workbook"),
        LessonKind::Core,
        SEED_TOTAL,
        section,
    ));
    lessons
}

/// The built-in catalog in its initial state.
#[must_use]
pub fn builtin_catalog() -> SeedCatalog {
    SeedCatalog {
        sections: builtin_sections(),
        catalog: Catalog::new(builtin_lessons()),
    }
}
