use proptest::prelude::*;

use everyday_winners::core::{
    Catalog, Lesson, LessonKind, ProgressionEngine, compute_progress, group_by_section,
};

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec((1u32..6, 1u32..4), 1..12).prop_map(|rows| {
        Catalog::new(
            rows.into_iter()
                .enumerate()
                .map(|(i, (total, section))| {
                    Lesson::new(format!("L{i}"), format!("Lesson {i}"), LessonKind::Core, total, section)
                })
                .collect(),
        )
    })
}

/// Ids drawn from the catalog's range plus a few that never exist.
fn arb_steps() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(0usize..15, 0..60)
        .prop_map(|ids| ids.into_iter().map(|i| format!("L{i}")).collect())
}

proptest! {
    #[test]
    fn test_stars_never_decrease_or_exceed_total(catalog in arb_catalog(), steps in arb_steps()) {
        let mut engine = ProgressionEngine::new(catalog);
        for id in &steps {
            let before = engine.snapshot();
            engine.complete_step(id);
            for (old, new) in before.iter().zip(engine.catalog().iter()) {
                prop_assert!(new.stars >= old.stars);
                prop_assert!(new.stars <= new.total);
                prop_assert!(new.unlocked || !old.unlocked);
            }
        }
    }

    #[test]
    fn test_unlocked_lessons_form_a_prefix(catalog in arb_catalog(), steps in arb_steps()) {
        let mut engine = ProgressionEngine::new(catalog);
        for id in &steps {
            engine.complete_step(id);
        }
        let unlocked: Vec<bool> = engine.catalog().iter().map(|l| l.unlocked).collect();
        let first_locked = unlocked.iter().position(|u| !u).unwrap_or(unlocked.len());
        prop_assert!(unlocked[first_locked..].iter().all(|u| !u));
        // every unlocked lesson but the first was unlocked by its finished predecessor
        for pair in engine.catalog().lessons().windows(2) {
            if pair[1].unlocked {
                prop_assert_eq!(pair[0].stars, pair[0].total);
            }
        }
    }

    #[test]
    fn test_unknown_id_changes_nothing(catalog in arb_catalog(), steps in arb_steps()) {
        let mut engine = ProgressionEngine::new(catalog);
        for id in &steps {
            engine.complete_step(id);
        }
        let before = engine.snapshot();
        let outcome = engine.complete_step("not-a-lesson");
        prop_assert_eq!(&outcome.catalog, &before);
        prop_assert!(outcome.lesson.is_none());
        prop_assert!(outcome.newly_unlocked.is_none());
    }

    #[test]
    fn test_progress_and_grouping_are_pure(catalog in arb_catalog(), section in 0u32..5) {
        let before = catalog.clone();
        prop_assert_eq!(compute_progress(&catalog), compute_progress(&catalog));
        let first: Vec<String> = group_by_section(&catalog, section).iter().map(|l| l.id.clone()).collect();
        let second: Vec<String> = group_by_section(&catalog, section).iter().map(|l| l.id.clone()).collect();
        prop_assert_eq!(first, second);
        prop_assert_eq!(catalog, before);
    }

    #[test]
    fn test_progress_bounds(catalog in arb_catalog(), steps in arb_steps()) {
        let mut engine = ProgressionEngine::new(catalog);
        for id in &steps {
            engine.complete_step(id);
        }
        let progress = engine.progress();
        prop_assert!(progress.earned <= progress.max);
        prop_assert!(progress.percent <= 100);
        let expected_max: u64 = engine.catalog().iter().map(|l| u64::from(l.total)).sum();
        prop_assert_eq!(progress.max, expected_max);
    }

    #[test]
    fn test_initial_state(catalog in arb_catalog()) {
        let lessons = catalog.lessons();
        prop_assert!(lessons[0].unlocked);
        prop_assert!(lessons[1..].iter().all(|l| !l.unlocked));
        prop_assert!(lessons.iter().all(|l| l.stars == 0));
        prop_assert_eq!(compute_progress(&catalog).earned, 0);
    }
}
