use super::common::*;
use crate::assessments::archetype::scoring::{description_keys, lookup, MULTIPLE_KEY};
use crate::assessments::archetype::{
    classify, compute_score, resolve_description_key, AnswerSet, Archetype, ArchetypeCatalog,
    ArchetypeResult, DescriptionKey, ScoreVector,
};

use Archetype::{Accelerator, Architect, Entrepreneur, Visionary};

#[test]
fn each_answer_adds_a_tenth_to_its_archetype() {
    let answers = answers_for(&[
        (Architect, 4),
        (Visionary, 3),
        (Accelerator, 2),
        (Entrepreneur, 1),
    ]);
    let scores = compute_score(&answers, &ArchetypeCatalog::standard());

    let percentages = scores.percentages();
    assert_eq!(percentages[&Architect], 40);
    assert_eq!(percentages[&Visionary], 30);
    assert_eq!(percentages[&Accelerator], 20);
    assert_eq!(percentages[&Entrepreneur], 10);
    assert!((scores.total() - 1.0).abs() < 1e-9);
}

#[test]
fn score_total_tracks_answered_questions() {
    let catalog = ArchetypeCatalog::standard();
    for answered in 0..=catalog.len() {
        let answers = answers_for(&[(Entrepreneur, answered)]);
        let total = compute_score(&answers, &catalog).total();
        assert!((total - answered as f64 * 0.1).abs() < 1e-9, "answered {answered}");
    }
}

#[test]
fn unknown_values_and_questions_are_ignored() {
    let mut answers = AnswerSet::new();
    answers.record("timeline", "someday");
    answers.record("favouriteColour", "blue");
    answers.record("budget", "planned");

    let scores = compute_score(&answers, &ArchetypeCatalog::standard());

    assert_eq!(scores.percentages()[&Architect], 10);
    assert!((scores.total() - 0.1).abs() < 1e-9);
}

#[test]
fn scoring_is_idempotent() {
    let answers = answers_for(&[(Visionary, 5), (Accelerator, 5)]);
    let catalog = ArchetypeCatalog::standard();

    assert_eq!(
        compute_score(&answers, &catalog),
        compute_score(&answers, &catalog)
    );
}

#[test]
fn flat_distribution_returns_all_four() {
    assert_eq!(
        classify(&scores(0.3, 0.3, 0.2, 0.2)),
        vec![Architect, Visionary, Accelerator, Entrepreneur]
    );
}

#[test]
fn flat_rule_wins_at_even_quarter_scores() {
    let dominants = classify(&scores(0.25, 0.25, 0.25, 0.25));
    assert_eq!(dominants.len(), 4);
    assert_eq!(resolve_description_key(&dominants), DescriptionKey::Multiple);
}

#[test]
fn sole_leader_without_strong_runner_up() {
    let result = ArchetypeResult::from_scores(scores(0.4, 0.1, 0.1, 0.1));

    assert_eq!(result.dominant_archetypes, vec![Architect]);
    assert_eq!(result.archetype_key.to_string(), "architect");
    assert_eq!(result.title, "ARCHITECT");
}

#[test]
fn tied_leaders_form_a_blend() {
    let result = ArchetypeResult::from_scores(scores(0.4, 0.4, 0.1, 0.1));

    assert_eq!(result.dominant_archetypes, vec![Architect, Visionary]);
    assert_eq!(result.archetype_key.to_string(), "architect-visionary");
}

#[test]
fn three_way_cluster_is_multiple() {
    let result = ArchetypeResult::from_scores(scores(0.3, 0.3, 0.3, 0.1));

    assert_eq!(
        result.dominant_archetypes,
        vec![Architect, Visionary, Accelerator]
    );
    assert_eq!(result.archetype_key, DescriptionKey::Multiple);
    assert_eq!(result.archetype_key.to_string(), MULTIPLE_KEY);
}

#[test]
fn strong_runner_up_joins_sole_leader() {
    assert_eq!(
        classify(&scores(0.1, 0.5, 0.0, 0.4)),
        vec![Visionary, Entrepreneur]
    );
    assert_eq!(classify(&scores(0.5, 0.3, 0.2, 0.0)), vec![Architect]);
}

#[test]
fn unanswered_assessment_ties_every_archetype() {
    let dominants = classify(&scores(0.0, 0.0, 0.0, 0.0));
    assert_eq!(dominants.len(), 4);
}

#[test]
fn accumulated_tenths_compare_exactly_at_thresholds() {
    // 0.1 + 0.1 + 0.1 is not exactly 0.3 in binary floating point.
    let answers = answers_for(&[
        (Architect, 3),
        (Visionary, 3),
        (Accelerator, 3),
        (Entrepreneur, 1),
    ]);
    let result = engine().evaluate(&answers);

    assert_eq!(
        result.dominant_archetypes,
        vec![Architect, Visionary, Accelerator]
    );
}

#[test]
fn blend_keys_sort_tags_lexicographically() {
    assert_eq!(
        resolve_description_key(&[Visionary, Accelerator]).to_string(),
        "accelerator-visionary"
    );
    assert_eq!(
        resolve_description_key(&[Entrepreneur, Architect]).to_string(),
        "architect-entrepreneur"
    );
}

#[test]
fn every_single_and_pair_has_copy() {
    let keys: Vec<&str> = description_keys().collect();

    for tag in Archetype::ALL {
        assert!(keys.contains(&tag.as_str()), "missing {tag}");
    }
    for (index, first) in Archetype::ALL.iter().enumerate() {
        for second in &Archetype::ALL[index + 1..] {
            let key = DescriptionKey::blend(*first, *second).to_string();
            assert!(lookup(&key).is_some(), "missing blend {key}");
        }
    }
    assert!(lookup(MULTIPLE_KEY).is_some());
}

#[test]
fn classification_is_never_empty() {
    let grid = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5];
    for a in grid {
        for v in grid {
            for c in grid {
                let dominants = classify(&scores(a, v, c, 0.1));
                assert!(!dominants.is_empty());
                assert!(dominants.len() <= 4);
            }
        }
    }
}

#[test]
fn scores_just_below_a_threshold_do_not_reach_it() {
    let near_strong = ScoreVector::from_scores([(Architect, 0.5), (Visionary, 0.3996)]);
    assert_eq!(classify(&near_strong), vec![Architect]);

    let near_flat_floor = scores(0.3, 0.3, 0.3, 0.1996);
    assert_eq!(classify(&near_flat_floor), vec![Architect, Visionary, Accelerator]);

    let near_cluster_floor = scores(0.3, 0.3, 0.2996, 0.1);
    assert_eq!(classify(&near_cluster_floor), vec![Architect, Visionary]);
}

#[test]
fn classify_is_idempotent_and_leaves_scores_untouched() {
    let grid = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5];
    for a in grid {
        for v in grid {
            for c in grid {
                for e in grid {
                    let vector = scores(a, v, c, e);
                    let before = vector.clone();

                    let first = classify(&vector);
                    let second = classify(&vector);

                    assert_eq!(first, second, "scores {a} {v} {c} {e}");
                    assert_eq!(vector, before);
                }
            }
        }
    }
}
