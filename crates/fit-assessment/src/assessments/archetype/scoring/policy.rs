use std::cmp::Reverse;

use super::super::domain::{Archetype, ScoreVector};

// Scores compare in billionths. That absorbs the drift of summed 0.1
// increments without lifting a genuinely lower score over a threshold.
const SCALE: f64 = 1_000_000_000.0;
const FLAT_FLOOR: i64 = 200_000_000;
const STRONG_SCORE: i64 = 400_000_000;
const CLUSTER_FLOOR: i64 = 300_000_000;
const CLUSTER_SIZE: usize = 3;

fn quantize(score: f64) -> i64 {
    (score * SCALE).round() as i64
}

/// Archetypes ranked by score, highest first, declaration order on ties.
pub fn rank(scores: &ScoreVector) -> Vec<(Archetype, i64)> {
    let mut ranked: Vec<(Archetype, i64)> = Archetype::ALL
        .iter()
        .map(|tag| (*tag, quantize(scores.get(*tag))))
        .collect();
    ranked.sort_by_key(|(tag, score)| (Reverse(*score), *tag));
    ranked
}

/// Pick the dominant archetypes for a score vector.
///
/// Rules are tried in order and the first match wins:
/// 1. every archetype in `[0.2, 0.4)` returns all four;
/// 2. three or more at `>= 0.3` returns exactly those;
/// 3. otherwise everything tied for the maximum, plus the runner-up when a
///    sole leader is followed by a score of at least `0.4`.
pub fn classify(scores: &ScoreVector) -> Vec<Archetype> {
    let ranked = rank(scores);

    let flat = ranked
        .iter()
        .all(|(_, score)| *score >= FLAT_FLOOR && *score < STRONG_SCORE);
    if flat {
        return ranked.into_iter().map(|(tag, _)| tag).collect();
    }

    let cluster: Vec<Archetype> = ranked
        .iter()
        .filter(|(_, score)| *score >= CLUSTER_FLOOR)
        .map(|(tag, _)| *tag)
        .collect();
    if cluster.len() >= CLUSTER_SIZE {
        return cluster;
    }

    let max_score = ranked[0].1;
    let mut dominants: Vec<Archetype> = ranked
        .iter()
        .filter(|(_, score)| *score == max_score)
        .map(|(tag, _)| *tag)
        .collect();

    if dominants.len() == 1 {
        if let Some((runner_up, score)) = ranked.get(1) {
            if *score >= STRONG_SCORE {
                dominants.push(*runner_up);
            }
        }
    }

    dominants
}
