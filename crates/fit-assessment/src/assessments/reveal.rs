//! Stepwise count-up of result percentages.
//!
//! A [`ScoreReveal`] is a lazy sequence of frames the host pulls on a fixed
//! cadence. Each frame is computed from the progress fraction alone, so the
//! last frame always lands exactly on the targets.

use std::time::Duration;

pub const DEFAULT_STEPS: u32 = 60;

/// One frame of displayed values, in target order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealFrame<K> {
    pub step: u32,
    pub values: Vec<(K, u32)>,
}

impl<K: PartialEq> RevealFrame<K> {
    pub fn value(&self, key: &K) -> Option<u32> {
        self.values
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| *value)
    }
}

#[derive(Debug, Clone)]
pub struct ScoreReveal<K> {
    targets: Vec<(K, u32)>,
    steps: u32,
    duration: Duration,
    current: u32,
    cancelled: bool,
}

impl<K: Clone> ScoreReveal<K> {
    pub fn new(targets: Vec<(K, u32)>, steps: u32, duration: Duration) -> Self {
        Self {
            targets,
            steps: steps.max(1),
            duration,
            current: 0,
            cancelled: false,
        }
    }

    pub fn with_default_steps(targets: Vec<(K, u32)>, duration: Duration) -> Self {
        Self::new(targets, DEFAULT_STEPS, duration)
    }

    /// Interval between frames.
    pub fn cadence(&self) -> Duration {
        self.duration / self.steps
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn is_finished(&self) -> bool {
        self.cancelled || self.current >= self.steps
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Values at an arbitrary step, clamped to the final frame.
    pub fn frame_at(&self, step: u32) -> RevealFrame<K> {
        let step = step.min(self.steps);
        RevealFrame {
            step,
            values: self
                .targets
                .iter()
                .map(|(key, target)| (key.clone(), scaled(*target, step, self.steps)))
                .collect(),
        }
    }

    pub fn final_frame(&self) -> RevealFrame<K> {
        self.frame_at(self.steps)
    }
}

impl<K: Clone> Iterator for ScoreReveal<K> {
    type Item = RevealFrame<K>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }
        self.current += 1;
        Some(self.frame_at(self.current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.cancelled {
            0
        } else {
            (self.steps - self.current.min(self.steps)) as usize
        };
        (remaining, Some(remaining))
    }
}

/// `round(target * step / steps)` with halves rounded up, in integer math.
fn scaled(target: u32, step: u32, steps: u32) -> u32 {
    let numerator = u64::from(target) * u64::from(step) * 2 + u64::from(steps);
    (numerator / (u64::from(steps) * 2)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_frame_matches_targets_exactly() {
        let reveal = ScoreReveal::new(
            vec![("a", 30), ("b", 70), ("c", 0)],
            60,
            Duration::from_millis(1500),
        );

        let frames: Vec<_> = reveal.collect();

        assert_eq!(frames.len(), 60);
        let last = frames.last().expect("frames emitted");
        assert_eq!(last.values, vec![("a", 30), ("b", 70), ("c", 0)]);
    }

    #[test]
    fn frames_never_decrease() {
        let reveal = ScoreReveal::with_default_steps(vec![("score", 63)], Duration::from_secs(2));
        let values: Vec<u32> = reveal.map(|frame| frame.values[0].1).collect();

        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(values.first(), Some(&1));
        assert_eq!(values.last(), Some(&63));
    }

    #[test]
    fn cadence_divides_duration_by_steps() {
        let reveal = ScoreReveal::new(vec![("x", 10)], 60, Duration::from_millis(1500));
        assert_eq!(reveal.cadence(), Duration::from_millis(25));
    }

    #[test]
    fn cancelled_reveal_stops_emitting() {
        let mut reveal = ScoreReveal::new(vec![("x", 10)], 4, Duration::from_millis(400));
        assert!(reveal.next().is_some());
        reveal.cancel();
        assert!(reveal.next().is_none());
        assert_eq!(reveal.size_hint(), (0, Some(0)));
    }

    #[test]
    fn halfway_rounds_half_up() {
        let reveal = ScoreReveal::new(vec![("x", 5)], 2, Duration::from_millis(10));
        assert_eq!(reveal.frame_at(1).value(&"x"), Some(3));
    }
}
