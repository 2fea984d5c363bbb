//! The three lifeline algorithms.
//!
//! None of these touch `LifelineState`; the round consumes the lifeline
//! before calling in here.

use crate::models::{NUM_OPTIONS, Question};

use super::random::RandomSource;

const CORRECT_SHARE_MIN: usize = 50;
const CORRECT_SHARE_MAX: usize = 80;
const FRIEND_KNOWS_PROBABILITY: f64 = 0.7;

/// Option indices hidden for the rest of the current question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovedOptions {
    hidden: [bool; NUM_OPTIONS],
}

impl RemovedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.hidden.get(index).copied().unwrap_or(false)
    }

    pub(crate) fn insert(&mut self, index: usize) {
        if let Some(slot) = self.hidden.get_mut(index) {
            *slot = true;
        }
    }

    pub fn len(&self) -> usize {
        self.hidden.iter().filter(|hidden| **hidden).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..NUM_OPTIONS).filter(move |&i| self.hidden[i])
    }
}

/// Removes two of the three incorrect options, chosen uniformly.
pub fn fifty_fifty<R: RandomSource>(question: &Question, rng: &mut R) -> RemovedOptions {
    let wrong: Vec<usize> = question.incorrect_indices().collect();
    // Picking the one wrong option that survives is the same as sampling
    // two of three without replacement.
    let survivor = rng.range(0, wrong.len() - 1);

    let mut removed = RemovedOptions::new();
    for (slot, index) in wrong.into_iter().enumerate() {
        if slot != survivor {
            removed.insert(index);
        }
    }
    removed
}

/// Audience vote per option; `None` for options that are currently removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poll {
    shares: [Option<usize>; NUM_OPTIONS],
}

impl Poll {
    pub fn share(&self, index: usize) -> Option<usize> {
        self.shares.get(index).copied().flatten()
    }

    pub fn shares(&self) -> &[Option<usize>; NUM_OPTIONS] {
        &self.shares
    }

    pub fn total(&self) -> usize {
        self.shares.iter().flatten().sum()
    }
}

/// Builds a poll leaning towards the correct answer.
///
/// The correct option gets 50–80%. The rest is split over the incorrect
/// options that are still visible using random weights, then nudged one
/// point at a time until everything adds up to exactly 100.
pub fn audience_poll<R: RandomSource>(
    question: &Question,
    removed: &RemovedOptions,
    rng: &mut R,
) -> Poll {
    let correct_share = rng.range(CORRECT_SHARE_MIN, CORRECT_SHARE_MAX);
    let remaining = 100 - correct_share;

    let mut others: Vec<usize> = question
        .incorrect_indices()
        .filter(|&i| !removed.contains(i))
        .collect();
    if others.is_empty() {
        others = question.incorrect_indices().collect();
    }

    let weights: Vec<usize> = others.iter().map(|_| rng.range(0, remaining)).collect();
    let weight_total: usize = weights.iter().sum();
    let mut parts: Vec<usize> = if weight_total == 0 {
        vec![0; others.len()]
    } else {
        weights
            .iter()
            .map(|w| (w * remaining + weight_total / 2) / weight_total)
            .collect()
    };

    let mut sum: usize = parts.iter().sum();
    while sum < remaining {
        let slot = rng.range(0, parts.len() - 1);
        parts[slot] += 1;
        sum += 1;
    }
    while sum > remaining {
        let nonzero: Vec<usize> = (0..parts.len()).filter(|&slot| parts[slot] > 0).collect();
        let Some(slot) = rng.choose(&nonzero) else {
            break;
        };
        parts[slot] -= 1;
        sum -= 1;
    }

    let mut shares = [Some(0); NUM_OPTIONS];
    for (index, part) in others.into_iter().zip(parts) {
        shares[index] = Some(part);
    }
    shares[question.correct_index] = Some(correct_share);
    for index in removed.iter() {
        shares[index] = None;
    }

    Poll { shares }
}

/// The friend's suggestion: usually right, otherwise a visible wrong option.
pub fn phone_a_friend<R: RandomSource>(
    question: &Question,
    removed: &RemovedOptions,
    rng: &mut R,
) -> usize {
    if rng.chance(FRIEND_KNOWS_PROBABILITY) {
        return question.correct_index;
    }

    let candidates: Vec<usize> = question
        .incorrect_indices()
        .filter(|&i| !removed.contains(i))
        .collect();
    rng.choose(&candidates).unwrap_or(question.correct_index)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::game::random::{ScriptedRandom, StdRandom};

    fn question(correct: usize) -> Question {
        Question::new("?", ["a", "b", "c", "d"], correct)
    }

    #[test]
    fn test_fifty_fifty_keeps_scripted_survivor() {
        let q = question(1);
        let mut rng = ScriptedRandom::new(&[2], &[]);
        let removed = fifty_fifty(&q, &mut rng);
        // wrong options are [0, 2, 3]; slot 2 (index 3) survives
        assert_eq!(removed.iter().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_fifty_fifty_reaches_every_pair() {
        let q = question(0);
        let mut rng = StdRandom::seeded(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(fifty_fifty(&q, &mut rng).iter().collect::<Vec<_>>());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_poll_scripted_values() {
        let q = question(0);
        // correct 60, weights 10/10/20 of the remaining 40 -> 10/10/20
        let mut rng = ScriptedRandom::new(&[60, 10, 10, 20], &[]);
        let poll = audience_poll(&q, &RemovedOptions::new(), &mut rng);
        assert_eq!(poll.shares(), &[Some(60), Some(10), Some(10), Some(20)]);
    }

    #[test]
    fn test_poll_with_zero_weights_still_sums_to_100() {
        let q = question(3);
        let mut rng = ScriptedRandom::new(&[70, 0, 0, 0], &[]);
        let poll = audience_poll(&q, &RemovedOptions::new(), &mut rng);
        assert_eq!(poll.share(3), Some(70));
        assert_eq!(poll.total(), 100);
    }

    #[test]
    fn test_poll_hides_removed_options() {
        let q = question(2);
        let mut removed = RemovedOptions::new();
        removed.insert(0);
        removed.insert(3);
        let mut rng = StdRandom::seeded(5);
        let poll = audience_poll(&q, &removed, &mut rng);
        assert_eq!(poll.share(0), None);
        assert_eq!(poll.share(3), None);
        assert_eq!(poll.share(1).unwrap() + poll.share(2).unwrap(), 100);
    }

    #[test]
    fn test_phone_falls_back_to_correct_when_all_wrong_removed() {
        let q = question(1);
        let mut removed = RemovedOptions::new();
        for i in [0, 2, 3] {
            removed.insert(i);
        }
        let mut rng = ScriptedRandom::new(&[], &[false]);
        assert_eq!(phone_a_friend(&q, &removed, &mut rng), 1);
    }

    #[test]
    fn test_phone_is_right_about_seventy_percent() {
        let q = question(2);
        let mut rng = StdRandom::seeded(2024);
        let trials = 10_000;
        let hits = (0..trials)
            .filter(|_| phone_a_friend(&q, &RemovedOptions::new(), &mut rng) == 2)
            .count();
        let rate = hits as f64 / trials as f64;
        assert!((0.67..=0.73).contains(&rate), "rate was {rate}");
    }

    #[test]
    fn test_removed_options_ignore_out_of_range() {
        let mut removed = RemovedOptions::new();
        removed.insert(9);
        assert!(removed.is_empty());
        assert!(!removed.contains(9));
    }

    proptest! {
        #[test]
        fn fifty_fifty_removes_two_distinct_wrong_options(seed in any::<u64>(), correct in 0usize..4) {
            let q = question(correct);
            let removed = fifty_fifty(&q, &mut StdRandom::seeded(seed));
            prop_assert_eq!(removed.len(), 2);
            prop_assert!(!removed.contains(correct));
        }

        #[test]
        fn poll_sums_to_100_and_favours_correct(seed in any::<u64>(), correct in 0usize..4) {
            let q = question(correct);
            let poll = audience_poll(&q, &RemovedOptions::new(), &mut StdRandom::seeded(seed));
            prop_assert_eq!(poll.total(), 100);
            prop_assert!(poll.shares().iter().all(Option::is_some));
            let share = poll.share(correct).unwrap();
            prop_assert!((CORRECT_SHARE_MIN..=CORRECT_SHARE_MAX).contains(&share));
        }

        #[test]
        fn phone_never_suggests_removed_option(seed in any::<u64>(), correct in 0usize..4) {
            let q = question(correct);
            let mut rng = StdRandom::seeded(seed);
            let removed = fifty_fifty(&q, &mut rng);
            for _ in 0..20 {
                let suggestion = phone_a_friend(&q, &removed, &mut rng);
                prop_assert!(!removed.contains(suggestion));
            }
        }
    }
}
