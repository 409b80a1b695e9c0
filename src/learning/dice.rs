//! Closed-form dice-sum distribution used by the reward model.

use crate::Int;

/// Outcome counts for the sum of N fair dice, indexed by sum. Row 0 is the
/// degenerate zero-dice distribution (sum 0 with certainty).
const SUM_COUNTS: [&[u32]; 3] = [
    &[1],
    &[0, 1, 1, 1, 1, 1, 1],
    &[0, 0, 1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1],
];

/// Probability that the sum of `num_dice` fair dice is `>= target` (when
/// `larger`) or `< target` (otherwise).
///
/// A target beyond the table's domain yields 0, a negative target yields 1;
/// both boundary values are returned before the direction branch.
pub fn tail_probability(num_dice: usize, target: Int, larger: bool) -> f32 {
    let counts = SUM_COUNTS[num_dice];
    if target > counts.len() as Int {
        return 0.0;
    }
    if target < 0 {
        return 1.0;
    }
    let total: u32 = counts.iter().sum();
    let target = target as usize;
    let mass: u32 = if larger {
        counts[target..].iter().sum()
    } else {
        counts[..target].iter().sum()
    };
    mass as f32 / total as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_die_upper_tail() {
        // P(roll >= 4) with a single die.
        assert_eq!(tail_probability(1, 4, true), 0.5);
    }

    #[test]
    fn test_one_die_lower_tail() {
        // P(roll < 4) with a single die.
        assert_eq!(tail_probability(1, 4, false), 0.5);
    }

    #[test]
    fn test_two_dice_mass() {
        // P(sum >= 2) covers every outcome of two dice.
        assert_eq!(tail_probability(2, 2, true), 1.0);
        // P(sum >= 12) is the single double-six outcome.
        assert_eq!(tail_probability(2, 12, true), 1.0 / 36.0);
    }

    #[test]
    fn test_zero_dice_is_degenerate() {
        assert_eq!(tail_probability(0, 0, true), 1.0);
        assert_eq!(tail_probability(0, 1, true), 0.0);
    }

    #[test]
    fn test_domain_boundaries() {
        // Beyond the domain the tail condition is unsatisfiable.
        assert_eq!(tail_probability(1, 40, true), 0.0);
        // Below the domain it holds trivially, whatever the direction.
        assert_eq!(tail_probability(1, -2, true), 1.0);
        assert_eq!(tail_probability(1, -2, false), 1.0);
    }

    #[test]
    fn test_complementary_tails() {
        for target in 0..=7 {
            let up = tail_probability(1, target, true);
            let down = tail_probability(1, target, false);
            assert!((up + down - 1.0).abs() < 1e-6);
        }
    }
}
