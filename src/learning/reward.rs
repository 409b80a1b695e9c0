//! Hand-shaped reward model. Approximates the end-of-game value of an
//! investment from the dice-sum odds of the relevant ship marker reaching
//! the goal position within the rolls that remain. Purely a selection-time
//! bias: the Bellman update always uses the true reward (minus the action's
//! cost), never this estimate.

use crate::game::Game;
use crate::learning::action::{ActionId, InvestmentKind};
use crate::learning::dice::tail_probability;
use crate::{GOAL_POSITION, Money};

/// Expected marginal value of taking `action` now, scaled by the agent's
/// `factor` (0 by default, which disables the bias entirely).
pub fn shaped_reward(game: &Game, action: ActionId, factor: f32) -> f32 {
    let rolls = game.rolls_remaining() as usize;
    let (min, mid, max) = game.ranked_positions();
    match action.kind() {
        InvestmentKind::Ship => {
            // A seat buys a share of the pot, diluted by joining.
            let investment = game.investment(action);
            let share =
                investment.payback as f32 / (investment.investors.len() as f32 + 1.0);
            let position = game.ships[action.rank()].position;
            factor * share * tail_probability(rolls, GOAL_POSITION - position, true)
        }
        InvestmentKind::Port => {
            // Port rank k pays on the k-th ranked marker from the top
            // making it home.
            let payback = game.investment(action).payback;
            let target = [max, mid, min][action.rank()];
            factor * payback as f32 * tail_probability(rolls, GOAL_POSITION - target, true)
        }
        InvestmentKind::Shipyard => {
            // Shipyards bet against arrival, ranked from the bottom.
            let payback = game.investment(action).payback;
            let target = [min, mid, max][action.rank()];
            factor * payback as f32 * tail_probability(rolls, GOAL_POSITION - target, false)
        }
        InvestmentKind::None => 0.0,
    }
}

/// The reward actually fed to the learning update: the cost paid, negated.
pub fn true_reward(cost: Money) -> f32 {
    (0 - cost) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_has_no_shaped_reward() {
        let game = Game::new(3, 30);
        assert_eq!(shaped_reward(&game, ActionId::Skip, 1.0), 0.0);
    }

    #[test]
    fn test_factor_zero_disables_the_bias() {
        let game = Game::new(3, 30);
        for action in game.legal_actions(100) {
            assert_eq!(shaped_reward(&game, action, 0.0), 0.0);
        }
    }

    #[test]
    fn test_ship_seat_share_and_tail() {
        let mut game = Game::new(3, 30);
        // One die left, ship at 7: P(die >= 11 - 7) = 0.5. One existing
        // investor dilutes the payback of 6 down to a share of 3.
        game.next_round();
        game.ships[0].position = 7;
        game.investments[ActionId::Ship1.index() as usize].payback = 6;
        game.invest(ActionId::Ship1, 1);
        assert_eq!(shaped_reward(&game, ActionId::Ship1, 1.0), 1.5);
    }

    #[test]
    fn test_port_ranks_match_markers_from_the_top() {
        let mut game = Game::new(3, 30);
        game.next_round();
        game.ships[0].position = 2;
        game.ships[1].position = 7;
        game.ships[2].position = 20;
        // Port1 keys on the leading marker, already past the goal.
        let payback = game.investment(ActionId::Port1).payback as f32;
        assert_eq!(shaped_reward(&game, ActionId::Port1, 1.0), payback);
        // Port2 keys on the median marker at 7: tail of one die >= 4.
        let payback = game.investment(ActionId::Port2).payback as f32;
        assert_eq!(shaped_reward(&game, ActionId::Port2, 1.0), payback * 0.5);
        // Port3 keys on the trailing marker, out of reach with one die.
        assert_eq!(shaped_reward(&game, ActionId::Port3, 1.0), 0.0);
    }

    #[test]
    fn test_shipyard_ranks_use_the_complementary_tail() {
        let mut game = Game::new(3, 30);
        game.next_round();
        game.ships[0].position = 2;
        game.ships[1].position = 7;
        game.ships[2].position = 20;
        // Shipyard2 keys on the median marker: P(die < 4) = 0.5.
        let payback = game.investment(ActionId::Shipyard2).payback as f32;
        assert_eq!(shaped_reward(&game, ActionId::Shipyard2, 1.0), payback * 0.5);
        // Shipyard3 keys on the leading marker, which has already arrived;
        // the guard clamps its negative target to certainty either way.
        let payback = game.investment(ActionId::Shipyard3).payback as f32;
        assert_eq!(shaped_reward(&game, ActionId::Shipyard3, 1.0), payback);
    }

    #[test]
    fn test_true_reward_is_negative_cost() {
        assert_eq!(true_reward(5), -5.0);
        assert_eq!(true_reward(0), 0.0);
    }
}
