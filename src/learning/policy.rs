use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::game::Game;
use crate::learning::action::ActionId;
use crate::learning::q_table::QTable;
use crate::learning::reward::shaped_reward;
use crate::learning::state::StateVec;
use crate::player::PlayerId;

/// What the policy settled on: the action, the value it was credited with,
/// and the state the decision was made in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    pub action: ActionId,
    pub value: f32,
    pub state: StateVec,
}

/// Per-agent exploration state. Deliberately instance-local: no epsilon or
/// RNG is ever shared between agents, and reproducing a run only takes
/// reseeding each agent.
#[derive(Debug)]
pub struct Policy {
    pub epsilon: f32,
    pub eps_step: f32,
    rng: StdRng,
}

impl Policy {
    pub fn new(epsilon: f32, eps_step: f32) -> Self {
        Policy {
            epsilon,
            eps_step,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Greedy maximizer: score every legal action as stored value plus
    /// shaped reward and take the best. Exact-score ties are broken
    /// uniformly at random so the first catalog entry gains no edge when
    /// values coincide, as they all do at the start of training.
    pub fn compute_max(
        &mut self,
        game: &Game,
        me: PlayerId,
        q_table: &QTable,
        factor: f32,
    ) -> Choice {
        let state = StateVec::encode(game, me);
        let legal = game.legal_actions(game.money_of(me));
        assert!(!legal.is_empty(), "legal-action set is empty: Skip must always be offered");

        let mut best = f32::NEG_INFINITY;
        let mut candidates: Vec<ActionId> = vec![];
        for &action in &legal {
            let score = q_table.get(&state.key(action)) + shaped_reward(game, action, factor);
            if score == best {
                candidates.push(action);
            }
            if score > best {
                best = score;
                candidates = vec![action];
            }
        }
        let action = *candidates
            .choose(&mut self.rng)
            .expect("maximizer saw at least one legal action");
        Choice {
            action,
            value: best,
            state,
        }
    }

    /// Epsilon-greedy selector. With probability `epsilon` picks a uniform
    /// random legal action and reports its raw stored value (the shaped
    /// term only ever biases the maximizer); otherwise defers to
    /// [`compute_max`](Policy::compute_max). Decays `epsilon` by `eps_step`
    /// either way; there is no floor, a rate at or below 0 just never
    /// triggers exploration again.
    pub fn eps_greedy(
        &mut self,
        game: &Game,
        me: PlayerId,
        q_table: &QTable,
        factor: f32,
    ) -> Choice {
        let draw: f32 = self.rng.random();
        let choice = if draw < self.epsilon {
            let state = StateVec::encode(game, me);
            let legal = game.legal_actions(game.money_of(me));
            assert!(!legal.is_empty(), "legal-action set is empty: Skip must always be offered");
            let action = *legal
                .choose(&mut self.rng)
                .expect("explorer saw at least one legal action");
            Choice {
                action,
                value: q_table.get(&state.key(action)),
                state,
            }
        } else {
            self.compute_max(game, me, q_table, factor)
        };
        self.epsilon -= self.eps_step;
        choice
    }
}
