use enum_dispatch::enum_dispatch;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::UInt;
use crate::game::Game;
use crate::learning::agent::QLearningAgent;

/// Index into the game's money ledger. Assigned by the driver, stable for
/// the whole run.
pub type PlayerId = usize;

#[enum_dispatch]
pub trait Player {
    fn id(&self) -> PlayerId;
    fn name(&self) -> &str;
    /// One bidding decision against the current board, including any side
    /// effects (paying, booking a slot, learning).
    fn take_turn(&mut self, game: &mut Game, epoch: UInt);
}

/// Benchmark opponent: invests uniformly at random among whatever it can
/// currently afford.
#[derive(Debug)]
pub struct RandomAgent {
    id: PlayerId,
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(id: PlayerId, name: &str) -> Self {
        RandomAgent {
            id,
            name: name.to_owned(),
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(id: PlayerId, name: &str, seed: u64) -> Self {
        RandomAgent {
            id,
            name: name.to_owned(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomAgent {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn take_turn(&mut self, game: &mut Game, _epoch: UInt) {
        let legal = game.legal_actions(game.money_of(self.id));
        let action = *legal
            .choose(&mut self.rng)
            .expect("Skip is always legal");
        game.charge(self.id, game.cost(action));
        game.invest(action, self.id);
    }
}

#[enum_dispatch(Player)]
#[derive(Debug)]
pub enum PlayerType {
    Learning(QLearningAgent),
    Random(RandomAgent),
}
