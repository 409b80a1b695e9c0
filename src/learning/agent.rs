use std::path::Path;

use log::info;

use crate::game::Game;
use crate::learning::action::ActionId;
use crate::learning::policy::{Choice, Policy};
use crate::learning::q_table::{QTable, QTableError};
use crate::learning::reward::true_reward;
use crate::learning::state::StateVec;
use crate::player::{Player, PlayerId};
use crate::UInt;

/// Tabular Q-learning player. Owns its value table and exploration state;
/// nothing here is shared between agents.
#[derive(Debug)]
pub struct QLearningAgent {
    id: PlayerId,
    name: String,
    /// Flat learning rate used by the Bellman update.
    pub alpha: f32,
    /// Discount factor on the bootstrapped next-state value.
    pub gamma: f32,
    factor: f32,
    verbose: bool,
    policy: Policy,
    q_table: QTable,
    /// Per-update Q deltas, appended in order. Kept only so convergence
    /// can be inspected after a run.
    pub delta_q: Vec<f32>,
}

impl QLearningAgent {
    pub fn new(id: PlayerId, name: &str) -> Self {
        QLearningAgent {
            id,
            name: name.to_owned(),
            alpha: 0.02,
            gamma: 0.9,
            factor: 0.0,
            verbose: false,
            policy: Policy::new(0.95, 0.01),
            q_table: QTable::new(),
            delta_q: vec![],
        }
    }

    /// Toggle per-turn narration of the chosen investment. Presentation
    /// only; decisions are unaffected.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.policy.reseed(seed);
    }

    /// Scale of the shaped-reward bias inside the maximizer. 0 (the
    /// default) selects on learned values alone.
    pub fn set_factor(&mut self, factor: f32) {
        self.factor = factor;
    }

    pub fn set_exploration(&mut self, epsilon: f32, eps_step: f32) {
        self.policy.epsilon = epsilon;
        self.policy.eps_step = eps_step;
    }

    pub fn epsilon(&self) -> f32 {
        self.policy.epsilon
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    pub fn save_qtable<P: AsRef<Path>>(&self, path: P) -> Result<(), QTableError> {
        self.q_table.save(path)
    }

    pub fn load_qtable<P: AsRef<Path>>(&mut self, path: P) -> Result<(), QTableError> {
        self.q_table.load(path)
    }

    fn update_q_table(&mut self, new_q: f32, state: StateVec, action: ActionId) {
        let key = state.key(action);
        let old_q = self.q_table.get(&key);
        self.q_table.set(key, new_q);
        self.delta_q.push(new_q - old_q);
    }
}

impl Player for QLearningAgent {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// One full decision-learn cycle: pick epsilon-greedily, pay and book
    /// the investment, bootstrap off the post-action state, then blend the
    /// observed reward into the table.
    fn take_turn(&mut self, game: &mut Game, epoch: UInt) {
        let Choice {
            action,
            value: current_q,
            state,
        } = self
            .policy
            .eps_greedy(game, self.id, &self.q_table, self.factor);

        let cost = game.cost(action);
        let reward = true_reward(cost);
        game.charge(self.id, cost);
        game.invest(action, self.id);
        if self.verbose {
            info!("{} invested in {:?}", self.name, action);
        }

        let next = self
            .policy
            .compute_max(game, self.id, &self.q_table, self.factor);

        // Decaying-alpha variant retained for experimentation; the update
        // below deliberately sticks to the flat rate.
        let _alpha_decayed = self.alpha * (1.0 - epoch as f32 / 30_000.0);
        let new_q = (1.0 - self.alpha) * current_q + self.alpha * (reward + self.gamma * next.value);
        self.update_q_table(new_q, state, action);
    }
}
