use itertools::Itertools;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::game::Game;
use crate::player::{Player, PlayerId, PlayerType};
use crate::{TOTAL_ROUNDS, UInt};

/// Drives whole games: one shared board, players acting in roster order,
/// ships advancing between rounds, payouts settled at the end.
#[derive(Debug)]
pub struct Simulation {
    pub game: Game,
    pub players: Vec<PlayerType>,
    pub config: Config,
    pub wins: Vec<u32>,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: Config, players: Vec<PlayerType>) -> Self {
        let game = Game::new(players.len(), config.starting_money);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let wins = vec![0; players.len()];
        Simulation {
            game,
            players,
            config,
            wins,
            rng,
        }
    }

    /// Play one full game on a reset board and return the winner (the
    /// richest player after settlement; ties go to the later seat).
    pub fn run_epoch(&mut self, epoch: UInt) -> PlayerId {
        self.game.reset(self.config.starting_money);
        for round in 1..=TOTAL_ROUNDS {
            for player in self.players.iter_mut() {
                player.take_turn(&mut self.game, epoch);
            }
            // The final positions are judged right after the last round.
            if round < TOTAL_ROUNDS {
                self.game.advance_ships(&mut self.rng);
            }
            self.game.next_round();
        }
        self.game.settle();

        let winner = self
            .game
            .money
            .iter()
            .position_max()
            .expect("roster is never empty");
        self.wins[winner] += 1;
        winner
    }
}
