use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::learning::action::{ActionId, InvestmentKind};
use crate::player::PlayerId;
use crate::{GOAL_POSITION, Int, Money, TOTAL_ROUNDS, UInt};

/// Where the three ship markers start the game.
const SHIP_START_POSITIONS: [Int; 3] = [3, 5, 7];

/// One bookable investment: a port, a shipyard or a seat pool on a ship.
/// Skip is not an `Investment`; it exists only as [`ActionId::Skip`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investment {
    pub id: ActionId,
    pub cost: Money,
    pub payback: Money,
    pub capacity: UInt,
    pub investors: Vec<PlayerId>,
}

impl Investment {
    fn new(id: ActionId, cost: Money, payback: Money, capacity: UInt) -> Self {
        Investment {
            id,
            cost,
            payback,
            capacity,
            investors: vec![],
        }
    }

    pub fn slots_left(&self) -> UInt {
        self.capacity - self.investors.len() as UInt
    }

    pub fn available(&self) -> bool {
        self.slots_left() > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub position: Int,
}

/// The board and the bank. Owns the investment catalog, the three ship
/// markers, the round counter and every player's money; players act on it
/// one at a time through [`charge`](Game::charge) and
/// [`invest`](Game::invest).
///
/// Catalog-order contract: `investments` always holds the nine investments
/// in [`ActionId`] index order (Port1..Ship3). The state encoder's feature
/// layout depends on this order, so it must never be re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub investments: Vec<Investment>,
    pub ships: [Ship; 3],
    pub money: Vec<Money>,
    /// Current bidding round, 1-based.
    pub round_num: UInt,
}

impl Game {
    pub fn new(num_players: usize, starting_money: Money) -> Self {
        Game {
            investments: Self::catalog(),
            ships: SHIP_START_POSITIONS.map(|position| Ship { position }),
            money: vec![starting_money; num_players],
            round_num: 1,
        }
    }

    fn catalog() -> Vec<Investment> {
        vec![
            Investment::new(ActionId::Port1, 5, 12, 2),
            Investment::new(ActionId::Port2, 4, 9, 2),
            Investment::new(ActionId::Port3, 3, 6, 2),
            Investment::new(ActionId::Shipyard1, 4, 10, 2),
            Investment::new(ActionId::Shipyard2, 3, 8, 2),
            Investment::new(ActionId::Shipyard3, 2, 6, 2),
            Investment::new(ActionId::Ship1, 5, 24, 3),
            Investment::new(ActionId::Ship2, 5, 24, 3),
            Investment::new(ActionId::Ship3, 5, 24, 3),
        ]
    }

    /// Wipe the board for a fresh game, keeping the player roster.
    pub fn reset(&mut self, starting_money: Money) {
        self.investments = Self::catalog();
        self.ships = SHIP_START_POSITIONS.map(|position| Ship { position });
        for money in &mut self.money {
            *money = starting_money;
        }
        self.round_num = 1;
    }

    /// The investment behind a non-Skip action.
    pub fn investment(&self, action: ActionId) -> &Investment {
        assert!(!action.is_skip(), "Skip has no investment behind it");
        &self.investments[action.index() as usize]
    }

    pub fn cost(&self, action: ActionId) -> Money {
        if action.is_skip() {
            0
        } else {
            self.investment(action).cost
        }
    }

    pub fn money_of(&self, player: PlayerId) -> Money {
        self.money[player]
    }

    /// Dice rolls still to come before ship positions are final.
    pub fn rolls_remaining(&self) -> UInt {
        TOTAL_ROUNDS - self.round_num
    }

    /// The ordered sublist of the catalog that `money` can buy right now.
    /// Skip is free and always offered, so the result is never empty.
    pub fn legal_actions(&self, money: Money) -> Vec<ActionId> {
        ActionId::iter()
            .filter(|&action| {
                action.is_skip()
                    || (self.investment(action).available() && self.cost(action) <= money)
            })
            .collect()
    }

    pub fn charge(&mut self, player: PlayerId, amount: Money) {
        self.money[player] -= amount;
    }

    /// Book one slot of `action` for `player`. Skip is a no-op.
    pub fn invest(&mut self, action: ActionId, player: PlayerId) {
        if action.is_skip() {
            return;
        }
        debug_assert!(self.investment(action).available(), "investment is full");
        self.investments[action.index() as usize].investors.push(player);
    }

    /// Advance every ship marker by one die.
    pub fn advance_ships<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for ship in &mut self.ships {
            ship.position += rng.random_range(1..=6);
        }
    }

    pub fn next_round(&mut self) {
        self.round_num += 1;
    }

    /// Ship marker positions sorted ascending: (min, mid, max).
    pub fn ranked_positions(&self) -> (Int, Int, Int) {
        let mut positions: Vec<Int> = self.ships.iter().map(|ship| ship.position).collect();
        positions.sort_unstable();
        (positions[0], positions[1], positions[2])
    }

    /// End-of-game payouts, credited straight to the money ledger:
    ///   - an arrived ship (position >= goal) splits its payback pot evenly
    ///     among its seat holders;
    ///   - Port rank k pays each investor its payback when the k-th ranked
    ///     marker from the top arrived;
    ///   - Shipyard rank k pays when the k-th ranked marker from the bottom
    ///     did not arrive.
    pub fn settle(&mut self) {
        let (min, mid, max) = self.ranked_positions();
        let mut payouts: Vec<(PlayerId, Money)> = vec![];
        for investment in &self.investments {
            if investment.investors.is_empty() {
                continue;
            }
            match investment.id.kind() {
                InvestmentKind::Ship => {
                    let position = self.ships[investment.id.rank()].position;
                    if position >= GOAL_POSITION {
                        let share = investment.payback / investment.investors.len() as Money;
                        for &player in &investment.investors {
                            payouts.push((player, share));
                        }
                    }
                }
                InvestmentKind::Port => {
                    let target = [max, mid, min][investment.id.rank()];
                    if target >= GOAL_POSITION {
                        for &player in &investment.investors {
                            payouts.push((player, investment.payback));
                        }
                    }
                }
                InvestmentKind::Shipyard => {
                    let target = [min, mid, max][investment.id.rank()];
                    if target < GOAL_POSITION {
                        for &player in &investment.investors {
                            payouts.push((player, investment.payback));
                        }
                    }
                }
                InvestmentKind::None => unreachable!("Skip is not in the catalog"),
            }
        }
        for (player, amount) in payouts {
            self.money[player] += amount;
        }
    }
}
