use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::Game;
use crate::learning::action::ActionId;
use crate::player::PlayerId;
use crate::{Int, Money};

pub const STATE_LEN: usize = 16;
pub const KEY_LEN: usize = STATE_LEN + 1;

/// Fixed-length feature vector describing the board from one player's
/// perspective. Position-significant:
///   0-2   port slots left, 3-5 shipyard slots left, 6-8 ship seats left
///         (catalog order, a documented contract of [`Game`]),
///   9-11  ship marker positions (declared ship order),
///   12-14 own money minus each player's money, over the ascending-sorted
///         money list (one entry is always 0),
///   15    round number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateVec(pub [Int; STATE_LEN]);

impl StateVec {
    /// Project the current game onto the 16 features above. Pure: reads the
    /// game, caches nothing.
    pub fn encode(game: &Game, me: PlayerId) -> StateVec {
        let mut feat = [0; STATE_LEN];
        for (i, investment) in game.investments.iter().enumerate() {
            feat[i] = investment.slots_left() as Int;
        }
        for (i, ship) in game.ships.iter().enumerate() {
            feat[9 + i] = ship.position;
        }
        let mine = game.money_of(me);
        let mut money_ls: Vec<Money> = game.money.clone();
        money_ls.sort_unstable();
        // Known limitation: the sort is by absolute money, not player
        // identity, so tied balances make the feature order ambiguous.
        for (i, money) in money_ls.iter().enumerate() {
            feat[12 + i] = mine - money;
        }
        feat[15] = game.round_num as Int;
        StateVec(feat)
    }

    /// Append an action index to form the 17-component lookup key.
    pub fn key(self, action: ActionId) -> StateActionKey {
        let mut components = [0; KEY_LEN];
        components[..STATE_LEN].copy_from_slice(&self.0);
        components[STATE_LEN] = action.index() as Int;
        StateActionKey(components)
    }
}

/// The sole key type into the Q-table: a state vector plus one trailing
/// action index. The arity is fixed by construction; only deserialization
/// from a raw integer list can get it wrong, and that fails fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateActionKey([Int; KEY_LEN]);

impl StateActionKey {
    pub fn components(&self) -> &[Int; KEY_LEN] {
        &self.0
    }

    pub fn to_vec(self) -> Vec<Int> {
        self.0.to_vec()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("state-action key has {found} components, expected {KEY_LEN}")]
pub struct KeyShapeError {
    pub found: usize,
}

impl TryFrom<Vec<Int>> for StateActionKey {
    type Error = KeyShapeError;

    fn try_from(components: Vec<Int>) -> Result<Self, Self::Error> {
        let components: [Int; KEY_LEN] = components
            .try_into()
            .map_err(|v: Vec<Int>| KeyShapeError { found: v.len() })?;
        Ok(StateActionKey(components))
    }
}
