use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Type tag of an investment. `None` marks the Skip action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestmentKind {
    Port,
    Shipyard,
    Ship,
    None,
}

/// Closed catalog of the ten actions a player can take on their turn.
/// The discriminants are the action indices used in state-action keys and
/// must match the game's declared catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[repr(u8)]
pub enum ActionId {
    Port1 = 0,
    Port2 = 1,
    Port3 = 2,
    Shipyard1 = 3,
    Shipyard2 = 4,
    Shipyard3 = 5,
    Ship1 = 6,
    Ship2 = 7,
    Ship3 = 8,
    Skip = 9,
}

impl ActionId {
    /// Stable index 0-9, the trailing component of a state-action key.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn kind(self) -> InvestmentKind {
        match self {
            ActionId::Port1 | ActionId::Port2 | ActionId::Port3 => InvestmentKind::Port,
            ActionId::Shipyard1 | ActionId::Shipyard2 | ActionId::Shipyard3 => {
                InvestmentKind::Shipyard
            }
            ActionId::Ship1 | ActionId::Ship2 | ActionId::Ship3 => InvestmentKind::Ship,
            ActionId::Skip => InvestmentKind::None,
        }
    }

    /// Rank 0-2 within the action's own group (Port2 -> 1, Ship1 -> 0, ...).
    /// Meaningless for Skip.
    pub fn rank(self) -> usize {
        (self.index() % 3) as usize
    }

    pub fn is_skip(self) -> bool {
        self == ActionId::Skip
    }
}
