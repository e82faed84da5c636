#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a body. Collision responses branch on this instead of
/// comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BodyTag {
    Player,
    Platform,
    Wall,
    Lava,
    Gem,
    Door,
    Elevator,
    Button,
    Obstacle,
}

impl BodyTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyTag::Player => "player",
            BodyTag::Platform => "platform",
            BodyTag::Wall => "wall",
            BodyTag::Lava => "lava",
            BodyTag::Gem => "gem",
            BodyTag::Door => "door",
            BodyTag::Elevator => "elevator",
            BodyTag::Button => "button",
            BodyTag::Obstacle => "obstacle",
        }
    }

    /// Touching it sends the player back to spawn.
    pub fn is_hazard(&self) -> bool {
        matches!(self, BodyTag::Lava)
    }

    /// Removed from the scene when picked up.
    pub fn is_collectible(&self) -> bool {
        matches!(self, BodyTag::Gem)
    }

    /// Blocks movement of whatever runs into it.
    pub fn is_solid(&self) -> bool {
        matches!(
            self,
            BodyTag::Platform | BodyTag::Wall | BodyTag::Door | BodyTag::Elevator | BodyTag::Obstacle
        )
    }
}

impl std::fmt::Display for BodyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
