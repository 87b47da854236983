use std::fmt;

use serde::{Deserialize, Serialize};

use crate::code_block::CodeBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Game {
    MarioParty6,
    MarioParty9,
}

impl Game {
    pub const ALL: [Game; 2] = [Game::MarioParty6, Game::MarioParty9];

    /// Accepts `6`, `mp6`, `marioparty6`, `mario-party-6` and the like.
    pub fn parse_label(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "6" | "mp6" | "marioparty6" => Some(Self::MarioParty6),
            "9" | "mp9" | "marioparty9" => Some(Self::MarioParty9),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::MarioParty6 => "Mario Party 6",
            Self::MarioParty9 => "Mario Party 9",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Coins,
    MinigameReplacement,
    OrbMods,
    SpaceReplacement,
    InitialOrbs,
    BattleBounties,
    StarHandicap,
    BonusStarReplacement,
    FaireFlowerWager,
}

impl Feature {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Coins => "coins",
            Self::MinigameReplacement => "minigame_replacement",
            Self::OrbMods => "orb_mods",
            Self::SpaceReplacement => "space_replacement",
            Self::InitialOrbs => "initial_orbs",
            Self::BattleBounties => "battle_bounties",
            Self::StarHandicap => "star_handicap",
            Self::BonusStarReplacement => "bonus_star_replacement",
            Self::FaireFlowerWager => "faire_flower_wager",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Request {
    Coins(CoinsParams),
    MinigameReplacement(MinigameReplacementParams),
    OrbMods(OrbModsParams),
    SpaceReplacement(SpaceReplacementParams),
    InitialOrbs(InitialOrbsParams),
    BattleBounties(BattleBountiesParams),
    StarHandicap(StarHandicapParams),
    BonusStarReplacement(BonusStarParams),
    FaireFlowerWager(FaireFlowerParams),
}

impl Request {
    pub fn feature(&self) -> Feature {
        match self {
            Self::Coins(_) => Feature::Coins,
            Self::MinigameReplacement(_) => Feature::MinigameReplacement,
            Self::OrbMods(_) => Feature::OrbMods,
            Self::SpaceReplacement(_) => Feature::SpaceReplacement,
            Self::InitialOrbs(_) => Feature::InitialOrbs,
            Self::BattleBounties(_) => Feature::BattleBounties,
            Self::StarHandicap(_) => Feature::StarHandicap,
            Self::BonusStarReplacement(_) => Feature::BonusStarReplacement,
            Self::FaireFlowerWager(_) => Feature::FaireFlowerWager,
        }
    }
}

/// Coin amounts per board event. Each supplied field yields its own block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoinsParams {
    pub blue: Option<u16>,
    pub red: Option<u16>,
    pub character: Option<u16>,
    pub minigame: Option<u16>,
    pub star: Option<StarCostParams>,
    pub pink_boo_coins: Option<u16>,
    pub pink_boo_minimum: Option<u16>,
    pub pink_boo_stars: Option<u16>,
    pub initial: Option<u16>,
    pub zap: Option<u16>,
}

impl CoinsParams {
    pub fn is_empty(&self) -> bool {
        self.blue.is_none()
            && self.red.is_none()
            && self.character.is_none()
            && self.minigame.is_none()
            && self.star.is_none()
            && self.pink_boo_coins.is_none()
            && self.pink_boo_minimum.is_none()
            && self.pink_boo_stars.is_none()
            && self.initial.is_none()
            && self.zap.is_none()
    }
}

/// Star price plus the four HUD layout bytes, in `y4, y2, x2, x4` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StarCostParams {
    pub amount: u16,
    pub layout: [u8; 4],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MinigameReplacementParams {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrbSetting {
    /// Display name or table ID.
    pub orb: String,
    #[serde(default)]
    pub price: Option<u8>,
    pub weight: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrbModsParams {
    pub orbs: Vec<OrbSetting>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceSlot {
    A,
    B,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpaceReplacementParams {
    pub from: String,
    pub to: String,
    pub slot: SpaceSlot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InitialOrbsParams {
    pub orbs: [String; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BattleBountiesParams {
    pub bounties: Vec<u16>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StarHandicapParams {
    pub players: [Option<u16>; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusStarSlot {
    Minigame,
    Orb,
    Happening,
}

impl BonusStarSlot {
    /// Destination register of the load instruction the patch replaces.
    pub fn register(&self) -> u8 {
        match *self {
            Self::Minigame => 4,
            Self::Orb => 6,
            Self::Happening => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BonusStarParams {
    pub slot: BonusStarSlot,
    pub star_id: u16,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowerWager {
    Stars,
    Coins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaireFlowerParams {
    pub wager: FlowerWager,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedBlock {
    pub game: Game,
    pub feature: Feature,
    pub text: String,
}

impl GeneratedBlock {
    pub fn code_block(&self) -> CodeBlock {
        CodeBlock::parse(&self.text)
    }
}
