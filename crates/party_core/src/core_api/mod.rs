mod batch;
mod engine;
mod error;
mod types;

pub use batch::{BatchEntry, load_batch};
pub use engine::Engine;
pub use error::{CoreError, CoreErrorCode};
pub use types::{
    BattleBountiesParams, BonusStarParams, BonusStarSlot, CoinsParams, FaireFlowerParams, Feature,
    FlowerWager, Game, GeneratedBlock, InitialOrbsParams, MinigameReplacementParams,
    OrbModsParams, OrbSetting, Request, SpaceReplacementParams, SpaceSlot, StarCostParams,
    StarHandicapParams,
};
