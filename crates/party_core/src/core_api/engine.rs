use tracing::{debug, warn};

use crate::catalog::{mp6 as mp6_catalog, mp9 as mp9_catalog};
use crate::codes::mp6::{self, ORB_PRICED_ROWS, OrbRow};
use crate::codes::mp9;
use crate::hex::{hex8, hex16, hex24, li_instruction, neg_hex16};

use super::error::{CoreError, CoreErrorCode};
use super::types::{
    BattleBountiesParams, BonusStarParams, BonusStarSlot, CoinsParams, Feature, FlowerWager, Game,
    GeneratedBlock, InitialOrbsParams, MinigameReplacementParams, OrbModsParams, Request,
    SpaceReplacementParams, SpaceSlot, StarHandicapParams,
};

const BATTLE_BOUNTY_COUNT: usize = 5;

const MP6_FEATURES: &[Feature] = &[
    Feature::Coins,
    Feature::MinigameReplacement,
    Feature::OrbMods,
    Feature::SpaceReplacement,
    Feature::InitialOrbs,
    Feature::BattleBounties,
    Feature::StarHandicap,
    Feature::BonusStarReplacement,
    Feature::FaireFlowerWager,
];

const MP9_FEATURES: &[Feature] = &[Feature::MinigameReplacement];

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

impl Engine {
    pub fn new() -> Self {
        Self
    }

    pub fn supported_features(&self, game: Game) -> &'static [Feature] {
        match game {
            Game::MarioParty6 => MP6_FEATURES,
            Game::MarioParty9 => MP9_FEATURES,
        }
    }

    pub fn supports(&self, game: Game, feature: Feature) -> bool {
        self.supported_features(game).contains(&feature)
    }

    /// Validates `request` and renders its code blocks in a fixed order.
    pub fn generate(&self, game: Game, request: &Request) -> Result<Vec<GeneratedBlock>, CoreError> {
        let feature = request.feature();
        if !self.supports(game, feature) {
            warn!(%game, %feature, "feature not available");
            return Err(CoreError::new(
                CoreErrorCode::UnsupportedFeature,
                format!("{feature} is not supported for {game}"),
            ));
        }

        let texts = match (game, request) {
            (Game::MarioParty6, Request::Coins(params)) => mp6_coins(params)?,
            (Game::MarioParty6, Request::MinigameReplacement(params)) => {
                vec![mp6_minigame_replacement(params)?]
            }
            (Game::MarioParty9, Request::MinigameReplacement(params)) => {
                vec![mp9_minigame_replacement(params)?]
            }
            (Game::MarioParty6, Request::OrbMods(params)) => vec![mp6_orb_mods(params)?],
            (Game::MarioParty6, Request::SpaceReplacement(params)) => {
                vec![mp6_space_replacement(params)?]
            }
            (Game::MarioParty6, Request::InitialOrbs(params)) => vec![mp6_initial_orbs(params)?],
            (Game::MarioParty6, Request::BattleBounties(params)) => {
                vec![mp6_battle_bounties(params)?]
            }
            (Game::MarioParty6, Request::StarHandicap(params)) => {
                vec![mp6_star_handicap(params)?]
            }
            (Game::MarioParty6, Request::BonusStarReplacement(params)) => {
                vec![mp6_bonus_star(params)]
            }
            (Game::MarioParty6, Request::FaireFlowerWager(params)) => vec![match params.wager {
                FlowerWager::Stars => mp6::faire_flower_stars(),
                FlowerWager::Coins => mp6::faire_flower_coins(),
            }],
            _ => {
                return Err(CoreError::new(
                    CoreErrorCode::UnsupportedFeature,
                    format!("{feature} is not supported for {game}"),
                ));
            }
        };

        let blocks: Vec<GeneratedBlock> = texts
            .into_iter()
            .map(|text| GeneratedBlock {
                game,
                feature,
                text,
            })
            .collect();
        debug!(%game, %feature, blocks = blocks.len(), "generated codes");
        Ok(blocks)
    }
}

fn mp6_coins(params: &CoinsParams) -> Result<Vec<String>, CoreError> {
    if params.is_empty() {
        return Err(CoreError::new(
            CoreErrorCode::EmptyRequest,
            "fill out at least one coin field",
        ));
    }

    let mut out = Vec::new();
    if let Some(amount) = params.blue {
        out.push(mp6::blue_space_coins(&hex16(amount), &amount.to_string()));
    }
    if let Some(amount) = params.red {
        out.push(mp6::red_space_coins(&hex16(amount), &amount.to_string()));
    }
    if let Some(amount) = params.character {
        out.push(mp6::character_space_coins(
            &hex16(amount),
            &amount.to_string(),
        ));
    }
    if let Some(amount) = params.minigame {
        out.push(mp6::minigame_coins(&hex16(amount), &amount.to_string()));
    }
    if let Some(star) = params.star {
        let [y4, y2, x2, x4] = star.layout;
        out.push(mp6::star_cost(
            &hex16(star.amount),
            &neg_hex16(star.amount),
            &star.amount.to_string(),
            &hex8(y4),
            &hex8(y2),
            &hex8(x2),
            &hex8(x4),
        ));
    }
    if let Some(amount) = params.pink_boo_coins {
        out.push(mp6::pink_boo_coin_cost(
            &hex16(amount),
            &neg_hex16(amount),
            &amount.to_string(),
        ));
    }
    if let Some(amount) = params.pink_boo_minimum {
        out.push(mp6::pink_boo_steal_minimum(
            &hex16(amount),
            &amount.to_string(),
        ));
    }
    if let Some(amount) = params.pink_boo_stars {
        out.push(mp6::pink_boo_star_cost(
            &hex16(amount),
            &neg_hex16(amount),
            &amount.to_string(),
        ));
    }
    if let Some(amount) = params.initial {
        out.push(mp6::initial_coins(&hex16(amount), &amount.to_string()));
    }
    if let Some(amount) = params.zap {
        out.push(mp6::zap_orb_coins(&hex16(amount), &amount.to_string()));
    }

    Ok(out)
}

fn resolve_mp6_minigame(label: &str) -> Result<(u8, &'static str), CoreError> {
    let id = mp6_catalog::minigame_id(label)
        .ok_or_else(|| CoreError::unknown_label("Mario Party 6 minigame", label))?;
    Ok((id, mp6_catalog::MINIGAMES[usize::from(id)]))
}

fn mp6_minigame_replacement(params: &MinigameReplacementParams) -> Result<String, CoreError> {
    let (from_id, from_name) = resolve_mp6_minigame(&params.from)?;
    let (to_id, to_name) = resolve_mp6_minigame(&params.to)?;
    Ok(mp6::minigame_replacement(
        &hex8(from_id),
        &hex8(to_id),
        from_name,
        to_name,
    ))
}

fn resolve_mp9_minigame(label: &str) -> Result<(u32, &'static str), CoreError> {
    let id = mp9_catalog::minigame_id(label)
        .ok_or_else(|| CoreError::unknown_label("Mario Party 9 minigame", label))?;
    Ok((id, mp9_catalog::MINIGAMES[id as usize]))
}

fn mp9_minigame_replacement(params: &MinigameReplacementParams) -> Result<String, CoreError> {
    let (from_id, from_name) = resolve_mp9_minigame(&params.from)?;
    let (to_id, to_name) = resolve_mp9_minigame(&params.to)?;
    Ok(mp9::minigame_replacement(
        &hex24(from_id),
        &hex24(to_id),
        from_name,
        to_name,
    ))
}

fn mp6_orb_mods(params: &OrbModsParams) -> Result<String, CoreError> {
    let table = mp6_catalog::ORBS;
    // Rows left out of the request are disabled: price and weight zero.
    let mut prices = vec![0u8; table.len()];
    let mut weights = vec![0u8; table.len()];
    let mut seen = vec![false; table.len()];

    for setting in &params.orbs {
        let index = mp6_catalog::find_orb(&setting.orb)
            .and_then(|slot| table.iter().position(|row| row.id == slot.id))
            .ok_or_else(|| CoreError::unknown_label("Mario Party 6 orb", &setting.orb))?;

        if std::mem::replace(&mut seen[index], true) {
            return Err(CoreError::new(
                CoreErrorCode::InvalidInput,
                format!("orb {} is listed more than once", table[index].label()),
            ));
        }

        if index == 0 && setting.price.is_some() {
            return Err(CoreError::new(
                CoreErrorCode::InvalidInput,
                "the Mushroom orb price is fixed and cannot be changed",
            ));
        }
        prices[index] = setting.price.unwrap_or(0);
        weights[index] = setting.weight;
    }

    let prices: Vec<String> = prices.into_iter().map(hex8).collect();
    let weights: Vec<String> = weights.into_iter().map(hex8).collect();
    let rows: [OrbRow<'_>; ORB_PRICED_ROWS] = std::array::from_fn(|i| OrbRow {
        price: &prices[i + 1],
        weight: &weights[i + 1],
    });

    Ok(mp6::orb_modifier(&weights[0], &rows))
}

fn mp6_space_replacement(params: &SpaceReplacementParams) -> Result<String, CoreError> {
    let from_id = mp6_catalog::space_id(&params.from)
        .ok_or_else(|| CoreError::unknown_label("Mario Party 6 space", &params.from))?;
    let to_id = mp6_catalog::space_id(&params.to)
        .ok_or_else(|| CoreError::unknown_label("Mario Party 6 space", &params.to))?;
    let from_name = mp6_catalog::SPACES[usize::from(from_id)];
    let to_name = mp6_catalog::SPACES[usize::from(to_id)];

    let generator = match params.slot {
        SpaceSlot::A => mp6::space_replacement_slot_a,
        SpaceSlot::B => mp6::space_replacement_slot_b,
    };
    Ok(generator(&hex8(from_id), &hex8(to_id), from_name, to_name))
}

fn mp6_initial_orbs(params: &InitialOrbsParams) -> Result<String, CoreError> {
    let mut ids = Vec::with_capacity(3);
    let mut labels = Vec::with_capacity(3);
    for label in &params.orbs {
        let slot = mp6_catalog::find_orb(label)
            .ok_or_else(|| CoreError::unknown_label("Mario Party 6 orb", label))?;
        ids.push(hex8(slot.id));
        labels.push(slot.label());
    }

    Ok(mp6::initial_orbs(
        &ids[0], &ids[1], &ids[2], &labels[0], &labels[1], &labels[2],
    ))
}

fn mp6_battle_bounties(params: &BattleBountiesParams) -> Result<String, CoreError> {
    if params.bounties.len() != BATTLE_BOUNTY_COUNT {
        return Err(CoreError::new(
            CoreErrorCode::InvalidInput,
            format!(
                "expected {BATTLE_BOUNTY_COUNT} battle bounties, got {}",
                params.bounties.len()
            ),
        ));
    }

    let p: Vec<String> = params.bounties.iter().copied().map(hex16).collect();
    let s: Vec<String> = params.bounties.iter().map(u16::to_string).collect();
    Ok(mp6::battle_bounties(
        &p[0], &p[1], &p[2], &p[3], &p[4], &s[0], &s[1], &s[2], &s[3], &s[4],
    ))
}

fn mp6_star_handicap(params: &StarHandicapParams) -> Result<String, CoreError> {
    if params.players.iter().all(Option::is_none) {
        return Err(CoreError::new(
            CoreErrorCode::EmptyRequest,
            "fill out at least one player handicap",
        ));
    }

    let [p1, p2, p3, p4] = params.players.map(|stars| hex16(stars.unwrap_or(0)));
    Ok(mp6::star_handicap(&p1, &p2, &p3, &p4))
}

fn mp6_bonus_star(params: &BonusStarParams) -> String {
    let instruction = li_instruction(params.slot.register(), params.star_id);
    match params.slot {
        BonusStarSlot::Minigame => mp6::minigame_star_replacement(&instruction, &params.label),
        BonusStarSlot::Orb => mp6::orb_star_replacement(&instruction, &params.label),
        BonusStarSlot::Happening => mp6::happening_star_replacement(&instruction, &params.label),
    }
}
