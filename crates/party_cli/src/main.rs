use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use party_core::core_api::{
    BattleBountiesParams, BonusStarParams, BonusStarSlot, CoinsParams, Engine, FaireFlowerParams,
    FlowerWager, Game, GeneratedBlock, InitialOrbsParams, MinigameReplacementParams,
    OrbModsParams, OrbSetting, Request, SpaceReplacementParams, SpaceSlot, StarCostParams,
    StarHandicapParams, load_batch,
};
use party_core::hex::parse_amount;
use party_render::{
    CatalogEntry, JsonStyle, minigame_catalog, orb_catalog, render_catalog_json,
    render_catalog_text, render_features_text, render_json, render_text, space_catalog,
};
use serde_json::Value as JsonValue;
use tracing::{debug, trace};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[arg(
        long,
        global = true,
        value_name = "6|9|mp6|mp9|marioparty6|marioparty9",
        value_parser = parse_game
    )]
    game: Option<Game>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, global = true)]
    output: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Coin rewards, penalties and prices.
    Coins {
        #[arg(long, value_parser = parse_amount_arg)]
        blue: Option<u16>,
        #[arg(long, value_parser = parse_amount_arg)]
        red: Option<u16>,
        #[arg(long, value_parser = parse_amount_arg)]
        character: Option<u16>,
        #[arg(long, value_parser = parse_amount_arg)]
        minigame: Option<u16>,
        #[arg(long, value_parser = parse_amount_arg)]
        star: Option<u16>,
        /// Star price HUD bytes as Y4,Y2,X2,X4 (hex).
        #[arg(long = "star-layout", value_parser = parse_layout, requires = "star")]
        star_layout: Option<[u8; 4]>,
        #[arg(long = "pink-boo-coins", value_parser = parse_amount_arg)]
        pink_boo_coins: Option<u16>,
        #[arg(long = "pink-boo-min", value_parser = parse_amount_arg)]
        pink_boo_min: Option<u16>,
        #[arg(long = "pink-boo-stars", value_parser = parse_amount_arg)]
        pink_boo_stars: Option<u16>,
        #[arg(long, value_parser = parse_amount_arg)]
        initial: Option<u16>,
        #[arg(long, value_parser = parse_amount_arg)]
        zap: Option<u16>,
    },
    /// Replace one minigame with another.
    Minigame {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Replace one board space type with another.
    Space {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long, value_enum, default_value_t = SlotArg::A)]
        slot: SlotArg,
    },
    /// Start every player with three orbs.
    InitialOrbs {
        #[arg(value_name = "ORB", num_args = 3, required = true)]
        orbs: Vec<String>,
    },
    /// Rewrite the orb shop table.
    Orbs {
        /// NAME=WEIGHT or NAME=PRICE:WEIGHT. Unlisted orbs are disabled.
        #[arg(long = "set", value_name = "NAME=[PRICE:]WEIGHT", value_parser = parse_orb_setting)]
        set: Vec<OrbSetting>,
    },
    /// Coins awarded by battle minigames.
    Battle {
        #[arg(value_name = "COINS", num_args = 5, required = true, value_parser = parse_amount_arg)]
        bounties: Vec<u16>,
    },
    /// Stars each player starts with.
    Handicap {
        #[arg(long, value_parser = parse_amount_arg)]
        p1: Option<u16>,
        #[arg(long, value_parser = parse_amount_arg)]
        p2: Option<u16>,
        #[arg(long, value_parser = parse_amount_arg)]
        p3: Option<u16>,
        #[arg(long, value_parser = parse_amount_arg)]
        p4: Option<u16>,
    },
    /// Swap a bonus star for another star type.
    BonusStar {
        #[arg(long, value_enum)]
        slot: BonusSlotArg,
        #[arg(long = "star-id", value_parser = parse_amount_arg)]
        star_id: u16,
        #[arg(long)]
        label: String,
    },
    /// Force the Faire Square flower wager.
    FaireFlower {
        #[arg(long, value_enum)]
        wager: WagerArg,
    },
    /// Generate every request listed in a JSON file.
    Batch {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    /// Show supported features or a label table.
    List {
        #[arg(value_enum)]
        what: ListKind,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SlotArg {
    A,
    B,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum BonusSlotArg {
    Minigame,
    Orb,
    Happening,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum WagerArg {
    Stars,
    Coins,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ListKind {
    Features,
    Minigames,
    Spaces,
    Orbs,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    trace!("args: {:?}", std::env::args().collect::<Vec<_>>());

    let engine = Engine::new();
    let payload = match cli.command {
        Command::Batch { ref path } => {
            let bytes = fs::read(path).unwrap_or_else(|e| {
                eprintln!("Error reading {}: {e}", path.display());
                process::exit(1);
            });
            let entries = load_batch(bytes).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                process::exit(1);
            });
            debug!(entries = entries.len(), "loaded batch file");

            let mut blocks = Vec::new();
            for entry in &entries {
                let generated = engine
                    .generate(entry.game, &entry.request)
                    .unwrap_or_else(|e| {
                        eprintln!("Error: {e}");
                        process::exit(1);
                    });
                blocks.extend(generated);
            }
            render_blocks(&blocks, cli.json)
        }
        Command::List { what } => {
            let game = require_game(cli.game);
            render_listing(&engine, game, what, cli.json)
        }
        ref command => {
            let game = require_game(cli.game);
            let request = build_request(command);
            let blocks = engine.generate(game, &request).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                process::exit(1);
            });
            render_blocks(&blocks, cli.json)
        }
    };

    if let Some(out_path) = cli.output.as_ref() {
        fs::write(out_path, format!("{payload}\n")).unwrap_or_else(|e| {
            eprintln!("Error writing {}: {e}", out_path.display());
            process::exit(1);
        });
        println!("Wrote codes to {}", out_path.display());
        return;
    }

    println!("{payload}");
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();
}

fn require_game(game: Option<Game>) -> Game {
    game.unwrap_or_else(|| {
        eprintln!("--game <GAME> is required for this command");
        process::exit(2);
    })
}

fn build_request(command: &Command) -> Request {
    match command {
        Command::Coins {
            blue,
            red,
            character,
            minigame,
            star,
            star_layout,
            pink_boo_coins,
            pink_boo_min,
            pink_boo_stars,
            initial,
            zap,
        } => Request::Coins(CoinsParams {
            blue: *blue,
            red: *red,
            character: *character,
            minigame: *minigame,
            star: star.map(|amount| StarCostParams {
                amount,
                layout: star_layout.unwrap_or([0; 4]),
            }),
            pink_boo_coins: *pink_boo_coins,
            pink_boo_minimum: *pink_boo_min,
            pink_boo_stars: *pink_boo_stars,
            initial: *initial,
            zap: *zap,
        }),
        Command::Minigame { from, to } => {
            Request::MinigameReplacement(MinigameReplacementParams {
                from: from.clone(),
                to: to.clone(),
            })
        }
        Command::Space { from, to, slot } => Request::SpaceReplacement(SpaceReplacementParams {
            from: from.clone(),
            to: to.clone(),
            slot: match slot {
                SlotArg::A => SpaceSlot::A,
                SlotArg::B => SpaceSlot::B,
            },
        }),
        Command::InitialOrbs { orbs } => Request::InitialOrbs(InitialOrbsParams {
            orbs: [orbs[0].clone(), orbs[1].clone(), orbs[2].clone()],
        }),
        Command::Orbs { set } => Request::OrbMods(OrbModsParams { orbs: set.clone() }),
        Command::Battle { bounties } => Request::BattleBounties(BattleBountiesParams {
            bounties: bounties.clone(),
        }),
        Command::Handicap { p1, p2, p3, p4 } => Request::StarHandicap(StarHandicapParams {
            players: [*p1, *p2, *p3, *p4],
        }),
        Command::BonusStar {
            slot,
            star_id,
            label,
        } => Request::BonusStarReplacement(BonusStarParams {
            slot: match slot {
                BonusSlotArg::Minigame => BonusStarSlot::Minigame,
                BonusSlotArg::Orb => BonusStarSlot::Orb,
                BonusSlotArg::Happening => BonusStarSlot::Happening,
            },
            star_id: *star_id,
            label: label.clone(),
        }),
        Command::FaireFlower { wager } => Request::FaireFlowerWager(FaireFlowerParams {
            wager: match wager {
                WagerArg::Stars => FlowerWager::Stars,
                WagerArg::Coins => FlowerWager::Coins,
            },
        }),
        Command::Batch { .. } | Command::List { .. } => {
            unreachable!("handled before request building")
        }
    }
}

fn render_blocks(blocks: &[GeneratedBlock], json: bool) -> String {
    if json {
        return pretty_json(&render_json(blocks, JsonStyle::CanonicalV1));
    }
    render_text(blocks)
}

fn render_listing(engine: &Engine, game: Game, what: ListKind, json: bool) -> String {
    if what == ListKind::Features {
        let features = engine.supported_features(game);
        if json {
            let names = features
                .iter()
                .map(|feature| JsonValue::String(feature.as_str().to_string()))
                .collect();
            return pretty_json(&JsonValue::Array(names));
        }
        return render_features_text(features).trim_end().to_string();
    }

    let entries: Option<Vec<CatalogEntry>> = match what {
        ListKind::Minigames => Some(minigame_catalog(game)),
        ListKind::Spaces => space_catalog(game),
        ListKind::Orbs => orb_catalog(game),
        ListKind::Features => None,
    };
    let entries = entries.unwrap_or_else(|| {
        eprintln!("Error: {game} has no {} table", list_kind_name(what));
        process::exit(1);
    });

    if json {
        return pretty_json(&render_catalog_json(&entries));
    }
    render_catalog_text(&entries).trim_end().to_string()
}

fn list_kind_name(what: ListKind) -> &'static str {
    match what {
        ListKind::Features => "feature",
        ListKind::Minigames => "minigame",
        ListKind::Spaces => "space",
        ListKind::Orbs => "orb",
    }
}

fn pretty_json(value: &JsonValue) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error rendering JSON output: {e}");
        process::exit(1);
    })
}

fn parse_game(value: &str) -> Result<Game, String> {
    Game::parse_label(value).ok_or_else(|| {
        format!(
            "invalid game value '{value}', expected one of: 6, 9, mp6, mp9, marioparty6, marioparty9"
        )
    })
}

fn parse_amount_arg(value: &str) -> Result<u16, String> {
    parse_amount(value).map_err(|e| e.message)
}

fn parse_byte(value: &str) -> Result<u8, String> {
    let amount = parse_amount_arg(value)?;
    u8::try_from(amount).map_err(|_| format!("{amount} does not fit in one byte"))
}

fn parse_layout(value: &str) -> Result<[u8; 4], String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(format!(
            "expected four comma-separated bytes (Y4,Y2,X2,X4), got '{value}'"
        ));
    }

    let mut layout = [0u8; 4];
    for (slot, part) in layout.iter_mut().zip(parts) {
        let digits = part
            .strip_prefix("0x")
            .or_else(|| part.strip_prefix("0X"))
            .unwrap_or(part);
        *slot = u8::from_str_radix(digits, 16)
            .map_err(|e| format!("invalid layout byte '{part}': {e}"))?;
    }
    Ok(layout)
}

fn parse_orb_setting(value: &str) -> Result<OrbSetting, String> {
    let (orb, numbers) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=[PRICE:]WEIGHT, got '{value}'"))?;
    let orb = orb.trim();
    if orb.is_empty() {
        return Err(format!("missing orb name in '{value}'"));
    }

    let (price, weight) = match numbers.split_once(':') {
        Some((price, weight)) => (Some(parse_byte(price)?), parse_byte(weight)?),
        None => (None, parse_byte(numbers)?),
    };

    Ok(OrbSetting {
        orb: orb.to_string(),
        price,
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orb_setting_accepts_optional_price() {
        let with_price = parse_orb_setting("Boo-away=30:5").expect("priced setting");
        assert_eq!(with_price.orb, "Boo-away");
        assert_eq!(with_price.price, Some(30));
        assert_eq!(with_price.weight, 5);

        let weight_only = parse_orb_setting(" Mushroom = 3").expect("weight-only setting");
        assert_eq!(weight_only.orb, "Mushroom");
        assert_eq!(weight_only.price, None);
        assert_eq!(weight_only.weight, 3);
    }

    #[test]
    fn orb_setting_rejects_bad_input() {
        assert!(parse_orb_setting("Mushroom").is_err());
        assert!(parse_orb_setting("=3").is_err());
        assert!(parse_orb_setting("Zap=300").is_err());
    }

    #[test]
    fn layout_reads_four_hex_bytes() {
        assert_eq!(parse_layout("01,0x02, FF,10"), Ok([0x01, 0x02, 0xFF, 0x10]));
        assert!(parse_layout("01,02,03").is_err());
        assert!(parse_layout("01,02,03,GG").is_err());
        assert_eq!(parse_layout("0X0A,0b,0x0C,d"), Ok([0x0A, 0x0B, 0x0C, 0x0D]));
        assert!(parse_layout("0x0x01,02,03,04").is_err());
    }

    #[test]
    fn game_values_match_core_labels() {
        assert_eq!(parse_game("mp6"), Ok(Game::MarioParty6));
        assert_eq!(parse_game("Mario Party 9"), Ok(Game::MarioParty9));
        assert!(parse_game("7").is_err());
    }
}
