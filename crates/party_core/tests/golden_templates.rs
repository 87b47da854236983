//! Full-text comparisons against published code listings in `tests/golden/`.

use party_core::codes::mp6::{self, ORB_PRICED_ROWS, OrbRow};
use party_core::codes::mp9;

macro_rules! golden {
    ($name:literal) => {
        include_str!(concat!("golden/", $name, ".txt"))
    };
}

#[test]
fn coin_codes_match_listings() {
    assert_eq!(mp6::blue_space_coins("000A", "10"), golden!("mp6_blue_space_coins"));
    assert_eq!(mp6::red_space_coins("0003", "3"), golden!("mp6_red_space_coins"));
    assert_eq!(mp6::minigame_coins("0019", "25"), golden!("mp6_minigame_coins"));
    assert_eq!(
        mp6::character_space_coins("0007", "7"),
        golden!("mp6_character_space_coins")
    );
    assert_eq!(mp6::initial_coins("0019", "25"), golden!("mp6_initial_coins"));
    assert_eq!(mp6::zap_orb_coins("0014", "20"), golden!("mp6_zap_orb_coins"));
}

#[test]
fn star_and_pink_boo_codes_match_listings() {
    assert_eq!(
        mp6::star_cost("0014", "FFEC", "20", "01", "02", "03", "04"),
        golden!("mp6_star_cost")
    );
    assert_eq!(
        mp6::pink_boo_star_cost("001E", "FFE2", "30"),
        golden!("mp6_pink_boo_star_cost")
    );
    assert_eq!(
        mp6::pink_boo_coin_cost("0005", "FFFB", "5"),
        golden!("mp6_pink_boo_coin_cost")
    );
    assert_eq!(
        mp6::pink_boo_steal_minimum("0002", "2"),
        golden!("mp6_pink_boo_steal_minimum")
    );
}

#[test]
fn replacement_codes_match_listings() {
    assert_eq!(
        mp6::minigame_replacement("00", "3C", "Smashdance", "Boonanza"),
        golden!("mp6_minigame_replacement")
    );
    assert_eq!(
        mp6::space_replacement_slot_a("02", "03", "Blue Space", "Red Space"),
        golden!("mp6_space_replacement_slot_a")
    );
    assert_eq!(
        mp6::space_replacement_slot_b("04", "08", "Happening Space", "Orb Space"),
        golden!("mp6_space_replacement_slot_b")
    );
    assert_eq!(
        mp6::minigame_star_replacement("38800003", "Star 3"),
        golden!("mp6_minigame_star_replacement")
    );
    assert_eq!(
        mp6::orb_star_replacement("38C00001", "Star 1"),
        golden!("mp6_orb_star_replacement")
    );
    assert_eq!(
        mp6::happening_star_replacement("38000002", "Star 2"),
        golden!("mp6_happening_star_replacement")
    );
    assert_eq!(
        mp9::minigame_replacement("000000", "00004D", "Ruins Rumble", "DK's Banana Bonus"),
        golden!("mp9_minigame_replacement")
    );
}

#[test]
fn orb_table_matches_listing() {
    let prices: Vec<String> = (1..=ORB_PRICED_ROWS).map(|i| format!("{i:02X}")).collect();
    let weights: Vec<String> = (0..ORB_PRICED_ROWS)
        .map(|i| format!("{:02X}", (i * 7) % 16))
        .collect();
    let rows: [OrbRow<'_>; ORB_PRICED_ROWS] = std::array::from_fn(|i| OrbRow {
        price: &prices[i],
        weight: &weights[i],
    });

    assert_eq!(mp6::orb_modifier("01", &rows), golden!("mp6_orb_modifier"));
}

#[test]
fn board_setup_codes_match_listings() {
    assert_eq!(
        mp6::initial_orbs("01", "05", "14", "Golden Mushroom", "Flutter", "Zap"),
        golden!("mp6_initial_orbs")
    );
    assert_eq!(
        mp6::star_handicap("0001", "0000", "0002", "0003"),
        golden!("mp6_star_handicap")
    );
    assert_eq!(
        mp6::battle_bounties(
            "0005", "000A", "0014", "001E", "0032", "5", "10", "20", "30", "50",
        ),
        golden!("mp6_battle_bounties")
    );
    assert_eq!(mp6::faire_flower_stars(), golden!("mp6_faire_flower_stars"));
    assert_eq!(mp6::faire_flower_coins(), golden!("mp6_faire_flower_coins"));
}
