use party_core::codes::mp6::{self, ORB_PRICED_ROWS, OrbRow};
use party_core::codes::mp9;

#[test]
fn blue_space_matches_published_code() {
    assert_eq!(
        mp6::blue_space_coins("000A", "10"),
        "\nMP6 - Blue Spaces Give 10 Coins\nC215F1E8 00000001\n3880000A 00000000\n"
    );
}

#[test]
fn single_slot_coin_codes_use_their_own_hook_address() {
    let cases = [
        (mp6::red_space_coins("0003", "3"), "C215F278 00000001", "Red Spaces Take Away 3 Coins"),
        (
            mp6::character_space_coins("0003", "3"),
            "C215F230 00000001",
            "Character Spaces Give 3 Coins",
        ),
        (
            mp6::initial_coins("0003", "3"),
            "C214B3AC 00000001",
            "Gain 3 Coins at the Start of the Game",
        ),
    ];

    for (text, hook, comment) in cases {
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], format!("MP6 - {comment}"));
        assert_eq!(lines[2], hook);
        assert_eq!(lines[3], "38800003 00000000");
        assert!(text.ends_with("00000000\n"));
    }
}

#[test]
fn zap_uses_r27_load() {
    let text = mp6::zap_orb_coins("0014", "20");
    assert!(text.contains("MP6 - Zap Takes 20 Coins\n"));
    assert!(text.contains("\n3B600014 00000000\n"));
}

#[test]
fn minigame_award_substitutes_single_slot() {
    let text = mp6::minigame_coins("0019", "25");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], "MP6 - Minigames Award 25 Coins");
    assert_eq!(lines[2], "C203A41C 00000013");
    assert_eq!(lines[16], "39E00019 B1EE0000");
    assert_eq!(lines.last().copied(), Some("60000000 00000000"));
    assert_eq!(text.matches("0019").count(), 1);
}

#[test]
fn star_cost_keeps_published_quirks() {
    let text = mp6::star_cost("0014", "FFEC", "20", "01", "02", "03", "04");

    assert!(text.starts_with("\nMP6 - Stars Cost 20 Coins\nC218333C 00000001\n"));
    assert!(text.contains("\nC2160D0C 00000001\n3880FFEC 00000000  \n"));
    assert!(text.contains("\n00265B8B 00000014\n"));
    assert!(text.contains("\n00265B8B 0000000014\n"));
    assert!(text.contains("\n204F0F38 3880FFEC\n044F0F38 3880FFEC\n"));
    assert!(text.ends_with("044DDF84 00000004\nE2000001 80008000\n\n\n"));
    assert_eq!(text.matches("3880FFEC").count(), 5);
}

#[test]
fn star_cost_writes_layout_bytes_to_all_three_tables() {
    let text = mp6::star_cost("0014", "FFEC", "20", "AA", "BB", "CC", "DD");
    for line in [
        "04248064 000000AA",
        "04248068 000000BB",
        "04248070 000000CC",
        "04248074 000000DD",
        "04248D3C 000000AA",
        "04248D4C 000000DD",
        "044DDF74 000000AA",
        "044DDF84 000000DD",
    ] {
        assert!(text.contains(line), "missing {line}");
    }
}

#[test]
fn pink_boo_codes_compare_and_subtract() {
    assert_eq!(
        mp6::pink_boo_star_cost("001E", "FFE2", "30"),
        "\nMP6 - Star Stealing Costs 30 with Pink Boo.\nC21B1FB4 00000001\n2C04001E 00000000\nC21B2634 00000001\n3880FFE2 00000000\n"
    );
    assert_eq!(
        mp6::pink_boo_coin_cost("0005", "FFFB", "5"),
        "\nMP6 - Coin Stealing Costs 5 with Pink Boo.\nC21B1F28 00000001\n2C030005 00000000\nC21B2626 00000001\n3880FFFB 00000000\n"
    );
    assert_eq!(
        mp6::pink_boo_steal_minimum("0002", "2"),
        "\nMP6 - Steal Minimum Of 2 Coins from Pink Boo\nC21B3498 00000002\n38840002 9081002C\n60000000 00000000\n"
    );
}

#[test]
fn minigame_replacement_uses_arrow_glyph() {
    assert_eq!(
        mp6::minigame_replacement("00", "3C", "Smashdance", "Boonanza"),
        "\nMP6 - Minigame Replacement: Smashdance ➜ Boonanza\n28265BA8 00000000\n02265BA8 0000003C\nE2000001 80008000\n"
    );
}

#[test]
fn mp9_minigame_replacement_uses_pointer_codes() {
    assert_eq!(
        mp9::minigame_replacement("000000", "00004D", "Ruins Rumble", "DK's Banana Bonus"),
        "\nMP9 - Minigame Replacement: Ruins Rumble -> DK's Banana Bonus\n4A000000 81000000\n30758730 00000000\n14758730 00004D00\nE0000000 80008000\n"
    );
}

#[test]
fn orb_modifier_rewrites_entire_table() {
    let rows = [OrbRow {
        price: "05",
        weight: "02",
    }; ORB_PRICED_ROWS];
    let text = mp6::orb_modifier("01", &rows);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "MP6 - Orb Modifier");
    assert_eq!(lines[2], "042BD220 00050505");
    assert_eq!(lines[3], "042BD224 01010101");
    assert_eq!(lines[5], "042BD22C 01010101");
    assert_eq!(lines[6], "042BD230 01050505");
    assert_eq!(lines[7], "042BD234 02020202");
    // title + mushroom row + 27 priced rows + terminator
    assert_eq!(lines.len(), 2 + 4 + ORB_PRICED_ROWS * 4 + 4);
    assert!(text.contains("\n042BD2A0 0A050505\n"));
    assert!(text.contains("\n042BD370 1E050505\n"));
    assert!(text.contains("\n042BD3D0 29050505\n"));
    assert!(text.ends_with(
        "042BD3E0 FF000000\n042BD3E4 00000000\n042BD3E8 00000000\n042BD3EC 00000000\n"
    ));
}

#[test]
fn initial_orbs_interleaves_ids() {
    let text = mp6::initial_orbs("01", "05", "14", "Golden Mushroom", "Flutter", "Zap");
    assert!(text.contains("MP6 - Start with Golden Mushroom, Flutter, and Zap\n"));
    assert!(text.contains("\n48150114 01051401\n05140105 14010514\n"));
    assert!(text.ends_with("C2153748 00000001\n4BEAFED8 00000000\n"));
}

#[test]
fn space_replacement_slots_differ_only_in_hook() {
    let a = mp6::space_replacement_slot_a("02", "03", "Blue Space", "Red Space");
    let b = mp6::space_replacement_slot_b("02", "03", "Blue Space", "Red Space");

    assert!(a.contains("MP6 - Replace Blue Space with Red Space (Slot A)\nC217590C 00000005\n"));
    assert!(a.contains("A01F0030 28000002\n"));
    assert!(a.contains("38000003 B01F0030\n"));
    assert!(b.contains("MP6 - Replace Blue Space with Red Space (Slot B)\nC2175910 00000005\n"));
    assert!(b.contains("28000002 40820018\n"));
    assert!(b.contains("4082000C 38000003\n"));
}

#[test]
fn star_handicap_writes_each_player() {
    assert_eq!(
        mp6::star_handicap("0001", "0000", "0002", "0003"),
        "\nMP6 - Star Handicap\n28265772 00000000\n02265780 00000001\n02265888 00000000\n02265990 00000002\n02265A98 00000003\nE2000001 80008000\n"
    );
}

#[test]
fn bonus_star_replacements_embed_instruction_word() {
    let minigame = mp6::minigame_star_replacement("38800003", "Star 3");
    assert!(minigame.contains("204ECF10 A883001E\nC24ECF10 00000001\n38800003 00000000\n"));

    let orb = mp6::orb_star_replacement("38C00001", "Star 1");
    assert!(orb.contains("MP6 - Replace Orb Star with Star 1\n"));
    assert!(orb.contains("\n38C00001 00000000\n"));

    let happening = mp6::happening_star_replacement("38000002", "Star 2");
    assert!(happening.contains("\n38000002 7C060378\n60000000 00000000\n"));
}

#[test]
fn battle_bounties_list_labels_and_values() {
    let text = mp6::battle_bounties(
        "0005", "000A", "0014", "001E", "0032", "5", "10", "20", "30", "50",
    );
    assert!(text.contains("MP6 - Battle Minigames Bounties are 5, 10, 20, 30, and 50\n"));
    assert!(text.contains("0424BAB0 00000005\n"));
    assert!(text.contains("0424BAC0 00000032\n"));
}

#[test]
fn faire_flower_codes_are_fixed() {
    let stars = mp6::faire_flower_stars();
    let coins = mp6::faire_flower_coins();
    assert!(stars.starts_with("\nMP6 - Always Wager Stars at Faire Square Flower Event\n"));
    assert!(coins.starts_with("\nMP6 - Always Wager Coins at Faire Square Flower Event\n"));
    assert_eq!(stars.lines().count(), 10);
    assert_eq!(coins.lines().count(), 10);
    assert!(coins.contains("C24D4E3C 00000001\n60000000 00000000\n"));
}

#[test]
fn malformed_slot_values_are_embedded_verbatim() {
    let text = mp6::blue_space_coins("zz", "lots of");
    assert!(text.contains("Blue Spaces Give lots of Coins"));
    assert!(text.contains("\n3880zz 00000000\n"));
}
