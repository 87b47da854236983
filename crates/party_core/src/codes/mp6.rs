//! Mario Party 6 (GameCube) code templates.
//!
//! Every function here is a literal template: inputs are embedded verbatim
//! at their substitution slots and never inspected. Amount slots expect
//! four uppercase hex digits, ID slots expect two.

use std::fmt::Write as _;

use crate::catalog::mp6::ORBS;

/// Orb-table rows after the Mushroom row, each addressed by its price/weight pair.
pub const ORB_PRICED_ROWS: usize = 27;

const ORB_TABLE_BASE: u32 = 0x042B_D220;
const ORB_ROW_STRIDE: u32 = 0x10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbRow<'a> {
    pub price: &'a str,
    pub weight: &'a str,
}

pub fn blue_space_coins(amount: &str, amount_dec: &str) -> String {
    format!(
        "
MP6 - Blue Spaces Give {amount_dec} Coins
C215F1E8 00000001
3880{amount} 00000000
"
    )
}

pub fn red_space_coins(amount: &str, amount_dec: &str) -> String {
    format!(
        "
MP6 - Red Spaces Take Away {amount_dec} Coins
C215F278 00000001
3880{amount} 00000000
"
    )
}

pub fn minigame_coins(amount: &str, amount_dec: &str) -> String {
    format!(
        "
MP6 - Minigames Award {amount_dec} Coins
C203A41C 00000013
3DC08026 61CE5BA8
89EE0000 2C0F0015
41820070 2C0F0016
41820068 2C0F0029
41820060 2C0F002D
41820058 2C0F002E
41820050 2C0F0030
41820048 2C0F003F
41820040 2C0F004F
41820038 2C0F0050
41820030 3DC08026
61CE5778 A1EE0000
2C0F0000 4182000C
39E0{amount} B1EE0000
39CE0108 3A100001
2C100003 4081FFE0
900D8B74 39C00000
39E00000 3A000000
60000000 00000000
"
    )
}

pub fn character_space_coins(amount: &str, amount_dec: &str) -> String {
    format!(
        "
MP6 - Character Spaces Give {amount_dec} Coins
C215F230 00000001
3880{amount} 00000000
"
    )
}

/// Star price patch. `y4`/`y2`/`x2`/`x4` are the price-sign layout bytes
/// written to both board HUD tables.
pub fn star_cost(
    amount: &str,
    neg_amount: &str,
    amount_dec: &str,
    y4: &str,
    y2: &str,
    x2: &str,
    x4: &str,
) -> String {
    // One `3880` line carries two trailing spaces in the published code.
    format!(
        "
MP6 - Stars Cost {amount_dec} Coins
C218333C 00000001
2C03{amount} 00000000
C218342C 00000001
2C03{amount} 00000000
C21834C4 00000001
2C03{amount} 00000000
C215F668 00000001
2C03{amount} 00000000
C215FA18 00000001
3880{neg_amount} 00000000
C216068C 00000001
2C00{amount} 00000000
C2160D0C 00000001
3880{neg_amount} 00000000\x20\x20
C2183590 00000002
3880{amount} 7C8400D0
60000000 00000000
28265B8A 00000014
00265B8B 0000{amount}
E2000001 80008000
204F0E28 2C030014
044F0E28 2C03{amount}
E2000001 80008000
204F0F38 3880FFEC
044F0F38 3880{neg_amount}
E2000001 80008000
C2184538 00000001
2C14{amount} 00000000
C2184544 00000001
3880{neg_amount} 00000000
28265B8A 00000014
00265B8B 000000{amount}
E2000001 80008000
04248064 000000{y4}
04248068 000000{y2}
04248070 000000{x2}
04248074 000000{x4}
04248D3C 000000{y4}
04248D40 000000{y2}
04248D48 000000{x2}
04248D4C 000000{x4}
204DDF60 465F6C00
044DDF74 000000{y4}
044DDF78 000000{y2}
044DDF80 000000{x2}
044DDF84 000000{x4}
E2000001 80008000


"
    )
}

pub fn pink_boo_star_cost(amount: &str, neg_amount: &str, amount_dec: &str) -> String {
    format!(
        "
MP6 - Star Stealing Costs {amount_dec} with Pink Boo.
C21B1FB4 00000001
2C04{amount} 00000000
C21B2634 00000001
3880{neg_amount} 00000000
"
    )
}

pub fn pink_boo_coin_cost(amount: &str, neg_amount: &str, amount_dec: &str) -> String {
    format!(
        "
MP6 - Coin Stealing Costs {amount_dec} with Pink Boo.
C21B1F28 00000001
2C03{amount} 00000000
C21B2626 00000001
3880{neg_amount} 00000000
"
    )
}

pub fn minigame_replacement(hex_from: &str, hex_to: &str, name_from: &str, name_to: &str) -> String {
    format!(
        "
MP6 - Minigame Replacement: {name_from} ➜ {name_to}
28265BA8 000000{hex_from}
02265BA8 000000{hex_to}
E2000001 80008000
"
    )
}

/// Rewrites the whole orb table. The Mushroom row keeps its fixed
/// `050505` prices; every other row takes the type byte from the table and
/// a price repeated three times, followed by twelve weight bytes.
pub fn orb_modifier(first_weight: &str, rows: &[OrbRow<'_>; ORB_PRICED_ROWS]) -> String {
    let mut out = String::from("\nMP6 - Orb Modifier\n");
    writeln!(out, "{ORB_TABLE_BASE:08X} 00050505").expect("writing to String cannot fail");
    push_weight_lines(&mut out, ORB_TABLE_BASE, first_weight);

    for (index, (row, orb)) in rows.iter().zip(ORBS.iter().skip(1)).enumerate() {
        let base = ORB_TABLE_BASE + ORB_ROW_STRIDE * (index as u32 + 1);
        writeln!(
            out,
            "{base:08X} {:02X}{p}{p}{p}",
            orb.id,
            p = row.price
        )
        .expect("writing to String cannot fail");
        push_weight_lines(&mut out, base, row.weight);
    }

    out.push_str(
        "042BD3E0 FF000000
042BD3E4 00000000
042BD3E8 00000000
042BD3EC 00000000
",
    );
    out
}

fn push_weight_lines(out: &mut String, base: u32, weight: &str) {
    for offset in [4u32, 8, 12] {
        writeln!(out, "{:08X} {weight}{weight}{weight}{weight}", base + offset)
            .expect("writing to String cannot fail");
    }
}

pub fn initial_orbs(
    one: &str,
    two: &str,
    three: &str,
    one_item: &str,
    two_item: &str,
    three_item: &str,
) -> String {
    format!(
        "
MP6 - Start with {one_item}, {two_item}, and {three_item}
06003620 00000028
3D808000 618C363C
1C1F0003 7C00E214
7CAC00AE 98A30005
48150114 {one}{two}{three}{one}
{two}{three}{one}{two} {three}{one}{two}{three}
C2153748 00000001
4BEAFED8 00000000
"
    )
}

pub fn pink_boo_steal_minimum(value: &str, amount_dec: &str) -> String {
    format!(
        "
MP6 - Steal Minimum Of {amount_dec} Coins from Pink Boo
C21B3498 00000002
3884{value} 9081002C
60000000 00000000
"
    )
}

pub fn space_replacement_slot_a(
    hex_from: &str,
    hex_to: &str,
    name_from: &str,
    name_to: &str,
) -> String {
    format!(
        "
MP6 - Replace {name_from} with {name_to} (Slot A)
C217590C 00000005
A01F0030 280000{hex_from}
40820018 A09F0032
2804FFFF 4082000C
380000{hex_to} B01F0030
88030000 00000000
"
    )
}

pub fn space_replacement_slot_b(
    hex_from: &str,
    hex_to: &str,
    name_from: &str,
    name_to: &str,
) -> String {
    format!(
        "
MP6 - Replace {name_from} with {name_to} (Slot B)
C2175910 00000005
5418CFFE A01F0030
280000{hex_from} 40820018
A09F0032 2804FFFF
4082000C 380000{hex_to}
B01F0030 00000000
"
    )
}

pub fn star_handicap(p1: &str, p2: &str, p3: &str, p4: &str) -> String {
    format!(
        "
MP6 - Star Handicap
28265772 00000000
02265780 0000{p1}
02265888 0000{p2}
02265990 0000{p3}
02265A98 0000{p4}
E2000001 80008000
"
    )
}

/// `instruction` replaces the whole patched word, so it must be a full
/// eight-digit opcode.
pub fn minigame_star_replacement(instruction: &str, label: &str) -> String {
    format!(
        "
MP6 - Replace Minigame Star with {label}
204ECF10 A883001E
C24ECF10 00000001
{instruction} 00000000
E2000001 80008000
"
    )
}

pub fn orb_star_replacement(instruction: &str, label: &str) -> String {
    format!(
        "
MP6 - Replace Orb Star with {label}
204ECF4C A8C70034
C24ECF4C 00000001
{instruction} 00000000
E2000001 80008000
"
    )
}

pub fn happening_star_replacement(instruction: &str, label: &str) -> String {
    format!(
        "
MP6 - Replace Happening Star with {label}
204ECF88 88040017
C24ECF88 00000002
{instruction} 7C060378
60000000 00000000
E2000001 80008000
"
    )
}

pub fn initial_coins(amount: &str, amount_dec: &str) -> String {
    format!(
        "
MP6 - Gain {amount_dec} Coins at the Start of the Game
C214B3AC 00000001
3880{amount} 00000000
"
    )
}

#[allow(clippy::too_many_arguments)]
pub fn battle_bounties(
    p1: &str,
    p2: &str,
    p3: &str,
    p4: &str,
    p5: &str,
    s1: &str,
    s2: &str,
    s3: &str,
    s4: &str,
    s5: &str,
) -> String {
    format!(
        "
MP6 - Battle Minigames Bounties are {s1}, {s2}, {s3}, {s4}, and {s5}
0424BAB0 0000{p1}
0424BAB4 0000{p2}
0424BAB8 0000{p3}
0424BABC 0000{p4}
0424BAC0 0000{p5}
"
    )
}

pub fn zap_orb_coins(amount: &str, amount_dec: &str) -> String {
    format!(
        "
MP6 - Zap Takes {amount_dec} Coins
C21AE1B8 00000001
3B60{amount} 00000000
"
    )
}

pub fn faire_flower_stars() -> String {
    "
MP6 - Always Wager Stars at Faire Square Flower Event
282C0256 0000007D
C24D3C68 00000001
38E00001 00000000
C24D4E34 00000001
38000001 00000000
C24D3C68 00000001
38E00001 00000000
E2000001 80008000
"
    .to_string()
}

pub fn faire_flower_coins() -> String {
    "
MP6 - Always Wager Coins at Faire Square Flower Event
282C0256 0000007D
C24D3C70 00000001
60000000 00000000
C24D4E3C 00000001
60000000 00000000
C24D3C70 00000001
60000000 00000000
E2000001 80008000
"
    .to_string()
}
