//! Mario Party 6 label tables.
//!
//! Minigame and space IDs are their positions in these lists, matching the
//! order the game's selection menus use.

use super::position_of;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbSlot {
    pub id: u8,
    pub name: Option<&'static str>,
}

impl OrbSlot {
    pub fn label(&self) -> String {
        match self.name {
            Some(name) => name.to_string(),
            None => format!("Orb 0x{:02X}", self.id),
        }
    }
}

pub const MINIGAMES: &[&str] = &[
    "Smashdance",
    "Odd Card Out",
    "Freeze Frame",
    "What Goes Up...",
    "Granite Getaway",
    "Circuit Maximus",
    "Catch You Letter",
    "Snow Whirled",
    "Daft Rafts",
    "Tricky Tires",
    "Treasure Trawlers",
    "Memory Lane",
    "Mowtown",
    "Cannonball Fun",
    "Note to Self",
    "Same is Lame",
    "Light Up My Night",
    "Lift Leapers",
    "Blooper Scooper",
    "Trap Ease Artist",
    "Pokey Punch-out",
    "Money Belt",
    "Cash Flow",
    "Cog Jog",
    "Sink or Swim",
    "Snow Brawl",
    "Ball Dozers",
    "Surge and Destroy",
    "Pop Star",
    "Stage Fright",
    "Conveyor Bolt",
    "Crate and Peril",
    "Ray of Fright",
    "Dust 'til Dawn",
    "Garden Grab",
    "Pixel Perfect",
    "Slot Trot",
    "Gondola Glide",
    "Light Breeze",
    "Body Builder",
    "Mole-it!",
    "Cashapult",
    "Jump the Gun",
    "Rocky Road",
    "Clean Team",
    "Hyper Sniper",
    "Insectiride",
    "Sunday Drivers",
    "Stamp By Me",
    "Throw Me a Bone",
    "Black Hole Boogie",
    "Full Tilt",
    "Sumo of Doom-o",
    "O-Zone",
    "Pitifall",
    "Mass Meteor",
    "Lunar-tics",
    "T Minus Five",
    "Asteroad Rage",
    "Boo'd Off the Stage",
    "Boonanza",
];

pub const SPACES: &[&str] = &[
    "None",
    "Invisible Space",
    "Blue Space",
    "Red Space",
    "Happening Space",
    "Chance Time Space",
    "Duel Space",
    "Bowser/DK Space",
    "Orb Space",
];

// Orb table rows in memory order. The trailing unnamed rows are special
// orbs with no shop entry.
#[rustfmt::skip]
pub const ORBS: &[OrbSlot] = &[
    OrbSlot { id: 0x00, name: Some("Mushroom") },
    OrbSlot { id: 0x01, name: Some("Golden Mushroom") },
    OrbSlot { id: 0x02, name: Some("Slow Mushroom") },
    OrbSlot { id: 0x03, name: Some("Metal Mushroom") },
    OrbSlot { id: 0x04, name: Some("Bullet Bill") },
    OrbSlot { id: 0x05, name: Some("Flutter") },
    OrbSlot { id: 0x06, name: Some("Cursed Mushroom") },
    OrbSlot { id: 0x07, name: Some("Spiny") },
    OrbSlot { id: 0x0A, name: Some("Goomba") },
    OrbSlot { id: 0x0B, name: Some("Piranha Plant") },
    OrbSlot { id: 0x0C, name: Some("Klepto") },
    OrbSlot { id: 0x0D, name: Some("Toady") },
    OrbSlot { id: 0x0F, name: Some("Kamek") },
    OrbSlot { id: 0x10, name: Some("Mr. Blizzard") },
    OrbSlot { id: 0x11, name: Some("Podoboo") },
    OrbSlot { id: 0x14, name: Some("Zap") },
    OrbSlot { id: 0x15, name: Some("Tweester") },
    OrbSlot { id: 0x16, name: Some("Thwomp") },
    OrbSlot { id: 0x17, name: Some("Warp Pipe") },
    OrbSlot { id: 0x18, name: Some("Bob-omb") },
    OrbSlot { id: 0x19, name: Some("Paratroopa") },
    OrbSlot { id: 0x1E, name: Some("Snack") },
    OrbSlot { id: 0x1F, name: Some("Boo-away") },
    OrbSlot { id: 0x2E, name: None },
    OrbSlot { id: 0x2A, name: None },
    OrbSlot { id: 0x2B, name: None },
    OrbSlot { id: 0x2C, name: None },
    OrbSlot { id: 0x29, name: None },
];

pub fn minigame_id(label: &str) -> Option<u8> {
    position_of(MINIGAMES, label).map(|index| index as u8)
}

pub fn space_id(label: &str) -> Option<u8> {
    position_of(SPACES, label).map(|index| index as u8)
}

/// Resolves an orb by display name, or by table ID written as `0x2E`/`2E`.
pub fn find_orb(label: &str) -> Option<&'static OrbSlot> {
    let label = label.trim();
    if let Some(slot) = ORBS
        .iter()
        .find(|slot| slot.name.is_some_and(|name| name.eq_ignore_ascii_case(label)))
    {
        return Some(slot);
    }

    let digits = label
        .strip_prefix("0x")
        .or_else(|| label.strip_prefix("0X"))
        .unwrap_or(label);
    let id = u8::from_str_radix(digits, 16).ok()?;
    ORBS.iter().find(|slot| slot.id == id)
}
