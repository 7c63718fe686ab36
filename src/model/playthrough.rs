use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Returned when parsing a [`Game`] or [`Category`] from a string that matches no member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized value {:?}", self.0)
    }
}

/// Pokémon title a playthrough covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Game {
    Red,
    Blue,
    Yellow,
    Gold,
    Silver,
    Crystal,
    Ruby,
    Sapphire,
    Emerald,
    FireRed,
    LeafGreen,
    Diamond,
    Pearl,
    Platinum,
    HeartGold,
    SoulSilver,
    Black,
    White,
    Black2,
    White2,
    X,
    Y,
    OmegaRuby,
    AlphaSapphire,
    Sun,
    Moon,
    UltraSun,
    UltraMoon,
    LetsGoPikachu,
    LetsGoEevee,
    Sword,
    Shield,
    BrilliantDiamond,
    ShiningPearl,
    LegendsArceus,
    Scarlet,
    Violet,
    LegendsZa,
}

impl Game {
    /// Every member, in display order.
    pub const ALL: [Game; 38] = [
        Game::Red,
        Game::Blue,
        Game::Yellow,
        Game::Gold,
        Game::Silver,
        Game::Crystal,
        Game::Ruby,
        Game::Sapphire,
        Game::Emerald,
        Game::FireRed,
        Game::LeafGreen,
        Game::Diamond,
        Game::Pearl,
        Game::Platinum,
        Game::HeartGold,
        Game::SoulSilver,
        Game::Black,
        Game::White,
        Game::Black2,
        Game::White2,
        Game::X,
        Game::Y,
        Game::OmegaRuby,
        Game::AlphaSapphire,
        Game::Sun,
        Game::Moon,
        Game::UltraSun,
        Game::UltraMoon,
        Game::LetsGoPikachu,
        Game::LetsGoEevee,
        Game::Sword,
        Game::Shield,
        Game::BrilliantDiamond,
        Game::ShiningPearl,
        Game::LegendsArceus,
        Game::Scarlet,
        Game::Violet,
        Game::LegendsZa,
    ];

    /// Identifier used on the wire and in the database.
    pub fn slug(self) -> &'static str {
        match self {
            Game::Red => "red",
            Game::Blue => "blue",
            Game::Yellow => "yellow",
            Game::Gold => "gold",
            Game::Silver => "silver",
            Game::Crystal => "crystal",
            Game::Ruby => "ruby",
            Game::Sapphire => "sapphire",
            Game::Emerald => "emerald",
            Game::FireRed => "fire_red",
            Game::LeafGreen => "leaf_green",
            Game::Diamond => "diamond",
            Game::Pearl => "pearl",
            Game::Platinum => "platinum",
            Game::HeartGold => "heart_gold",
            Game::SoulSilver => "soul_silver",
            Game::Black => "black",
            Game::White => "white",
            Game::Black2 => "black2",
            Game::White2 => "white2",
            Game::X => "x",
            Game::Y => "y",
            Game::OmegaRuby => "omega_ruby",
            Game::AlphaSapphire => "alpha_sapphire",
            Game::Sun => "sun",
            Game::Moon => "moon",
            Game::UltraSun => "ultra_sun",
            Game::UltraMoon => "ultra_moon",
            Game::LetsGoPikachu => "lets_go_pikachu",
            Game::LetsGoEevee => "lets_go_eevee",
            Game::Sword => "sword",
            Game::Shield => "shield",
            Game::BrilliantDiamond => "brilliant_diamond",
            Game::ShiningPearl => "shining_pearl",
            Game::LegendsArceus => "legends_arceus",
            Game::Scarlet => "scarlet",
            Game::Violet => "violet",
            Game::LegendsZa => "legends_za",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Game::Red => "Red",
            Game::Blue => "Blue",
            Game::Yellow => "Yellow",
            Game::Gold => "Gold",
            Game::Silver => "Silver",
            Game::Crystal => "Crystal",
            Game::Ruby => "Ruby",
            Game::Sapphire => "Sapphire",
            Game::Emerald => "Emerald",
            Game::FireRed => "FireRed",
            Game::LeafGreen => "LeafGreen",
            Game::Diamond => "Diamond",
            Game::Pearl => "Pearl",
            Game::Platinum => "Platinum",
            Game::HeartGold => "HeartGold",
            Game::SoulSilver => "SoulSilver",
            Game::Black => "Black",
            Game::White => "White",
            Game::Black2 => "Black 2",
            Game::White2 => "White 2",
            Game::X => "X",
            Game::Y => "Y",
            Game::OmegaRuby => "Omega Ruby",
            Game::AlphaSapphire => "Alpha Sapphire",
            Game::Sun => "Sun",
            Game::Moon => "Moon",
            Game::UltraSun => "Ultra Sun",
            Game::UltraMoon => "Ultra Moon",
            Game::LetsGoPikachu => "Let's Go, Pikachu!",
            Game::LetsGoEevee => "Let's Go, Eevee!",
            Game::Sword => "Sword",
            Game::Shield => "Shield",
            Game::BrilliantDiamond => "Brilliant Diamond",
            Game::ShiningPearl => "Shining Pearl",
            Game::LegendsArceus => "Legends: Arceus",
            Game::Scarlet => "Scarlet",
            Game::Violet => "Violet",
            Game::LegendsZa => "Legends: Z-A",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Game {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::ALL
            .into_iter()
            .find(|member| member.slug() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Kind of event recorded by an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Catch,
    Badge,
    Milestone,
    Battle,
    Evolution,
    Trade,
    Item,
    Note,
}

impl Category {
    /// Every member, in display order.
    pub const ALL: [Category; 8] = [
        Category::Catch,
        Category::Badge,
        Category::Milestone,
        Category::Battle,
        Category::Evolution,
        Category::Trade,
        Category::Item,
        Category::Note,
    ];

    /// Identifier used on the wire and in the database.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Catch => "catch",
            Category::Badge => "badge",
            Category::Milestone => "milestone",
            Category::Battle => "battle",
            Category::Evolution => "evolution",
            Category::Trade => "trade",
            Category::Item => "item",
            Category::Note => "note",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Catch => "Catch",
            Category::Badge => "Badge",
            Category::Milestone => "Milestone",
            Category::Battle => "Battle",
            Category::Evolution => "Evolution",
            Category::Trade => "Trade",
            Category::Item => "Item",
            Category::Note => "Note",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|member| member.slug() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PlaythroughDto {
    pub id: i32,
    pub title: String,
    pub game: Game,
    pub start_date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A playthrough together with its entries, newest entry first
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PlaythroughDetailDto {
    pub playthrough: PlaythroughDto,
    pub entries: Vec<EntryDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EntryDto {
    pub id: i32,
    pub playthrough_id: i32,
    pub title: String,
    pub category: Category,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for creating a playthrough
///
/// `game` is accepted as a raw string and missing fields default to empty, so both an unknown
/// and an absent value are reported as validation errors rather than deserialization failures.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreatePlaythroughDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub game: String,
    /// Defaults to today's date when omitted
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

/// Request body for updating a playthrough
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdatePlaythroughDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub game: String,
    /// Keeps the stored start date when omitted
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

/// Request body for logging an entry against a playthrough
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateEntryDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}
