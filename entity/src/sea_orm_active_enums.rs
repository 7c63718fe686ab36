use sea_orm::entity::prelude::*;

/// Pokémon title a playthrough covers, stored as a lowercase slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum Game {
    #[sea_orm(string_value = "red")]
    Red,
    #[sea_orm(string_value = "blue")]
    Blue,
    #[sea_orm(string_value = "yellow")]
    Yellow,
    #[sea_orm(string_value = "gold")]
    Gold,
    #[sea_orm(string_value = "silver")]
    Silver,
    #[sea_orm(string_value = "crystal")]
    Crystal,
    #[sea_orm(string_value = "ruby")]
    Ruby,
    #[sea_orm(string_value = "sapphire")]
    Sapphire,
    #[sea_orm(string_value = "emerald")]
    Emerald,
    #[sea_orm(string_value = "fire_red")]
    FireRed,
    #[sea_orm(string_value = "leaf_green")]
    LeafGreen,
    #[sea_orm(string_value = "diamond")]
    Diamond,
    #[sea_orm(string_value = "pearl")]
    Pearl,
    #[sea_orm(string_value = "platinum")]
    Platinum,
    #[sea_orm(string_value = "heart_gold")]
    HeartGold,
    #[sea_orm(string_value = "soul_silver")]
    SoulSilver,
    #[sea_orm(string_value = "black")]
    Black,
    #[sea_orm(string_value = "white")]
    White,
    #[sea_orm(string_value = "black2")]
    Black2,
    #[sea_orm(string_value = "white2")]
    White2,
    #[sea_orm(string_value = "x")]
    X,
    #[sea_orm(string_value = "y")]
    Y,
    #[sea_orm(string_value = "omega_ruby")]
    OmegaRuby,
    #[sea_orm(string_value = "alpha_sapphire")]
    AlphaSapphire,
    #[sea_orm(string_value = "sun")]
    Sun,
    #[sea_orm(string_value = "moon")]
    Moon,
    #[sea_orm(string_value = "ultra_sun")]
    UltraSun,
    #[sea_orm(string_value = "ultra_moon")]
    UltraMoon,
    #[sea_orm(string_value = "lets_go_pikachu")]
    LetsGoPikachu,
    #[sea_orm(string_value = "lets_go_eevee")]
    LetsGoEevee,
    #[sea_orm(string_value = "sword")]
    Sword,
    #[sea_orm(string_value = "shield")]
    Shield,
    #[sea_orm(string_value = "brilliant_diamond")]
    BrilliantDiamond,
    #[sea_orm(string_value = "shining_pearl")]
    ShiningPearl,
    #[sea_orm(string_value = "legends_arceus")]
    LegendsArceus,
    #[sea_orm(string_value = "scarlet")]
    Scarlet,
    #[sea_orm(string_value = "violet")]
    Violet,
    #[sea_orm(string_value = "legends_za")]
    LegendsZa,
}

/// Kind of event an entry records, stored as a lowercase slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum Category {
    #[sea_orm(string_value = "catch")]
    Catch,
    #[sea_orm(string_value = "badge")]
    Badge,
    #[sea_orm(string_value = "milestone")]
    Milestone,
    #[sea_orm(string_value = "battle")]
    Battle,
    #[sea_orm(string_value = "evolution")]
    Evolution,
    #[sea_orm(string_value = "trade")]
    Trade,
    #[sea_orm(string_value = "item")]
    Item,
    #[sea_orm(string_value = "note")]
    Note,
}
