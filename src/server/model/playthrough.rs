//! Conversions between database models and API DTOs.
//!
//! The entity crate owns the database enums while the shared `model` module owns the wire enums
//! used by the browser client; the two mirror each other member for member.

use entity::sea_orm_active_enums as db_enum;

use crate::{
    model::playthrough::{Category, EntryDto, Game, PlaythroughDto},
    server::model::db::{EntryModel, PlaythroughModel},
};

impl From<db_enum::Game> for Game {
    fn from(value: db_enum::Game) -> Self {
        match value {
            db_enum::Game::Red => Game::Red,
            db_enum::Game::Blue => Game::Blue,
            db_enum::Game::Yellow => Game::Yellow,
            db_enum::Game::Gold => Game::Gold,
            db_enum::Game::Silver => Game::Silver,
            db_enum::Game::Crystal => Game::Crystal,
            db_enum::Game::Ruby => Game::Ruby,
            db_enum::Game::Sapphire => Game::Sapphire,
            db_enum::Game::Emerald => Game::Emerald,
            db_enum::Game::FireRed => Game::FireRed,
            db_enum::Game::LeafGreen => Game::LeafGreen,
            db_enum::Game::Diamond => Game::Diamond,
            db_enum::Game::Pearl => Game::Pearl,
            db_enum::Game::Platinum => Game::Platinum,
            db_enum::Game::HeartGold => Game::HeartGold,
            db_enum::Game::SoulSilver => Game::SoulSilver,
            db_enum::Game::Black => Game::Black,
            db_enum::Game::White => Game::White,
            db_enum::Game::Black2 => Game::Black2,
            db_enum::Game::White2 => Game::White2,
            db_enum::Game::X => Game::X,
            db_enum::Game::Y => Game::Y,
            db_enum::Game::OmegaRuby => Game::OmegaRuby,
            db_enum::Game::AlphaSapphire => Game::AlphaSapphire,
            db_enum::Game::Sun => Game::Sun,
            db_enum::Game::Moon => Game::Moon,
            db_enum::Game::UltraSun => Game::UltraSun,
            db_enum::Game::UltraMoon => Game::UltraMoon,
            db_enum::Game::LetsGoPikachu => Game::LetsGoPikachu,
            db_enum::Game::LetsGoEevee => Game::LetsGoEevee,
            db_enum::Game::Sword => Game::Sword,
            db_enum::Game::Shield => Game::Shield,
            db_enum::Game::BrilliantDiamond => Game::BrilliantDiamond,
            db_enum::Game::ShiningPearl => Game::ShiningPearl,
            db_enum::Game::LegendsArceus => Game::LegendsArceus,
            db_enum::Game::Scarlet => Game::Scarlet,
            db_enum::Game::Violet => Game::Violet,
            db_enum::Game::LegendsZa => Game::LegendsZa,
        }
    }
}

impl From<Game> for db_enum::Game {
    fn from(value: Game) -> Self {
        match value {
            Game::Red => db_enum::Game::Red,
            Game::Blue => db_enum::Game::Blue,
            Game::Yellow => db_enum::Game::Yellow,
            Game::Gold => db_enum::Game::Gold,
            Game::Silver => db_enum::Game::Silver,
            Game::Crystal => db_enum::Game::Crystal,
            Game::Ruby => db_enum::Game::Ruby,
            Game::Sapphire => db_enum::Game::Sapphire,
            Game::Emerald => db_enum::Game::Emerald,
            Game::FireRed => db_enum::Game::FireRed,
            Game::LeafGreen => db_enum::Game::LeafGreen,
            Game::Diamond => db_enum::Game::Diamond,
            Game::Pearl => db_enum::Game::Pearl,
            Game::Platinum => db_enum::Game::Platinum,
            Game::HeartGold => db_enum::Game::HeartGold,
            Game::SoulSilver => db_enum::Game::SoulSilver,
            Game::Black => db_enum::Game::Black,
            Game::White => db_enum::Game::White,
            Game::Black2 => db_enum::Game::Black2,
            Game::White2 => db_enum::Game::White2,
            Game::X => db_enum::Game::X,
            Game::Y => db_enum::Game::Y,
            Game::OmegaRuby => db_enum::Game::OmegaRuby,
            Game::AlphaSapphire => db_enum::Game::AlphaSapphire,
            Game::Sun => db_enum::Game::Sun,
            Game::Moon => db_enum::Game::Moon,
            Game::UltraSun => db_enum::Game::UltraSun,
            Game::UltraMoon => db_enum::Game::UltraMoon,
            Game::LetsGoPikachu => db_enum::Game::LetsGoPikachu,
            Game::LetsGoEevee => db_enum::Game::LetsGoEevee,
            Game::Sword => db_enum::Game::Sword,
            Game::Shield => db_enum::Game::Shield,
            Game::BrilliantDiamond => db_enum::Game::BrilliantDiamond,
            Game::ShiningPearl => db_enum::Game::ShiningPearl,
            Game::LegendsArceus => db_enum::Game::LegendsArceus,
            Game::Scarlet => db_enum::Game::Scarlet,
            Game::Violet => db_enum::Game::Violet,
            Game::LegendsZa => db_enum::Game::LegendsZa,
        }
    }
}

impl From<db_enum::Category> for Category {
    fn from(value: db_enum::Category) -> Self {
        match value {
            db_enum::Category::Catch => Category::Catch,
            db_enum::Category::Badge => Category::Badge,
            db_enum::Category::Milestone => Category::Milestone,
            db_enum::Category::Battle => Category::Battle,
            db_enum::Category::Evolution => Category::Evolution,
            db_enum::Category::Trade => Category::Trade,
            db_enum::Category::Item => Category::Item,
            db_enum::Category::Note => Category::Note,
        }
    }
}

impl From<Category> for db_enum::Category {
    fn from(value: Category) -> Self {
        match value {
            Category::Catch => db_enum::Category::Catch,
            Category::Badge => db_enum::Category::Badge,
            Category::Milestone => db_enum::Category::Milestone,
            Category::Battle => db_enum::Category::Battle,
            Category::Evolution => db_enum::Category::Evolution,
            Category::Trade => db_enum::Category::Trade,
            Category::Item => db_enum::Category::Item,
            Category::Note => db_enum::Category::Note,
        }
    }
}

impl From<PlaythroughModel> for PlaythroughDto {
    fn from(model: PlaythroughModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            game: model.game.into(),
            start_date: model.start_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<EntryModel> for EntryDto {
    fn from(model: EntryModel) -> Self {
        Self {
            id: model.id,
            playthrough_id: model.playthrough_id,
            title: model.title,
            category: model.category.into(),
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
