pub use super::entry::Entity as Entry;
pub use super::playthrough::Entity as Playthrough;
