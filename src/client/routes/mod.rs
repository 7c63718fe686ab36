pub mod home;
pub mod not_found;
pub mod playthrough;

pub use home::Home;
pub use not_found::NotFound;
pub use playthrough::PlaythroughPage;
