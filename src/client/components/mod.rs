pub mod entry_form;
pub mod entry_list;
pub mod navbar;
pub mod page;
pub mod playthrough_form;
pub mod playthrough_table;

pub use entry_form::EntryForm;
pub use entry_list::EntryList;
pub use navbar::Navbar;
pub use page::Page;
pub use playthrough_form::PlaythroughForm;
pub use playthrough_table::PlaythroughTable;
