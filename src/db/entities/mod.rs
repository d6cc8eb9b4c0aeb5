//! Database entities

pub mod animal;
pub mod book;
pub mod page;
pub mod static_file;

pub use animal::Entity as Animal;
pub use book::Entity as Book;
pub use page::Entity as Page;
pub use static_file::Entity as StaticFile;
