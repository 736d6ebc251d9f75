pub mod error_page;
pub mod login_modal;
pub mod navbar;
pub mod page;
pub mod pagination;
pub mod word_table;

pub use error_page::ErrorPage;
pub use login_modal::LoginModal;
pub use navbar::Navbar;
pub use page::Page;
pub use pagination::Pagination;
pub use word_table::WordTable;
