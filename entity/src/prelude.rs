pub use super::members::Entity as Members;
pub use super::roles::Entity as Roles;
pub use super::types::Entity as Types;
pub use super::words::Entity as Words;
