pub use super::chapter::Entity as Chapter;
pub use super::comic::Entity as Comic;
