pub mod chapter;
pub mod comic;
pub mod prelude;
