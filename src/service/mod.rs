//! Business logic layer between controllers and repositories.

pub mod chapter;
pub mod comic;

#[cfg(test)]
mod test;
