pub mod audience;
pub mod hero;
