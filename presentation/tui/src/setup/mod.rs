pub mod dependency_injection;
pub mod terminal;
