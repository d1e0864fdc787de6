pub mod check;
pub mod interactive;
pub mod sources;
