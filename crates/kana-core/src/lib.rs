pub mod resolve;
pub mod romaji;
pub mod segment;
pub mod settings;
