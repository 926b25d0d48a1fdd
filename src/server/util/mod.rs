pub mod params;
pub mod parse;
