pub mod context;
pub mod params;
