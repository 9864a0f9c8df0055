//! Support code shared by the step definitions

pub mod world;

pub use world::TestWorld;
