pub mod gallery;
pub mod promos;
