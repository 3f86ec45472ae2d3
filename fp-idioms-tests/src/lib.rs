pub mod capture;
pub mod lazy;
pub mod list;
pub mod maybe;
pub mod shape;
