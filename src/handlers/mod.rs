pub mod autos;
pub mod health;
