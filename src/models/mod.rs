pub mod auto;

pub use auto::{Auto, NewAuto, UpdateAuto};
