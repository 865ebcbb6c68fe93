pub mod envelope;

pub use envelope::{DEFAULT_MARGIN, WORLD_MERC_MAX, WORLD_MERC_MIN};
