pub mod scorigami;

pub use scorigami::{ScoreEntry, ScoreMatrix, Scorigami, ScorigamiBuilder};
