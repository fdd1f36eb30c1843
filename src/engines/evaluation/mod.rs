pub mod fitness;

pub use fitness::{autocorrelation, evaluate, peak_to_sidelobe};
