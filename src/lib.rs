pub mod errors;
pub mod io;
pub mod aligner;
pub mod pairwise;

pub use aligner::{align, AlignmentMode, AlignmentResult};
