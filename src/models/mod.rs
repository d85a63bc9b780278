pub mod biomarker;

pub use biomarker::*;
