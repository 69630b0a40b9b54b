//! Model evaluation summaries: the embedded classification reports and the
//! raw-vs-preprocessed comparison derived from them.

pub mod comparison;
pub mod report;
