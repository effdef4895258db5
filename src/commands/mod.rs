/// The single command: validate, count, page through, aggregate, print.
pub mod names;

pub use names::run;
