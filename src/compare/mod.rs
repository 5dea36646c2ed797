//! Winner selection between two models on a dataset

mod winner;


pub use winner::{false_positive_counts, select_winner, Winner};
