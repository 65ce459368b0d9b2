mod fetch_sequence;

pub use fetch_sequence::{FetchOutcome, FetchReport, FetchSequenceUseCase};
