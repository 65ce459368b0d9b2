#![allow(dead_code)]

mod mock_ports;

#[allow(unused_imports)]
pub use mock_ports::{MockCacheStatsPort, MockValueFetcher};
