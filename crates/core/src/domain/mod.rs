pub mod contract;
pub mod deal;
pub mod verdict;
