pub mod data_output;
pub mod declarations;
pub mod ops;
pub mod params;
pub mod units;
pub mod utils;
