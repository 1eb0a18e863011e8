mod data_api;
pub use data_api::LaunchDataApi;

mod launch_api;
pub use launch_api::LaunchUserApi;

pub(crate) mod utils;
