pub mod constants;
pub mod literal_utils;
