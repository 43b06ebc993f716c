pub mod dim_search;
pub mod filler;
pub mod packer;
pub mod search;
pub mod waste;
