pub mod constant;
pub mod extra_metas;
pub mod token_2022;
pub mod utils;

pub use constant::*;
pub use utils::*;
