mod category;
mod deal;

pub use category::Category;
pub use deal::{Deal, PRIMARY_STORE_ID};
