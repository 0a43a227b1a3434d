pub mod steam;
pub mod store;

pub use steam::*;
pub use store::*;
