pub mod resolve;
pub mod siblings;

pub use resolve::{resolve_all, resolve_first};
pub use siblings::{Direction, all_until, nearest};
