//! Plain data types. [`Restaurant`] is the entity managed by the actor; the rest are
//! values it owns or exchanges.

pub mod order_item;
pub mod reservation;
pub mod restaurant;
pub mod table;

pub use order_item::*;
pub use reservation::*;
pub use restaurant::*;
pub use table::*;
