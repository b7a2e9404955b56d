//! Domain services
//!
//! Pure transforms over the entities. Services perform no I/O; they are
//! invoked with already-loaded data.

mod aggregator;

pub use aggregator::{build_pick_list, order_dates, PickList, PickListEntry};
