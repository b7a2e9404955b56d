//! OrderSource port - abstraction for loading the order feed
//!
//! This trait allows the domain layer to obtain orders without knowing
//! where they come from. Implemented by the infrastructure layer.

use crate::domain::entities::Order;
use crate::error::BoxpickResult;

/// Abstract source of customer orders.
///
/// The feed is loaded once at process start and treated as read-only for
/// the process lifetime; the domain only needs a full linear scan.
pub trait OrderSource {
    /// Load every order, preserving source order.
    fn load(&self) -> BoxpickResult<Vec<Order>>;
}
