//! Domain layer - entities, ports, and pure services
//!
//! Nothing in this module performs I/O or touches the terminal. The
//! aggregation core lives in `services`; `ports` defines the seams the
//! infrastructure layer plugs into.

pub mod entities;
pub mod ports;
pub mod services;
