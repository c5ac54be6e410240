//! Helpers shared by the router and the frontends

pub mod cidr;
