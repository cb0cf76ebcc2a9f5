//! Pet store endpoints as [`RequestSpec`](crate::request::RequestSpec)s, one
//! function per operation.

pub mod pet;
pub mod store;
pub mod user;
