//! Types shared between the catalog frontend and the gateway, plus the pure
//! catalog engine (schema resolution, search, sort, column layout).

pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
