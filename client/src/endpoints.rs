//! The routing table: one `GaiaClient` method per REST route, grouped by
//! module, plus the [`Endpoint`] trait they are expressed with.

pub mod bank;
pub mod common_types;
pub mod distribution;
pub mod endpoint;
pub mod gov;
pub mod keys;
pub mod slashing;
pub mod staking;
pub mod tendermint;
pub mod version;

pub use common_types::*;
pub use endpoint::{Endpoint, Route, Submit};
