//! Wire types shared by the back-office client.
//!
//! Every struct mirrors a JSON shape of the shop REST API. Client-side
//! validation lives next to the payload it checks so forms and tests use the
//! same rules.

pub mod dashboards;
pub mod domain;
pub mod system;
