//! Collision-resistant identifiers for horizontal scaling.
//!
//! A CUID is a lowercase base36 string such as `cloyw3v280000113q0016qglj`:
//!
//! ```text
//! c loyw3v28 0000 113q 0016 qglj
//! | |        |    |    |    |
//! | |        |    |    |    second random block
//! | |        |    |    first random block
//! | |        |    fingerprint (pid + hostname)
//! | |        process-wide counter
//! | milliseconds since the unix epoch
//! prefix
//! ```
//!
//! Identifiers sort roughly by creation time, need no coordination between
//! machines, and are safe in URLs and as HTML element ids. They are **not**
//! unpredictable: the random blocks come from a non-cryptographic generator
//! and must never be used as secrets.
//!
//! ```
//! let id = cuid::cuid();
//! assert!(cuid::is_cuid(&id));
//!
//! let short = cuid::slug();
//! assert!(cuid::is_slug(&short));
//! ```

pub mod base36;
mod counter;
mod error;
mod fingerprint;
mod generator;
mod rand;
mod time;
mod validate;

pub use crate::counter::*;
pub use crate::error::*;
pub use crate::fingerprint::*;
pub use crate::generator::*;
pub use crate::rand::*;
pub use crate::time::*;
pub use crate::validate::*;
