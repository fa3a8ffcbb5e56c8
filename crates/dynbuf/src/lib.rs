//! # DYNBUF Driver
//!
//! Executes scripted operation sequences against a [`DynamicArray`] and
//! prints one result line per operation.
//!
//! ## Output Format
//!
//! | Operation | Line |
//! |-----------|------|
//! | `get`, `pop`, `pop_at` | the element |
//! | `len`, `index_of`, `count` | the number |
//! | `print` | the array, e.g. `[1, 2, 3]` |
//! | everything else | `ok` |
//! | any failure | `error(<code>): <message>` |
//!
//! Array failures are recovered and counted; only output errors abort a run.
//!
//! ## Example
//!
//! ```rust
//! use dynbuf::{run_script, Script};
//!
//! let script = Script::from_toml_str(r#"
//!     initial = [1, 2, 3]
//!     [[ops]]
//!     op = "append"
//!     value = 4
//!     [[ops]]
//!     op = "print"
//! "#)?;
//!
//! let mut out = Vec::new();
//! let report = run_script(&script, &mut out)?;
//! assert_eq!(String::from_utf8_lossy(&out), "ok\n[1, 2, 3, 4]\n");
//! assert_eq!(report.failed, 0);
//! # Ok::<(), dynbuf::DriverError>(())
//! ```
//!
//! [`DynamicArray`]: dynbuf_core::DynamicArray

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod runner;
pub mod script;

pub use error::{DriverError, DriverResult};
pub use runner::{run_script, RunReport};
pub use script::{Op, Script};
