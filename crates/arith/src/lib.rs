//! # almanac-arith
//!
//! Calendar-correct arithmetic over the values of `almanac-iso`.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Duration"] -->|"total_millis(anchor)"| B["millisecond span"]
//!     B -->|"balance"| A
//!     C["Temporal + Duration"] -->|"add / subtract"| D["Temporal"]
//!     E["Temporal, Temporal"] -->|"difference"| B
//!     B -->|"round_span"| A
//!     A -->|"total"| F["f64"]
//! ```
//!
//! Months and years have no fixed length. Every operation that converts
//! between them and days takes a [`RelativeTo`] anchor and counts whole
//! units by jumping from that anchor, so balancing a difference gives back
//! exactly what addition consumed.
//!
//! ## Quick Start
//!
//! ```
//! use almanac_arith::{AddOptions, DifferenceOptions, Overflow, add, difference};
//! use almanac_iso::{Duration, Temporal};
//!
//! let start = Temporal::detect("2000-12-03T00:00:00.000Z").unwrap();
//! let step = Duration::parse("PT12H30M15.123S").unwrap();
//! let end = add(&start, &step, &AddOptions::new()).unwrap();
//! assert_eq!(end.as_str(), "2000-12-03T12:30:15.123Z");
//! assert_eq!(difference(&start, &end, &DifferenceOptions::new()).unwrap(), step);
//!
//! let jan31 = Temporal::detect("2020-01-31").unwrap();
//! let month = Duration::parse("P1M").unwrap();
//! let strict = AddOptions::new().with_overflow(Overflow::Reject);
//! assert!(add(&jan31, &month, &strict).is_err());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `unit` | Duration units, coarsest to finest |
//! | `mode` | Rounding modes |
//! | `increment` | Rounding increment validation |
//! | `options` | Option builders for every operation |
//! | `anchor` | `RelativeTo` reference points |
//! | `balance` | Balancing and anchor stepping |
//! | `add` | Adding durations to values |
//! | `difference` | Differences and comparison |
//! | `round` | Rounding values and durations |
//! | `total` | Fractional unit counts |
//! | `error` | Error types |

mod add;
mod anchor;
mod balance;
mod difference;
mod error;
mod increment;
mod mode;
mod options;
mod round;
mod total;
mod unit;

pub use add::{add, subtract};
pub use anchor::RelativeTo;
pub use balance::balance;
pub use difference::{compare, difference};
pub use error::ArithError;
pub use mode::RoundingMode;
pub use options::{AddOptions, CompareOptions, DifferenceOptions, RoundOptions, TotalOptions};
pub use round::{round, round_duration};
pub use total::total;
pub use unit::Unit;

pub use almanac_calendar::Overflow;
pub use almanac_iso::ErrorKind;
