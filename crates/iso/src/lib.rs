//! # almanac-iso
//!
//! ISO-8601 text for seven temporal kinds, and the typed values built on it.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["text"] -->|"decode"| B["Record"]
//!     B -->|"encode"| A
//!     A -->|"Date::parse etc."| C["value newtypes"]
//!     D["Fields / parts / pairs"] -->|"from_fields"| C
//!     C --> E["Temporal"]
//!     A -->|"Temporal::detect"| E
//! ```
//!
//! A text is valid for a kind when `encode(decode(text)) == text`. Values
//! are only ever built through that check or through the field-record
//! constructors, which normalize and then encode.
//!
//! ## Quick Start
//!
//! ```
//! use almanac_iso::{Date, Duration, Kind, Temporal, is_valid};
//!
//! assert!(is_valid(Kind::Date, "2020-02-30"));
//! assert!(!is_valid(Kind::Duration, "P0D"));
//!
//! let date = Date::parse("2000-12-03T12:30:15.123Z").unwrap();
//! assert_eq!(date.as_str(), "2000-12-03");
//!
//! let d = Duration::from_pairs([("days", -2.0), ("hours", -12.0)]).unwrap();
//! assert_eq!(d.as_str(), "-P2DT12H");
//!
//! assert_eq!(Temporal::detect("--12-25").unwrap().kind(), Kind::MonthDay);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `kind` | The closed set of kinds and their field layouts |
//! | `fields` | Field records for values and durations |
//! | `codec` | `decode`, `encode`, `is_valid` |
//! | `value` | `Instant`, `Date`, `Time`, `DateTime`, `YearMonth`, `MonthDay`, `Duration` |
//! | `temporal` | `Temporal`, a value of runtime-known kind |
//! | `error` | Error types and the shared `ErrorKind` classification |

mod codec;
mod error;
mod fields;
mod kind;
mod parse;
mod print;
mod temporal;
mod value;

pub use codec::{Record, decode, encode, is_valid};
pub use error::{ErrorKind, IsoError, calendar_error_kind};
pub use fields::{DurationFields, Fields};
pub use kind::Kind;
pub use temporal::Temporal;
pub use value::{Date, DateTime, Duration, Instant, MonthDay, Time, YearMonth};

pub use almanac_calendar::Overflow;
