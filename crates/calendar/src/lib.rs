//! # almanac-calendar
//!
//! Pure day math for the proleptic Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["is_leap / days_in_month"] --> B["CivilDate"]
//!     B -->|".to_epoch_days()"| C["epoch day line"]
//!     C -->|"CivilDate::from_epoch_days()"| B
//!     B -->|".shift_year_month()"| B
//!     B --> D["CivilDateTime"]
//!     D -->|".to_epoch_millis()"| E["epoch millisecond line"]
//!     F["DateDelta"] -->|"total_days(anchor)"| C
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use almanac_calendar::{CivilDate, DateDelta, Overflow, days_in_month, is_leap, total_days};
//!
//! assert!(is_leap(2020));
//! assert_eq!(days_in_month(2, true).unwrap(), 29);
//!
//! let jan31 = CivilDate::new(2020, 1, 31).unwrap();
//! let feb = jan31.shift_year_month(0, 1, Overflow::Constrain).unwrap();
//! assert_eq!(feb, CivilDate::new(2020, 2, 29).unwrap());
//!
//! let days = total_days(&DateDelta::years_months(1, 0), Some(&jan31)).unwrap();
//! assert_eq!(days, 366);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Leap-year rule, month lengths, year/month carry |
//! | `date` | `CivilDate` and the epoch-day conversion |
//! | `datetime` | `CivilDateTime`, millisecond line, clock carry |
//! | `overflow` | Constrain/reject policy for non-existent days |
//! | `count` | `total_days` for calendar deltas |
//! | `error` | Error types |

mod count;
mod date;
mod datetime;
mod error;
mod month;
mod overflow;

pub use count::{DateDelta, total_days};
pub use date::CivilDate;
pub use datetime::{
    CivilDateTime, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND,
    clock_fields,
};
pub use error::CalendarError;
pub use month::{balance_year_month, days_in_month, days_in_year, days_in_year_month, is_leap};
pub use overflow::Overflow;

/// Largest absolute year the epoch arithmetic accepts.
///
/// Far beyond what ISO-8601 text can express; it only keeps intermediate
/// day and millisecond counts away from integer overflow.
pub const MAX_YEAR: i64 = 999_999_999;
