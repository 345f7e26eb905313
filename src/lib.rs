//! Monthly shift roster generation for small care facilities.
//!
//! Produces, for every (staff, day) pair of a month, exactly one
//! assigned shift, together with a warning for every constraint the
//! solution fails to satisfy. Generation is a fixed sequence of greedy
//! heuristic passes with randomized tie-breaking; there is no search
//! and no backtracking, so unsatisfiable inputs yield a best-effort
//! schedule plus warnings rather than an error.
//!
//! # Modules
//!
//! - **`models`**: domain types: `Staff`, `ShiftType`, `ShiftTable`,
//!   `Settings`, `Warning`
//! - **`calendar`**: month length and weekday resolution
//! - **`coverage`**: checkpoint presence counting
//! - **`eligibility`**: placement admission predicates
//! - **`scoring`**: fairness counters
//! - **`generator`**: the multi-phase placement engine
//! - **`validation`**: post-hoc checks and the single-edit probe
//! - **`summary`**: per-day and per-staff rollups for display
//!
//! # Example
//!
//! ```
//! use careshift::{generate, OffRequests, Settings, Staff};
//!
//! let staff = vec![
//!     Staff::full("s1", "Sato").with_legacy_night(true).with_overtime(true),
//!     Staff::part("p1", "Kimura").with_hours("09:00", "15:00"),
//! ];
//! let result = generate(&staff, 2025, 4, &OffRequests::new(), &Settings::default());
//! assert_eq!(result.assignments.days(), 30);
//! ```
//!
//! # References
//!
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"
//! - Cheang et al. (2003), "Nurse rostering problems: a bibliographic survey"

pub mod calendar;
pub mod coverage;
pub mod eligibility;
pub mod generator;
pub mod models;
pub mod scoring;
pub mod summary;
pub mod validation;

pub use generator::{generate, generate_with_rng, GenerateResult, OffRequests};
pub use models::{
    NightCapability, Settings, ShiftTable, ShiftType, Staff, StaffKind, TimeSpan, Warning,
    WarningKind,
};
pub use summary::MonthlySummary;
pub use validation::{edit_warnings, validate};
