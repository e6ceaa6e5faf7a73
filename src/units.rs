/// A unit literal accepted by the scanner and the number of seconds it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub literal: &'static str,
    pub multiplier: u64,
}

pub const SECOND: u64 = 1;
pub const MINUTE: u64 = 60;
pub const HOUR: u64 = 3_600;
pub const DAY: u64 = 86_400;
/// Fixed 28-day month.
pub const MONTH: u64 = 2_419_200;
/// Fixed 365-day year.
pub const YEAR: u64 = 31_536_000;

/// Multiplier used for a quantity written without any unit, e.g. `"90"`.
///
/// Bare numbers count as minutes, so `"90"` is 5400 seconds.
pub const BARE_NUMBER: u64 = MINUTE;

/// Every literal the scanner understands. Lookups are case-sensitive.
pub static UNITS: [Unit; 12] = [
    Unit { literal: "s", multiplier: SECOND },
    Unit { literal: "seconds", multiplier: SECOND },
    Unit { literal: "m", multiplier: MINUTE },
    Unit { literal: "minutes", multiplier: MINUTE },
    Unit { literal: "h", multiplier: HOUR },
    Unit { literal: "hours", multiplier: HOUR },
    Unit { literal: "d", multiplier: DAY },
    Unit { literal: "days", multiplier: DAY },
    Unit { literal: "mo", multiplier: MONTH },
    Unit { literal: "months", multiplier: MONTH },
    Unit { literal: "y", multiplier: YEAR },
    Unit { literal: "years", multiplier: YEAR },
];

/// Looks up the multiplier for a unit literal such as `"h"` or `"days"`.
pub fn multiplier(literal: &str) -> Option<u64> {
    UNITS
        .iter()
        .find(|unit| unit.literal == literal)
        .map(|unit| unit.multiplier)
}
