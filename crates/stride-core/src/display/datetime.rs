//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// Long calendar date for plan headers: `Monday, Jan 5`.
pub struct PlanDate<'a>(pub &'a Date);

impl fmt::Display for PlanDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%A, %b %-d"))
    }
}

/// Short date for goal deadlines: `Sat, May 2 2026`.
pub struct GoalDate<'a>(pub &'a Date);

impl fmt::Display for GoalDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a, %b %-d %Y"))
    }
}

/// Day of a week-ahead block: `Mon, Mar 2`.
pub struct BlockDate<'a>(pub &'a Date);

impl fmt::Display for BlockDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a, %b %-d"))
    }
}
