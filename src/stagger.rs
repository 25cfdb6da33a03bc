//! Linear stagger plans and skill levels
//!
//! A stagger applies the same change to an ordered batch, item `i` firing
//! `lead + i × interval` after the call. No easing, no physics.

use crate::scheduler::Scheduler;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::time::Duration;

/// Delay plan for one batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    /// Gap between consecutive items
    pub interval: Duration,
    /// Delay before the first item
    pub lead: Duration,
}

impl Stagger {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            lead: Duration::ZERO,
        }
    }

    pub fn with_lead(mut self, lead: Duration) -> Self {
        self.lead = lead;
        self
    }

    /// Delay for the item at `index`, saturating at `Duration::MAX`
    pub fn delay_for(&self, index: usize) -> Duration {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        self.lead.saturating_add(self.interval.saturating_mul(steps))
    }

    /// Schedule `apply` once per item, in index order
    ///
    /// Returns the number of items scheduled.
    pub fn run<T, F>(&self, scheduler: &dyn Scheduler, items: Vec<T>, apply: F) -> usize
    where
        T: 'static,
        F: Fn(T) + 'static,
    {
        let apply = Rc::new(apply);
        let count = items.len();
        for (index, item) in items.into_iter().enumerate() {
            let apply = apply.clone();
            scheduler.after(self.delay_for(index), Box::new(move || apply(item)));
        }
        count
    }
}

/// Skill percentage read from a `data-level` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MAX: u8 = 100;

    /// Build from a raw percentage, clamping to 100
    pub fn new(percent: u32) -> Self {
        Self(percent.min(Self::MAX as u32) as u8)
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    /// CSS width value, e.g. `85%`
    pub fn width_css(&self) -> String {
        format!("{}%", self.0)
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `data-level` value that is not a percentage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillLevelError(pub String);

impl fmt::Display for SkillLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid skill level {:?}", self.0)
    }
}

impl std::error::Error for SkillLevelError {}

impl FromStr for SkillLevel {
    type Err = SkillLevelError;

    /// Accepts `85`, `85%` and `85.5` (fractions round to nearest)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
        let value: f64 = digits
            .parse()
            .map_err(|_| SkillLevelError(s.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(SkillLevelError(s.to_string()));
        }
        Ok(Self::new(value.round() as u32))
    }
}

/// `data-width` a `.skill-fill` carries for its bar's `data-level`
///
/// The cascade later reads it back and applies [`SkillLevel::width_css`].
pub fn fill_data_width(data_level: &str) -> Result<String, SkillLevelError> {
    data_level.parse::<SkillLevel>().map(|level| level.to_string())
}
