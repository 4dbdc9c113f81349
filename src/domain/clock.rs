/// Source of "today" for newly appended thoughts
///
/// The store asks a clock for the current date instead of reading the system
/// time directly, so tests can simulate appends across several days.

use std::cell::Cell;
use chrono::{Local, NaiveDate};

/// Something that knows what day it is
pub trait Clock {
    /// The current calendar date
    fn today(&self) -> NaiveDate;
}

/// The local system clock, without any timezone normalisation
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a date that can be moved by hand
#[derive(Debug, Clone)]
pub struct FixedClock {
    date: Cell<NaiveDate>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date: Cell::new(date) }
    }

    /// Move the clock to another day
    pub fn set(&self, date: NaiveDate) {
        self.date.set(date);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
