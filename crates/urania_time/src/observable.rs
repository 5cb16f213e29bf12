//! Mutable date with synchronous change notification.
//!
//! [`ObservableJulianDate`] owns a [`JulianDate`] and an ordered list of
//! listeners. Every successful set recomputes the date, then calls each
//! listener once, in subscription order, with the old and new values.
//! Listeners only see shared references, so they cannot mutate the date
//! while a notification is in flight.
//!
//! [`Tracked`] is the pull-side counterpart: a derived value remembered
//! together with the date it was computed for.

use crate::calendar::CalendarDate;
use crate::error::TimeError;
use crate::julian::JulianDate;

/// Handle returned by [`ObservableJulianDate::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&JulianDate, &JulianDate)>;

/// A `JulianDate` that notifies subscribers when it changes.
pub struct ObservableJulianDate {
    date: JulianDate,
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl ObservableJulianDate {
    /// Wrap `date` with no listeners.
    pub fn new(date: JulianDate) -> Self {
        Self {
            date,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current date.
    pub fn date(&self) -> &JulianDate {
        &self.date
    }

    /// Register a listener called with `(old, new)` after each change.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&JulianDate, &JulianDate) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Replace the date and notify listeners.
    pub fn set(&mut self, date: JulianDate) {
        let old = std::mem::replace(&mut self.date, date);
        log::debug!(
            "date changed {} -> {}, notifying {} listener(s)",
            old.jd(),
            self.date.jd(),
            self.listeners.len()
        );
        for (_, listener) in &mut self.listeners {
            listener(&old, &self.date);
        }
    }

    /// Set from a Julian Day Number. Listeners are not called on error.
    pub fn set_jd(&mut self, jd: f64) -> Result<(), TimeError> {
        let date = JulianDate::from_jd(jd)?;
        self.set(date);
        Ok(())
    }

    /// Set from a calendar date. Listeners are not called on error.
    pub fn set_calendar(&mut self, calendar: CalendarDate) -> Result<(), TimeError> {
        let date = JulianDate::from_calendar(calendar)?;
        self.set(date);
        Ok(())
    }

    /// Advance by `days` (negative moves backwards).
    pub fn advance_days(&mut self, days: f64) -> Result<(), TimeError> {
        let date = self.date.offset_days(days)?;
        self.set(date);
        Ok(())
    }
}

impl std::fmt::Debug for ObservableJulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableJulianDate")
            .field("date", &self.date)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// A value derived from a date, recomputed only when the date changes.
pub struct Tracked<T> {
    compute: Box<dyn Fn(&JulianDate) -> T>,
    date: JulianDate,
    value: T,
}

impl<T> Tracked<T> {
    pub fn new<F>(date: &JulianDate, compute: F) -> Self
    where
        F: Fn(&JulianDate) -> T + 'static,
    {
        let value = compute(date);
        Self {
            compute: Box::new(compute),
            date: *date,
            value,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Date the current value was computed for.
    pub fn date(&self) -> &JulianDate {
        &self.date
    }

    /// Recompute if `date` differs from the last one. Returns whether it did.
    pub fn refresh(&mut self, date: &JulianDate) -> bool {
        if date.jd() == self.date.jd() {
            return false;
        }
        self.value = (self.compute)(date);
        self.date = *date;
        true
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracked")
            .field("date", &self.date)
            .field("value", &self.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    #[test]
    fn listeners_fire_in_order_with_old_and_new() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut date = ObservableJulianDate::new(JulianDate::j2000());

        let first = Rc::clone(&log);
        date.subscribe(move |old, new| first.borrow_mut().push(("first", old.jd(), new.jd())));
        let second = Rc::clone(&log);
        date.subscribe(move |old, new| second.borrow_mut().push(("second", old.jd(), new.jd())));

        date.set_jd(2_451_546.0).unwrap();

        let seen = log.borrow();
        assert_eq!(
            *seen,
            vec![
                ("first", 2_451_545.0, 2_451_546.0),
                ("second", 2_451_545.0, 2_451_546.0),
            ]
        );
        assert_eq!(date.date().jd(), 2_451_546.0);
    }

    #[test]
    fn listener_sees_recomputed_calendar() {
        let seen = Rc::new(Cell::new((0, 0, 0)));
        let sink = Rc::clone(&seen);
        let mut date = ObservableJulianDate::new(JulianDate::j2000());
        date.subscribe(move |_, new| {
            let c = new.calendar();
            sink.set((c.year, c.month, c.day));
        });
        date.set_calendar(CalendarDate::from_ymd(1987, 4, 10)).unwrap();
        assert_eq!(seen.get(), (1987, 4, 10));
        assert_eq!(date.date().jd(), 2_446_895.5);
    }

    #[test]
    fn invalid_set_does_not_notify() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut date = ObservableJulianDate::new(JulianDate::j2000());
        date.subscribe(move |_, _| counter.set(counter.get() + 1));

        assert!(date.set_jd(f64::NAN).is_err());
        assert!(date.set_calendar(CalendarDate::from_ymd(2000, 2, 30)).is_err());
        assert_eq!(calls.get(), 0);
        assert_eq!(date.date().jd(), 2_451_545.0);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut date = ObservableJulianDate::new(JulianDate::j2000());
        let id = date.subscribe(move |_, _| counter.set(counter.get() + 1));

        date.advance_days(1.0).unwrap();
        assert!(date.unsubscribe(id));
        assert!(!date.unsubscribe(id));
        date.advance_days(1.0).unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(date.listener_count(), 0);
        assert_eq!(date.date().jd(), 2_451_547.0);
    }

    #[test]
    fn tracked_recomputes_only_on_change() {
        let evaluations = Rc::new(Cell::new(0));
        let counter = Rc::clone(&evaluations);
        let start = JulianDate::j2000();
        let mut days = Tracked::new(&start, move |d| {
            counter.set(counter.get() + 1);
            d.jd() - 2_451_545.0
        });
        assert_eq!(*days.value(), 0.0);

        assert!(!days.refresh(&start));
        let later = start.offset_days(10.0).unwrap();
        assert!(days.refresh(&later));
        assert_eq!(*days.value(), 10.0);
        assert_eq!(days.date().jd(), later.jd());
        assert_eq!(evaluations.get(), 2);
    }

    #[test]
    fn tracked_driven_by_listener() {
        let start = JulianDate::j2000();
        let tracked = Rc::new(RefCell::new(Tracked::new(&start, |d| d.year())));
        let mut date = ObservableJulianDate::new(start);
        let sink = Rc::clone(&tracked);
        date.subscribe(move |_, new| {
            sink.borrow_mut().refresh(new);
        });

        date.set(JulianDate::from_ymd(1987, 4, 10).unwrap());
        assert_eq!(*tracked.borrow().value(), 1987);
    }
}
