use std::fmt;

/// A set of days of a single month, stored as a u32-based bit array.
///
/// Only days `1..=31` can be part of the set, other values are ignored.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DaySet(u32);

impl DaySet {
    /// Create a set that does not include any day.
    pub const fn new() -> Self {
        Self(0)
    }

    fn bit(day: u32) -> Option<u32> {
        (1..=31).contains(&day).then(|| 1 << (day - 1))
    }

    /// Include a day in this set, return `false` if it is not a valid day of
    /// month.
    ///
    /// ```
    /// use work_calendar::DaySet;
    ///
    /// let mut days = DaySet::new();
    /// assert!(days.insert(2));
    /// assert!(days.insert(2));
    /// assert!(days.insert(31));
    /// assert!(!days.insert(0));
    /// assert!(!days.insert(32));
    /// assert_eq!(days.count(), 2);
    /// ```
    pub fn insert(&mut self, day: u32) -> bool {
        if let Some(bit) = Self::bit(day) {
            self.0 |= bit;
            true
        } else {
            false
        }
    }

    /// Check if this set includes the given day.
    pub fn contains(self, day: u32) -> bool {
        Self::bit(day).is_some_and(|bit| self.0 & bit != 0)
    }

    /// Iterate over the days of this set in ascending order.
    ///
    /// ```
    /// use work_calendar::DaySet;
    ///
    /// let days: DaySet = [18, 1, 7].into_iter().collect();
    /// assert_eq!(days.iter().collect::<Vec<_>>(), [1, 7, 18]);
    /// ```
    pub fn iter(self) -> impl Iterator<Item = u32> {
        let mut val = self.0;

        std::iter::from_fn(move || {
            if val != 0 {
                let day0 = val.trailing_zeros();
                val ^= 1 << day0;
                Some(day0 + 1)
            } else {
                None
            }
        })
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Days included in both sets.
    ///
    /// ```
    /// use work_calendar::DaySet;
    ///
    /// let a: DaySet = [1, 2, 3].into_iter().collect();
    /// let b: DaySet = [3, 4].into_iter().collect();
    /// assert_eq!(a.intersection(b).iter().collect::<Vec<_>>(), [3]);
    /// ```
    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }
}

impl FromIterator<u32> for DaySet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut res = Self::new();

        for day in iter {
            res.insert(day);
        }

        res
    }
}

impl fmt::Debug for DaySet {
    /// ```
    /// use work_calendar::DaySet;
    ///
    /// let days: DaySet = [26, 3].into_iter().collect();
    /// assert_eq!(format!("{days:?}"), "{03, 26}");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugDay(u32);

        impl fmt::Debug for DebugDay {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:02}", self.0)
            }
        }

        f.debug_set().entries(self.iter().map(DebugDay)).finish()
    }
}
