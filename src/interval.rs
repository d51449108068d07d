/// An open interval of allowed values. A missing end means "no bound" on that side, which
/// stands in for the type's extrema without needing sentinel values (there is no string that
/// is smaller than every other string, for instance).
#[derive(Debug)]
pub(crate) struct Interval<'a, T> {
    pub(crate) lower: Option<&'a T>,
    pub(crate) upper: Option<&'a T>,
}

// Manual impls so `T` doesn't need to be `Copy`.
impl<'a, T> Clone for Interval<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T> Copy for Interval<'a, T> {}

impl<'a, T> Interval<'a, T> {
    pub(crate) fn unbounded() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }

    pub(crate) fn new(lower: Option<&'a T>, upper: Option<&'a T>) -> Self {
        Self { lower, upper }
    }

    /// The part of this interval below `split`.
    pub(crate) fn below(self, split: &'a T) -> Self {
        Self {
            upper: Some(split),
            ..self
        }
    }

    /// The part of this interval above `split`.
    pub(crate) fn above(self, split: &'a T) -> Self {
        Self {
            lower: Some(split),
            ..self
        }
    }

    /// Both ends are exclusive.
    pub(crate) fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.lower.map_or(true, |lower| value > lower)
            && self.upper.map_or(true, |upper| value < upper)
    }

    /// Whether no value at all can fall inside.
    pub(crate) fn is_empty(&self) -> bool
    where
        T: Ord,
    {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) => lower >= upper,
            _ => false,
        }
    }
}
