use core::fmt;

/// Capabilities shared by every container in this crate.
///
/// Equality and string rendering are provided through [`PartialEq`] and
/// [`fmt::Display`] on the concrete types.
pub trait Collection {
    fn len(&self) -> usize;

    /// Linked containers are unbounded and report `usize::MAX`.
    fn capacity(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

/// Writes `items` separated by `", "`. Writes nothing for an empty sequence.
pub(crate) fn fmt_joined<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut items = items.into_iter();
    if let Some(first) = items.next() {
        write!(f, "{first}")?;
        for item in items {
            write!(f, ", {item}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Joined<'a>(&'a [&'a str]);

    impl fmt::Display for Joined<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt_joined(f, self.0)
        }
    }

    #[test]
    fn t_fmt_joined() {
        assert_eq!(Joined(&[]).to_string(), "");
        assert_eq!(Joined(&["a"]).to_string(), "a");
        assert_eq!(Joined(&["a", "b", "c"]).to_string(), "a, b, c");
    }
}
