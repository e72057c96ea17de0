use crate::collections::ContainerError;

/// Unwraps an element offered to an inserting operation.
///
/// Containers never store absent elements, so `None` is rejected with
/// [`ContainerError::InvalidArgument`].
#[inline]
pub fn present<T>(item: impl Into<Option<T>>) -> Result<T, ContainerError> {
    item.into().ok_or(ContainerError::InvalidArgument)
}

/// `pos` must address an existing element, i.e. `pos < len`.
#[inline]
pub fn element_position(pos: usize, len: usize) -> Result<usize, ContainerError> {
    if pos >= len {
        return Err(ContainerError::PositionOutOfRange { pos, len });
    }
    Ok(pos)
}

/// `pos` must address a gap between elements, i.e. `pos <= len`.
#[inline]
pub fn insert_position(pos: usize, len: usize) -> Result<usize, ContainerError> {
    if pos > len {
        return Err(ContainerError::PositionOutOfRange { pos, len });
    }
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_present() {
        assert_eq!(present::<i32>(3), Ok(3));
        assert_eq!(present::<&str>(Some("a")), Ok("a"));
        assert_eq!(present::<i32>(None), Err(ContainerError::InvalidArgument));
    }

    #[test]
    fn t_positions() {
        assert_eq!(element_position(0, 1), Ok(0));
        assert_eq!(
            element_position(1, 1),
            Err(ContainerError::PositionOutOfRange { pos: 1, len: 1 })
        );
        assert_eq!(
            element_position(0, 0),
            Err(ContainerError::PositionOutOfRange { pos: 0, len: 0 })
        );
        assert_eq!(insert_position(0, 0), Ok(0));
        assert_eq!(insert_position(3, 3), Ok(3));
        assert_eq!(
            insert_position(usize::MAX, 3),
            Err(ContainerError::PositionOutOfRange {
                pos: usize::MAX,
                len: 3
            })
        );
    }
}
