use crate::error::{Result, SequenceError};
use crate::sequence::{move_down_present, move_up_present, swap_present};
use crate::traits::Sequence;

/// Borrowing handle that exposes the reordering helpers as methods.
///
/// The wrapped sequence stays owned by the caller; dropping the handle (or
/// calling [`Reorder::into_inner`]) gives the borrow back.
pub struct Reorder<'a, S: Sequence + ?Sized> {
    seq: &'a mut S,
}

impl<'a, S: Sequence + ?Sized> Reorder<'a, S> {
    pub fn new(seq: &'a mut S) -> Self {
        Self { seq }
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    pub fn require_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(SequenceError::Empty)
        } else {
            Ok(())
        }
    }

    pub fn swap(&mut self, idx0: usize, idx1: usize) -> Result<&mut Self> {
        swap_present(self.seq, idx0, idx1)?;
        Ok(self)
    }

    pub fn move_up(&mut self, idx: usize) -> Result<&mut Self> {
        move_up_present(self.seq, idx)?;
        Ok(self)
    }

    pub fn move_down(&mut self, idx: usize) -> Result<&mut Self> {
        move_down_present(self.seq, idx)?;
        Ok(self)
    }

    pub fn as_inner(&self) -> &S {
        &*self.seq
    }

    pub fn into_inner(self) -> &'a mut S {
        self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_reordering() {
        let mut items = vec!["first", "second", "third", "fourth"];
        Reorder::new(&mut items)
            .move_down(0)
            .and_then(|r| r.move_down(1))
            .and_then(|r| r.swap(3, 0))
            .unwrap();
        assert_eq!(items, ["fourth", "third", "first", "second"]);
    }

    #[test]
    fn failed_step_keeps_sequence() {
        let mut items = [1, 2, 3];
        let mut handle = Reorder::new(&mut items);
        assert_eq!(
            handle.move_up(3).err(),
            Some(SequenceError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(handle.as_inner(), &[1, 2, 3]);
        handle.move_up(0).unwrap().move_down(2).unwrap();
        assert_eq!(handle.into_inner(), &mut [1, 2, 3]);
    }

    #[test]
    fn emptiness() {
        let mut empty: Vec<u8> = Vec::new();
        let handle = Reorder::new(&mut empty);
        assert_eq!(handle.len(), 0);
        assert!(handle.is_empty());
        assert_eq!(handle.require_not_empty(), Err(SequenceError::Empty));

        let mut one = vec![9_u8];
        let handle = Reorder::new(&mut one);
        assert!(handle.is_not_empty());
        assert_eq!(handle.require_not_empty(), Ok(()));
    }
}
