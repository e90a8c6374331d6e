use std::collections::VecDeque;

/// Ordered, index-addressable, mutable sequence.
///
/// - Valid indices are `0..len()`.
/// - `swap` never changes the length; callers check bounds before calling it.
pub trait Sequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn swap(&mut self, a: usize, b: usize);
}

impl<T> Sequence for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> Sequence for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> Sequence for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap_first_last<S: Sequence + ?Sized>(seq: &mut S) {
        let last = seq.len() - 1;
        seq.swap(0, last);
    }

    #[test]
    fn impls_agree() {
        let mut slice_backing = [1, 2, 3];
        let slice: &mut [i32] = &mut slice_backing;
        swap_first_last(slice);
        assert_eq!(slice_backing, [3, 2, 1]);

        let mut array = [1, 2, 3];
        swap_first_last(&mut array);
        assert_eq!(array, [3, 2, 1]);

        let mut vec = vec![1, 2, 3];
        swap_first_last(&mut vec);
        assert_eq!(vec, [3, 2, 1]);

        let mut deque: VecDeque<i32> = [1, 2, 3].into_iter().collect();
        deque.rotate_left(1);
        swap_first_last(&mut deque);
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [1, 3, 2]);
    }

    #[test]
    fn empty_contract() {
        assert!(Sequence::is_empty(&Vec::<u8>::new()));
        assert!(Sequence::is_empty(&[0_u8; 0]));
        assert!(!Sequence::is_empty(&VecDeque::from([7])));
    }
}
