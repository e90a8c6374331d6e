//! Emptiness checks and in-place reordering over a caller-owned [`Sequence`].
//!
//! Absence is `None`. The element type is checked by the `S: Sequence` bound,
//! so there is no runtime type check here; see [`crate::dynamic`] for untyped
//! host values.

use log::{debug, trace};

use crate::error::{Result, SequenceError};
use crate::traits::Sequence;

pub fn is_absent<S: ?Sized>(seq: Option<&S>) -> bool {
    seq.is_none()
}

pub fn is_empty<S: Sequence + ?Sized>(seq: Option<&S>) -> bool {
    match seq {
        None => true,
        Some(seq) => seq.is_empty(),
    }
}

pub fn is_not_empty<S: Sequence + ?Sized>(seq: Option<&S>) -> bool {
    !is_empty(seq)
}

/// Unwraps `seq`, failing with [`SequenceError::Absent`] when it is `None`.
///
/// Works for both `Option<&S>` and `Option<&mut S>`.
pub fn require_not_absent<R>(seq: Option<R>) -> Result<R> {
    seq.ok_or_else(|| {
        debug!("rejected absent sequence");
        SequenceError::Absent
    })
}

/// Fails with [`SequenceError::Empty`] for an absent or zero-length sequence.
pub fn require_not_empty<S: Sequence + ?Sized>(seq: Option<&S>) -> Result<&S> {
    match seq {
        Some(seq) if !seq.is_empty() => Ok(seq),
        _ => {
            debug!("rejected empty sequence");
            Err(SequenceError::Empty)
        }
    }
}

/// Exchanges the elements at `idx0` and `idx1` and hands the sequence back.
pub fn swap<S: Sequence + ?Sized>(
    seq: Option<&mut S>,
    idx0: usize,
    idx1: usize,
) -> Result<&mut S> {
    let seq = require_not_absent(seq)?;
    swap_present(seq, idx0, idx1)?;
    Ok(seq)
}

/// Moves the element at `idx` one position towards the front.
///
/// Index `0` is left where it is.
pub fn move_up<S: Sequence + ?Sized>(seq: Option<&mut S>, idx: usize) -> Result<()> {
    if idx == 0 {
        return Ok(());
    }
    swap(seq, idx, idx - 1).map(|_| ())
}

/// Moves the element at `idx` one position towards the back.
///
/// The last index is left where it is.
pub fn move_down<S: Sequence + ?Sized>(seq: Option<&mut S>, idx: usize) -> Result<()> {
    move_down_present(require_not_absent(seq)?, idx)
}

#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        debug!("rejected index {index} for sequence of length {len}");
        Err(SequenceError::IndexOutOfRange { index, len })
    }
}

pub(crate) fn swap_present<S: Sequence + ?Sized>(
    seq: &mut S,
    idx0: usize,
    idx1: usize,
) -> Result<()> {
    let len = seq.len();
    check_index(idx0, len)?;
    check_index(idx1, len)?;
    if idx0 != idx1 {
        seq.swap(idx0, idx1);
    }
    trace!("swapped {idx0} <-> {idx1} (len {len})");
    Ok(())
}

pub(crate) fn move_up_present<S: Sequence + ?Sized>(seq: &mut S, idx: usize) -> Result<()> {
    if idx == 0 {
        return Ok(());
    }
    swap_present(seq, idx, idx - 1)
}

pub(crate) fn move_down_present<S: Sequence + ?Sized>(seq: &mut S, idx: usize) -> Result<()> {
    let len = seq.len();
    check_index(idx, len)?;
    // idx < len here, so idx + 1 cannot overflow.
    if idx + 1 == len {
        return Ok(());
    }
    swap_present(seq, idx, idx + 1)
}
