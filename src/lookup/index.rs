use super::Key;
use crate::error::DigError;

/// Resolves `key` into a position within a sequence of `len` elements.
///
/// Negative indices count back from the end. `Ok(None)` means the index is
/// out of range; a non-integer key is an error.
pub fn resolve_index(key: &Key, len: usize) -> Result<Option<usize>, DigError> {
    let index = key
        .as_index()
        .ok_or_else(|| DigError::invalid_index(key.clone()))?;

    if index >= 0 {
        let index = usize::try_from(index).ok();
        return Ok(index.filter(|i| *i < len));
    }

    let back = index.unsigned_abs();
    Ok(usize::try_from(back)
        .ok()
        .filter(|b| *b <= len)
        .map(|b| len - b))
}
