//! The interpolation renderer.
//!
//! A single linear pass: fragment, substitution, fragment, ... , fragment.
//! Nothing is escaped or reordered. Tags that want escaping transform the
//! substitutions before calling in here.

use std::fmt::{self, Write as _};

use quasi_foundation::{Error, Result};

/// Interleaves `fragments` with the text of `substitutions`.
///
/// `fragments` must hold exactly one more element than `substitutions`.
///
/// # Errors
///
/// Returns [`ErrorKind::LengthMismatch`](quasi_foundation::ErrorKind::LengthMismatch)
/// when the lengths disagree, including when `fragments` is empty.
/// A `Display` impl that reports `fmt::Error` surfaces as
/// [`ErrorKind::Internal`](quasi_foundation::ErrorKind::Internal).
pub fn render<F, S>(fragments: &[F], substitutions: &[S]) -> Result<String>
where
    F: AsRef<str>,
    S: fmt::Display,
{
    let capacity = fragments.iter().map(|f| f.as_ref().len()).sum();
    let mut out = String::with_capacity(capacity);
    render_to(&mut out, fragments, substitutions)?;
    Ok(out)
}

/// Like [`render`], but appends to a caller-owned writer.
///
/// Nothing is written when the lengths disagree.
///
/// # Errors
///
/// Same as [`render`].
pub fn render_to<W, F, S>(out: &mut W, fragments: &[F], substitutions: &[S]) -> Result<()>
where
    W: fmt::Write + ?Sized,
    F: AsRef<str>,
    S: fmt::Display,
{
    if fragments.len() != substitutions.len() + 1 {
        return Err(Error::length_mismatch(fragments.len(), substitutions.len()));
    }

    for (fragment, substitution) in fragments.iter().zip(substitutions) {
        out.write_str(fragment.as_ref())?;
        write!(out, "{substitution}")?;
    }
    out.write_str(fragments[substitutions.len()].as_ref())?;
    Ok(())
}
