//! crates/logging/src/kv.rs
//! Key-value rendering shared by every call family.

use std::fmt::{self, Display, Write as _};

/// A flat list of alternating keys and values.
pub type KeyValues<'a> = [&'a dyn Display];

/// Drops a trailing key that has no value.
pub fn paired<'s, 'a>(kvs: &'s KeyValues<'a>) -> &'s KeyValues<'a> {
    &kvs[..kvs.len() - kvs.len() % 2]
}

/// Renders `kvs` as ` key=value` tokens in call order.
///
/// An odd trailing key is silently dropped.
///
/// ```
/// use logging::{kvs, render_key_values};
///
/// assert_eq!(render_key_values(kvs!["user", 42, "op", "login"]), " user=42 op=login");
/// assert_eq!(render_key_values(kvs!["user", 42, "op"]), " user=42");
/// ```
pub fn render_key_values(kvs: &KeyValues<'_>) -> String {
    let mut rendered = String::new();
    // Writing into a String cannot fail.
    let _ = write_key_values(&mut rendered, kvs);
    rendered
}

/// Streams the rendering of [`render_key_values`] into `out`.
pub fn write_key_values<W: fmt::Write>(out: &mut W, kvs: &KeyValues<'_>) -> fmt::Result {
    for pair in paired(kvs).chunks_exact(2) {
        write!(out, " {}={}", pair[0], pair[1])?;
    }
    Ok(())
}
