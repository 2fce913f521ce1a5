//! crates/logging/src/macros.rs
//! Convenience macros for building key-value lists.

/// Builds a key-value slice from heterogeneous `Display` values.
///
/// Keys and values alternate; a trailing key without a value is dropped at
/// render time.
///
/// # Example
/// ```
/// use logging::kvs;
///
/// let user_id = 42;
/// let fields = kvs!["user", user_id, "op", "login"];
/// assert_eq!(fields.len(), 4);
/// ```
#[macro_export]
macro_rules! kvs {
    () => {
        &[] as &[&dyn ::std::fmt::Display]
    };
    ($($value:expr),+ $(,)?) => {
        &[$(&$value as &dyn ::std::fmt::Display),+] as &[&dyn ::std::fmt::Display]
    };
}
