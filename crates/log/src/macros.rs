//! Convenience macros

/// Build the extra-argument list for a logger call
///
/// Each argument is converted with `Arg::from`, so JSON values,
/// [`HttpError`](crate::HttpError) and ready-made [`Arg`](crate::Arg)s can
/// be mixed.
///
/// ```
/// use strata_log::{Arg, extras};
/// use serde_json::json;
///
/// let io = std::io::Error::other("disk full");
/// let args = extras![json!({"path": "/tmp"}), Arg::error(io)];
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! extras {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($arg)),+]
    };
}
