/// Unwraps an `Err`, panicking with the `Ok` value otherwise.
///
/// An optional predicate method is called on the error and must return
/// `true`:
///
/// ```
/// # use std_util::assert_err;
/// let res: Result<(), std::num::ParseIntError> = "x".parse::<i32>().map(|_| ());
/// let err = assert_err!(res);
/// assert_eq!(err.to_string(), "invalid digit found in string");
/// ```
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(e) => e,
            actual => panic!("expected `Err`; actual={:?}", actual),
        }
    };
    ($e:expr, $is:ident) => {
        match $e {
            Err(e) if e.$is() => e,
            Err(e) => panic!("expected `Err` satisfying `{}`; actual={:#?}", stringify!($is), e),
            actual => panic!("expected `Err`; actual={:?}", actual),
        }
    };
}

/// Unwraps an `Ok`, panicking with the error otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; error={}", e),
        }
    };
}
