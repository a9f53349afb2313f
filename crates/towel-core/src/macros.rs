/// Builds a list of `(column, value)` assignments.
///
/// ```
/// let fields = towel_core::fields! { "name" => "lily", "age" => 2 };
/// assert_eq!(fields.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<(&str, $crate::stmt::Value)>::new()
    };
    (
        $( $name:literal => $value:expr ),+ $(,)?
    ) => {
        ::std::vec![ $( ($name, $crate::stmt::Value::from($value)), )+ ]
    };
}
