#[macro_export]
macro_rules! json {
    // Handle null
    (null) => {
        $crate::JsonValue::Null
    };

    // Handle true
    (true) => {
        $crate::JsonValue::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::JsonValue::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::JsonValue::Array($crate::JsonArray::new())
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::JsonValue::Array(vec![$($crate::json!($elem)),*].into())
    };

    // Handle empty object
    ({}) => {
        $crate::JsonValue::Object($crate::JsonObject::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {
        $crate::JsonValue::Object(
            [$(($key, $crate::json!($value))),*]
                .into_iter()
                .collect::<$crate::JsonObject>(),
        )
    };

    // Fallback for any other expression; failed conversions become null
    ($other:expr) => {
        $crate::JsonValue::wrap($other).unwrap_or($crate::JsonValue::Null)
    };
}
