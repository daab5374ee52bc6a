//! Input guard shared by every validator.
//!
//! Validators accept any [`Argument`]: the guard inspects the runtime type of
//! the value and only hands strings to the wrapped predicate. Anything else
//! fails with [`RuleError::InvalidArgumentType`] before a pattern is evaluated.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
};

use serde_json::Value;
use tracing::debug;

use crate::errors::RuleError;

/// Type name reported as the expected argument type.
pub const EXPECTED_TYPE: &str = "str";

/// Runtime view of a value handed to a validator.
pub trait Argument {
    /// Returns the value as text when it holds a string.
    fn as_text(&self) -> Option<&str>;
    /// Name of the runtime type, reported in [`RuleError::InvalidArgumentType`].
    fn type_name(&self) -> &'static str;
}

impl Argument for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn type_name(&self) -> &'static str {
        EXPECTED_TYPE
    }
}

impl Argument for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }

    fn type_name(&self) -> &'static str {
        EXPECTED_TYPE
    }
}

impl Argument for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }

    fn type_name(&self) -> &'static str {
        EXPECTED_TYPE
    }
}

impl<T: Argument + ?Sized> Argument for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

impl<T: Argument + ?Sized> Argument for Box<T> {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

impl<T: Argument> Argument for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(Argument::as_text)
    }

    fn type_name(&self) -> &'static str {
        match self {
            Some(v) => v.type_name(),
            None => "none",
        }
    }
}

impl Argument for Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(n) if n.is_f64() => "float",
            Value::Number(_) => "integer",
            Value::String(_) => EXPECTED_TYPE,
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

macro_rules! non_text_argument {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Argument for $ty {
                fn as_text(&self) -> Option<&str> {
                    None
                }

                fn type_name(&self) -> &'static str {
                    $name
                }
            }
        )*
    };
}

non_text_argument!(
    () => "()",
    bool => "bool",
    char => "char",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
);

impl<T> Argument for Vec<T> {
    fn as_text(&self) -> Option<&str> {
        None
    }

    fn type_name(&self) -> &'static str {
        "Vec"
    }
}

impl<T> Argument for [T] {
    fn as_text(&self) -> Option<&str> {
        None
    }

    fn type_name(&self) -> &'static str {
        "slice"
    }
}

impl<K, V, S> Argument for HashMap<K, V, S> {
    fn as_text(&self) -> Option<&str> {
        None
    }

    fn type_name(&self) -> &'static str {
        "HashMap"
    }
}

impl<K, V> Argument for BTreeMap<K, V> {
    fn as_text(&self) -> Option<&str> {
        None
    }

    fn type_name(&self) -> &'static str {
        "BTreeMap"
    }
}

/// Returns the argument's text, or the type error every validator reports.
pub fn require_str<A: Argument + ?Sized>(arg: &A) -> Result<&str, RuleError> {
    arg.as_text().ok_or_else(|| {
        let actual = arg.type_name();
        debug!(expected = EXPECTED_TYPE, actual, "rejected non-string argument");
        RuleError::InvalidArgumentType {
            expected: EXPECTED_TYPE,
            actual,
        }
    })
}

/// Wraps a string predicate so it can be called with any [`Argument`].
///
/// The returned closure rejects non-string arguments without calling
/// `predicate`; strings are passed through unchanged.
///
/// ```
/// use lsre_core::enforce_str;
///
/// let non_empty = |text: &str| !text.is_empty();
///
/// assert_eq!(enforce_str::<str, _>(non_empty)("abc"), Ok(true));
/// assert!(enforce_str::<f64, _>(non_empty)(&3.5).is_err());
/// ```
pub fn enforce_str<A, F>(predicate: F) -> impl Fn(&A) -> Result<bool, RuleError>
where
    A: Argument + ?Sized,
    F: Fn(&str) -> bool,
{
    move |arg: &A| require_str(arg).map(&predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn test_string_input_is_delegated() {
        let is_hello = |text: &str| text == "hello";
        let echo = enforce_str::<str, _>(is_hello);
        assert_eq!(echo("hello"), Ok(true));
        assert_eq!(echo("world"), Ok(false));
        assert_eq!(enforce_str::<String, _>(is_hello)(&"hello".to_string()), Ok(true));
        assert_eq!(
            enforce_str::<Cow<'_, str>, _>(is_hello)(&Cow::Borrowed("hello")),
            Ok(true)
        );
    }

    #[test]
    fn test_non_string_input_skips_predicate() {
        let calls = Cell::new(0);
        let noop = |_: &str| {
            calls.set(calls.get() + 1);
            true
        };

        assert!(enforce_str::<i32, _>(&noop)(&123).is_err());
        assert!(enforce_str::<Option<String>, _>(&noop)(&None).is_err());
        assert!(enforce_str::<Vec<String>, _>(&noop)(&Vec::new()).is_err());
        assert!(enforce_str::<HashMap<String, String>, _>(&noop)(&HashMap::new()).is_err());
        assert_eq!(calls.get(), 0);

        assert_eq!(enforce_str::<str, _>(&noop)("text"), Ok(true));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_error_names_expected_and_actual_type() {
        let err = require_str(&123i64).unwrap_err();
        assert_eq!(
            err,
            RuleError::InvalidArgumentType {
                expected: "str",
                actual: "i64",
            }
        );
        assert_eq!(
            err.to_string(),
            "Argument 'text' must be of type str, got i64"
        );
    }

    #[test]
    fn test_json_value_type_names() {
        let cases = [
            (json!(null), "null"),
            (json!(true), "bool"),
            (json!(7), "integer"),
            (json!(7.5), "float"),
            (json!(["a"]), "array"),
            (json!({"a": 1}), "object"),
        ];
        for (value, name) in cases {
            match require_str(&value) {
                Err(RuleError::InvalidArgumentType { actual, .. }) => assert_eq!(actual, name),
                other => panic!("expected type error for {value}, got {other:?}"),
            }
        }
        assert_eq!(require_str(&json!("abc")), Ok("abc"));
    }

    #[test]
    fn test_option_delegates_to_inner_value() {
        assert_eq!(require_str(&Some("abc")), Ok("abc"));
        assert_eq!(Some(5u8).type_name(), "u8");
        assert_eq!(Option::<&str>::None.type_name(), "none");
    }
}
