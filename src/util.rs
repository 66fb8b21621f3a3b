use std::str::FromStr;

use thiserror::Error;

/// Best-effort conversion of a raw value into a primitive slot.
///
/// Scalar implementations trim ASCII whitespace and then require the whole
/// remainder to parse: `extract::<i32>(" 42 ")` succeeds, `"42x"` does not.
/// Booleans accept the textual forms `true` and `false` only. `String`
/// always succeeds and copies the value verbatim, surrounding whitespace
/// included.
pub trait Extract: Sized {
    fn extract(value: &str) -> Result<Self, ExtractError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("cannot parse {value:?} as {target}")]
    Unparsable { value: String, target: &'static str },
}

/// Free-function form of [`Extract::extract`].
pub fn extract<T: Extract>(value: &str) -> Result<T, ExtractError> {
    T::extract(value)
}

macro_rules! impl_extract {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Extract for $ty {
                fn extract(value: &str) -> Result<Self, ExtractError> {
                    <$ty as FromStr>::from_str(value.trim_ascii()).map_err(|_| {
                        ExtractError::Unparsable {
                            value: value.to_owned(),
                            target: stringify!($ty),
                        }
                    })
                }
            }
        )*
    };
}

impl_extract!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl Extract for String {
    fn extract(value: &str) -> Result<Self, ExtractError> {
        Ok(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn booleans_are_textual() {
        assert_eq!(extract::<bool>("true"), Ok(true));
        assert_eq!(extract::<bool>(" false "), Ok(false));
        assert!(extract::<bool>("True").is_err());
        assert!(extract::<bool>("1").is_err());
    }

    #[test]
    fn numbers_must_consume_the_whole_value() {
        assert_eq!(extract::<i32>("42"), Ok(42));
        assert_eq!(extract::<i32>(" -7 "), Ok(-7));
        assert_eq!(extract::<f64>("3.5"), Ok(3.5));
        assert!(extract::<i32>("abc").is_err());
        assert!(extract::<i32>("42x").is_err());
        assert!(extract::<u8>("-1").is_err());
        assert!(extract::<f64>("").is_err());
    }

    #[test]
    fn strings_are_verbatim() {
        assert_eq!(extract::<String>(" spaced "), Ok(" spaced ".to_owned()));
        assert_eq!(extract::<String>(""), Ok(String::new()));
    }

    #[test]
    fn failure_names_the_target_type() {
        let err = extract::<i64>("nope").unwrap_err();
        assert_eq!(err.to_string(), "cannot parse \"nope\" as i64");
    }
}
