use serde_json::Number;

/// A dynamically-typed value storable in a [`DynMap`](crate::DynMap).
///
/// `DynValue` is a closed set of primitive runtime types. Keeping the set
/// closed means the string-coercion switch below is exhaustive and checked
/// by the compiler; there is no "unknown type" arm to fall through.
///
/// Values convert in from natural Rust literals:
///
/// ```
/// use sovran_dynmap::DynValue;
///
/// let s: DynValue = "hello".into();
/// let b: DynValue = true.into();
/// let i: DynValue = 42i64.into();
/// let f: DynValue = 3.3.into();
///
/// assert_eq!(i, DynValue::Int(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DynValue {
    /// A UTF-8 string
    String(String),
    /// A boolean
    Bool(bool),
    /// A signed integer (narrower widths convert in losslessly)
    Int(i64),
    /// An IEEE-754 double (f32 converts in)
    Float(f64),
    /// A number produced by a structured-data decoder (e.g. JSON), which
    /// preserves the original decimal text rather than committing to a
    /// fixed-width numeric type
    Number(Number),
}

impl DynValue {
    /// Returns the canonical string form of this value, trimmed of leading
    /// and trailing whitespace.
    ///
    /// This is the first stage of the coercion pipeline used by the typed
    /// accessors on [`DynMap`](crate::DynMap): every value coerces to its
    /// string form, and the target type is parsed from that string.
    ///
    /// ```
    /// use sovran_dynmap::DynValue;
    ///
    /// assert_eq!(DynValue::Bool(true).coerce_string(), "true");
    /// assert_eq!(DynValue::Int(-7).coerce_string(), "-7");
    /// assert_eq!(DynValue::Float(3.3).coerce_string(), "3.3");
    /// assert_eq!(DynValue::String("  padded  ".into()).coerce_string(), "padded");
    /// ```
    pub fn coerce_string(&self) -> String {
        let s = match self {
            DynValue::String(s) => s.clone(),
            DynValue::Bool(b) => b.to_string(),
            DynValue::Int(i) => i.to_string(),
            DynValue::Float(f) => f.to_string(),
            DynValue::Number(n) => n.to_string(),
        };
        s.trim().to_string()
    }

    /// Converts a decoded `serde_json::Value` into a `DynValue`, if it has a
    /// representation here.
    ///
    /// Returns `None` for `null` and for the structured kinds (arrays,
    /// objects), which this map does not model.
    ///
    /// ```
    /// use sovran_dynmap::DynValue;
    ///
    /// let v: serde_json::Value = serde_json::from_str("6").unwrap();
    /// assert_eq!(DynValue::from_json(v), Some(DynValue::Number("6".parse().unwrap())));
    ///
    /// let v: serde_json::Value = serde_json::from_str("[1, 2]").unwrap();
    /// assert_eq!(DynValue::from_json(v), None);
    /// ```
    pub fn from_json(value: serde_json::Value) -> Option<DynValue> {
        match value {
            serde_json::Value::String(s) => Some(DynValue::String(s)),
            serde_json::Value::Bool(b) => Some(DynValue::Bool(b)),
            serde_json::Value::Number(n) => Some(DynValue::Number(n)),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => None,
        }
    }
}

impl From<&str> for DynValue {
    fn from(value: &str) -> Self {
        DynValue::String(value.to_string())
    }
}

impl From<String> for DynValue {
    fn from(value: String) -> Self {
        DynValue::String(value)
    }
}

impl From<bool> for DynValue {
    fn from(value: bool) -> Self {
        DynValue::Bool(value)
    }
}

impl From<i8> for DynValue {
    fn from(value: i8) -> Self {
        DynValue::Int(value.into())
    }
}

impl From<i16> for DynValue {
    fn from(value: i16) -> Self {
        DynValue::Int(value.into())
    }
}

impl From<i32> for DynValue {
    fn from(value: i32) -> Self {
        DynValue::Int(value.into())
    }
}

impl From<i64> for DynValue {
    fn from(value: i64) -> Self {
        DynValue::Int(value)
    }
}

impl From<f32> for DynValue {
    fn from(value: f32) -> Self {
        DynValue::Float(value.into())
    }
}

impl From<f64> for DynValue {
    fn from(value: f64) -> Self {
        DynValue::Float(value)
    }
}

impl From<Number> for DynValue {
    fn from(value: Number) -> Self {
        DynValue::Number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_coercion_per_variant() {
        assert_eq!(DynValue::String("blah".into()).coerce_string(), "blah");
        assert_eq!(DynValue::Bool(true).coerce_string(), "true");
        assert_eq!(DynValue::Bool(false).coerce_string(), "false");
        assert_eq!(DynValue::Int(2).coerce_string(), "2");
        assert_eq!(DynValue::Int(-17).coerce_string(), "-17");
        assert_eq!(DynValue::Float(3.3).coerce_string(), "3.3");
        assert_eq!(DynValue::Float(-0.5).coerce_string(), "-0.5");
        assert_eq!(
            DynValue::Number("6".parse().unwrap()).coerce_string(),
            "6"
        );
    }

    #[test]
    fn test_string_coercion_trims() {
        assert_eq!(
            DynValue::String("  spaced out \t".into()).coerce_string(),
            "spaced out"
        );
        // Trimming an already-trimmed string changes nothing
        assert_eq!(DynValue::String("plain".into()).coerce_string(), "plain");
    }

    #[test]
    fn test_decoded_number_preserves_text() {
        // Too many digits to survive a round-trip through f64
        let n: Number = "0.1000000000000000055511151231257827".parse().unwrap();
        assert_eq!(
            DynValue::Number(n).coerce_string(),
            "0.1000000000000000055511151231257827"
        );
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(DynValue::from("s"), DynValue::String("s".into()));
        assert_eq!(DynValue::from("s".to_string()), DynValue::String("s".into()));
        assert_eq!(DynValue::from(true), DynValue::Bool(true));
        assert_eq!(DynValue::from(1i8), DynValue::Int(1));
        assert_eq!(DynValue::from(2i16), DynValue::Int(2));
        assert_eq!(DynValue::from(3i32), DynValue::Int(3));
        assert_eq!(DynValue::from(4i64), DynValue::Int(4));
        assert_eq!(DynValue::from(0.5f64), DynValue::Float(0.5));
        assert_eq!(DynValue::from(0.5f32), DynValue::Float(0.5));
        assert_eq!(
            DynValue::from(Number::from(6)),
            DynValue::Number("6".parse().unwrap())
        );
    }

    #[test]
    fn test_from_json() {
        let decoded: serde_json::Value = serde_json::from_str(r#""text""#).unwrap();
        assert_eq!(
            DynValue::from_json(decoded),
            Some(DynValue::String("text".into()))
        );

        let decoded: serde_json::Value = serde_json::from_str("true").unwrap();
        assert_eq!(DynValue::from_json(decoded), Some(DynValue::Bool(true)));

        let decoded: serde_json::Value = serde_json::from_str("4.4").unwrap();
        assert_eq!(
            DynValue::from_json(decoded),
            Some(DynValue::Number("4.4".parse().unwrap()))
        );

        assert_eq!(DynValue::from_json(serde_json::Value::Null), None);
        let decoded: serde_json::Value = serde_json::from_str(r#"{"a": 1}"#).unwrap();
        assert_eq!(DynValue::from_json(decoded), None);
    }
}
