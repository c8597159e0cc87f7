use serde_derive::{Deserialize, Serialize};
use std::borrow::Cow;

/// Normalized attribute value.
///
/// The DOM only knows strings and missing attributes, so every input is
/// collapsed into one of these two states. `Absent` compares equal to what
/// `getAttribute` reports for an attribute that is not there.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttrValue {
    #[default]
    Absent,
    Present(String),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Absent => None,
            AttrValue::Present(value) => Some(value),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, AttrValue::Absent)
    }
}

impl From<()> for AttrValue {
    fn from(_: ()) -> Self {
        AttrValue::Absent
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Present(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Present(value.clone())
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Present(value.into())
    }
}

impl From<Cow<'_, str>> for AttrValue {
    fn from(value: Cow<'_, str>) -> Self {
        AttrValue::Present(value.into_owned())
    }
}

impl From<&AttrValue> for AttrValue {
    fn from(value: &AttrValue) -> Self {
        value.clone()
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Present(if value { "true" } else { "false" }.into())
    }
}

impl From<char> for AttrValue {
    fn from(value: char) -> Self {
        AttrValue::Present(value.to_string())
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(impl From<$ty> for AttrValue {
            fn from(value: $ty) -> Self {
                AttrValue::Present(value.to_string())
            }
        })*
    };
}

from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Number-to-string as ECMAScript defines it, built on the shortest
// round-trip digits that `{:e}` yields for the source type.
fn number_to_string(value: f64, exponential: String) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.into();
    }
    if value == 0.0 {
        return "0".into();
    }
    let (sign, exponential) = match exponential.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", exponential.as_str()),
    };
    let (mantissa, exponent) = match exponential.split_once('e') {
        Some(parts) => parts,
        None => return format!("{}{}", sign, exponential),
    };
    let exponent = match exponent.parse::<i32>() {
        Ok(exponent) => exponent,
        Err(_) => return format!("{}{}", sign, exponential),
    };
    let digits = mantissa.replace('.', "");
    let k = digits.len() as i32;
    let n = exponent + 1;
    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        format!("{}.{}", &digits[..n as usize], &digits[n as usize..])
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat(-n as usize), digits)
    } else {
        let e = n - 1;
        let e_sign = if e < 0 { "-" } else { "+" };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, e_sign, e.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, e_sign, e.abs())
        }
    };
    format!("{}{}", sign, body)
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Present(number_to_string(value, format!("{:e}", value)))
    }
}

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        AttrValue::Present(number_to_string(value.into(), format!("{:e}", value)))
    }
}
