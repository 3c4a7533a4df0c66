use strum::IntoEnumIterator;

trait EnumValidCsv: IntoEnumIterator + AsRef<str> + Sized {
    fn names() -> Vec<String> {
        Self::iter().map(|v| v.as_ref().to_owned()).collect()
    }
}
impl<T> EnumValidCsv for T where T: IntoEnumIterator + AsRef<str> + Sized {}

/// `a, b, c` listing of every variant, for error messages.
pub fn valid_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str> + Sized,
{
    <T as EnumValidCsv>::names().join(", ")
}

/// `{a,b,c}` listing of every variant, for usage lines.
pub fn valid_choices<T>() -> String
where
    T: IntoEnumIterator + AsRef<str> + Sized,
{
    format!("{{{}}}", <T as EnumValidCsv>::names().join(","))
}
