//! Text rendering of numbers and lists for the console.

use std::fmt::Display;

use statscalc_stats::Number;

/// Renders a float the way [`Number`] renders one (`3.0`, `2.5`).
pub(crate) fn float(value: f64) -> String {
    Number::Float(value).to_string()
}

/// Renders items as a bracketed, comma-separated list.
pub(crate) fn list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let items = items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}

/// Renders floats as a bracketed, comma-separated list.
pub(crate) fn float_list(values: &[f64]) -> String {
    list(values.iter().copied().map(Number::Float))
}

/// Renders an optional value, using `n/a` when it is absent.
pub(crate) fn optional<T>(value: Option<T>) -> String
where
    T: Display,
{
    value.map_or_else(|| "n/a".to_owned(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list() {
        let values = [Number::Int(1), Number::Float(2.5), Number::Float(3.0)];
        assert_eq!(list(values), "[1, 2.5, 3.0]");
        assert_eq!(list(Vec::<Number>::new()), "[]");
    }

    #[test]
    fn test_float_list() {
        assert_eq!(float_list(&[0.25, 4.0]), "[0.25, 4.0]");
    }

    #[test]
    fn test_optional() {
        assert_eq!(optional(Some(float(1.5))), "1.5");
        assert_eq!(optional(None::<f64>), "n/a");
    }
}
