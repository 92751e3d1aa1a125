//! Number and text formatting shared by facts and sections.
//!
//! Number styles follow the numeral.js patterns the site has always used:
//! - `0,0`: integer with thousands separators
//! - `0a` / `0.0a`: abbreviated with a k/m/b/t suffix

/// Parse a record value as a number, ignoring thousands separators.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().replace(',', "").parse::<f64>().ok()
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    libm::round(value * factor) / factor
}

/// `0,0`: 1234567.4 -> "1,234,567".
pub fn format_thousands(value: f64) -> String {
    let rounded = libm::round(value) as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Thousands-formatted value of a raw record string; unparseable input
/// formats as "0".
pub fn format_count(raw: &str) -> String {
    format_thousands(parse_number(raw).unwrap_or(0.0))
}

/// `0a` (decimals = 0) or `0.0a` (decimals = 1): 1234 -> "1k" / "1.2k".
pub fn format_abbreviated(value: f64, decimals: u32) -> String {
    const SCALES: &[(f64, &str)] = &[(1e12, "t"), (1e9, "b"), (1e6, "m"), (1e3, "k"), (1.0, "")];

    let mut i = SCALES
        .iter()
        .position(|(scale, _)| value.abs() >= *scale)
        .unwrap_or(SCALES.len() - 1);
    let mut scaled = round_to(value / SCALES[i].0, decimals);
    // Rounding can carry into the next suffix: 999,999 is "1m", not "1000k".
    if scaled.abs() >= 1000.0 && i > 0 {
        i -= 1;
        scaled = round_to(value / SCALES[i].0, decimals);
    }
    format!(
        "{:.prec$}{}",
        scaled,
        SCALES[i].1,
        prec = decimals as usize
    )
}

/// Rounded value printed without trailing zeros: 12.3456 -> "12.35", 5.0 -> "5".
pub fn format_rounded(value: f64, places: u32) -> String {
    format!("{}", round_to(value, places))
}

/// "a" or "an" for the given noun phrase.
pub fn indefinite_article(phrase: &str) -> &'static str {
    match phrase.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// "a", "a and b", "a, b and c".
pub fn to_comma_list(items: &[&str], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [rest @ .., last] => format!("{} {} {}", rest.join(", "), conjunction, last),
    }
}

/// Link whose text is the URL without scheme, `www.` or trailing slash.
pub fn pretty_url_link(url: &str) -> String {
    let text = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.")
        .trim_end_matches('/');
    format!("<a href=\"{}\">{}</a>", url, text)
}

/// Numbered markers followed by one after-text link line per URL:
///
/// ```text
/// 1. 2.
///  https://a.example 1.
///  https://b.example 2.
/// ```
pub fn link_many_aftertext(links: &[&str]) -> String {
    let markers: Vec<String> = (1..=links.len()).map(|i| format!("{}.", i)).collect();
    let mut out = markers.join(" ");
    for (i, link) in links.iter().enumerate() {
        out.push_str(&format!("\n {} {}.", link, i + 1));
    }
    out
}

/// "Guido van Rossum" -> "guidoVanRossum".
pub fn camel_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, word) in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .enumerate()
    {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
        } else {
            out.push_str(&upper_first(&lower));
        }
    }
    out
}

pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Escape `& < > " '` for embedding code inside markup.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1234567.4), "1,234,567");
        assert_eq!(format_thousands(-1000.0), "-1,000");
        assert_eq!(format_count("12,000"), "12,000");
        assert_eq!(format_count("n/a"), "0");
    }

    #[test]
    fn test_format_abbreviated() {
        assert_eq!(format_abbreviated(950.0, 0), "950");
        assert_eq!(format_abbreviated(1234.0, 0), "1k");
        assert_eq!(format_abbreviated(1234.0, 1), "1.2k");
        assert_eq!(format_abbreviated(2_500_000.0, 1), "2.5m");
        assert_eq!(format_abbreviated(3_000_000_000.0, 0), "3b");
    }

    #[test]
    fn test_format_abbreviated_carries_into_next_suffix() {
        assert_eq!(format_abbreviated(999_999.0, 0), "1m");
        assert_eq!(format_abbreviated(999_950.0, 1), "1.0m");
        assert_eq!(format_abbreviated(999.6, 0), "1k");
        assert_eq!(format_abbreviated(999_400.0, 0), "999k");
    }

    #[test]
    fn test_round_to() {
        assert_relative_eq!(round_to(0.123456 * 100.0, 2), 12.35);
        assert_eq!(format_rounded(5.0, 2), "5");
        assert_eq!(format_rounded(48.123, 2), "48.12");
    }

    #[test]
    fn test_indefinite_article() {
        assert_eq!(indefinite_article("esoteric programming language"), "an");
        assert_eq!(indefinite_article("programming language"), "a");
        assert_eq!(indefinite_article(""), "a");
    }

    #[test]
    fn test_to_comma_list() {
        assert_eq!(to_comma_list(&[".rs"], "and"), ".rs");
        assert_eq!(to_comma_list(&[".c", ".h"], "and"), ".c and .h");
        assert_eq!(to_comma_list(&["a", "b", "c"], "or"), "a, b or c");
    }

    #[test]
    fn test_link_helpers() {
        assert_eq!(
            pretty_url_link("https://www.rust-lang.org/"),
            "<a href=\"https://www.rust-lang.org/\">rust-lang.org</a>"
        );
        assert_eq!(
            link_many_aftertext(&["https://a.io", "https://b.io"]),
            "1. 2.\n https://a.io 1.\n https://b.io 2."
        );
    }

    #[test]
    fn test_text_helpers() {
        assert_eq!(camel_case("Guido van Rossum"), "guidoVanRossum");
        assert_eq!(camel_case("Bell Labs"), "bellLabs");
        assert_eq!(upper_first("programming language"), "Programming language");
        assert_eq!(escape_html("a < b && c"), "a &lt; b &amp;&amp; c");
    }
}
