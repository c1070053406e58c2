//! Parsing helpers shared by the edit forms. Inputs arrive as raw strings.

/// Trimmed text, or `None` when blank.
pub fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Optional non-negative amount in Rupiah grouping. Accepts `1.250.000`,
/// `1.250`, `1250000` and `2500,5`. A single dot followed by exactly three
/// digits groups thousands; any other single dot is a decimal point.
pub fn parse_amount(value: &str, field: &str) -> Result<Option<f64>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let normalized = if value.matches('.').count() > 1 || value.contains(',') {
        value.replace('.', "").replace(',', ".")
    } else if groups_thousands(value) {
        value.replace('.', "")
    } else {
        value.to_string()
    };
    match normalized.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(Some(n)),
        _ => Err(format!("{} harus berupa angka positif", field)),
    }
}

fn groups_thousands(value: &str) -> bool {
    value.split_once('.').is_some_and(|(head, tail)| {
        !head.is_empty() && tail.len() == 3 && tail.bytes().all(|b| b.is_ascii_digit())
    })
}

/// Optional whole number.
pub fn parse_count(value: &str, field: &str) -> Result<Option<u32>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<u32>()
        .map(Some)
        .map_err(|_| format!("{} harus berupa bilangan bulat", field))
}

/// Id picked from a select; `""` and non-numbers mean nothing selected.
pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" Kertas "), Some("Kertas".to_string()));
    }

    #[test]
    fn test_parse_amount_accepts_grouped_thousands() {
        assert_eq!(parse_amount("1.250.000", "Harga"), Ok(Some(1_250_000.0)));
        assert_eq!(parse_amount("2500,5", "Harga"), Ok(Some(2500.5)));
        assert_eq!(parse_amount("12.5", "Harga"), Ok(Some(12.5)));
        assert_eq!(parse_amount("1250000.5", "Harga"), Ok(Some(1_250_000.5)));
        assert_eq!(parse_amount("", "Harga"), Ok(None));
        assert!(parse_amount("-3", "Harga").is_err());
        assert!(parse_amount("abc", "Harga").is_err());
    }

    #[test]
    fn test_parse_amount_single_dot_group_is_thousands() {
        assert_eq!(parse_amount("1.250", "Harga"), Ok(Some(1_250.0)));
        assert_eq!(parse_amount("75.000", "Harga"), Ok(Some(75_000.0)));
        assert_eq!(parse_amount("1.25", "Harga"), Ok(Some(1.25)));
        assert_eq!(parse_amount("1.2500", "Harga"), Ok(Some(1.25)));
        assert_eq!(parse_amount(".250", "Harga"), Ok(Some(0.25)));
    }

    #[test]
    fn test_parse_count_and_id() {
        assert_eq!(parse_count("7", "Lead time"), Ok(Some(7)));
        assert!(parse_count("7.5", "Lead time").is_err());
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("0"), None);
    }
}
