/// Response size column of the request log.
///
/// Streamed bodies carry no length and are shown as "stream".
pub fn format_size(len: Option<u64>) -> String {
    let Some(n) = len else {
        return "stream".to_string();
    };
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(Some(0)), "0");
        assert_eq!(format_size(Some(999)), "999");
        assert_eq!(format_size(Some(1000)), "1.000");
        assert_eq!(format_size(Some(1234567)), "1.234.567");
        assert_eq!(format_size(None), "stream");
    }
}
