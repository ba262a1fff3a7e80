/// Форматирует число с разделителями тысяч (точками), как `vi-VN`
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Цена в донгах: `1.250.000 VNĐ`. Дробная часть округляется
pub fn format_price(price: f64) -> String {
    let rounded = price.max(0.0).round() as u64;
    format!("{} VNĐ", format_number(rounded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1_250_000.0), "1.250.000 VNĐ");
        assert_eq!(format_price(99.6), "100 VNĐ");
        assert_eq!(format_price(-5.0), "0 VNĐ");
    }
}
