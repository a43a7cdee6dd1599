/// Format a rupee amount with Indian digit grouping: the last three digits,
/// then groups of two (`₹1,25,000`). Fractional amounts keep two decimals.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "₹0".to_string();
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    let paise = (amount.abs() * 100.0).round() as u64;
    let rupees = paise / 100;
    let fraction = paise % 100;

    let grouped = group_indian(&rupees.to_string());
    if fraction == 0 {
        format!("{}₹{}", sign, grouped)
    } else {
        format!("{}₹{}.{:02}", sign, grouped, fraction)
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(800.0), "₹800");
        assert_eq!(format_inr(2500.0), "₹2,500");
        assert_eq!(format_inr(75000.0), "₹75,000");
        assert_eq!(format_inr(125000.0), "₹1,25,000");
        assert_eq!(format_inr(12345678.0), "₹1,23,45,678");
    }

    #[test]
    fn test_fractions_keep_two_decimals() {
        assert_eq!(format_inr(1234.5), "₹1,234.50");
        assert_eq!(format_inr(99.999), "₹100");
    }

    #[test]
    fn test_negative_and_non_finite() {
        assert_eq!(format_inr(-60000.0), "-₹60,000");
        assert_eq!(format_inr(f64::NAN), "₹0");
    }
}
