//! Price formatting for the two product views.

/// Rupee amount with Indian digit grouping and two decimals, e.g. `₹12,34,567.80`.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("₹{}", amount);
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 { "-" } else { "" };

    format!("{}₹{}.{}", sign, group_indian(whole), fraction)
}

/// Plain dollar amount as received from the catalog.
pub fn format_usd(amount: f64) -> String {
    format!("${}", amount)
}

/// Last three digits form one group, every group before it has two.
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
