//! Rendered fields of the API models.
mod billing;
mod loadtest;
mod safedns;

/// Render an amount of money with two decimal places.
fn money(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    #[test]
    fn money_has_two_decimals() {
        assert_eq!(super::money(12.5), "12.50");
        assert_eq!(super::money(0.0), "0.00");
    }
}
