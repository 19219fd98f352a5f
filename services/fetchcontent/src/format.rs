/// 定点格式化，等价于 `{:.N}`
pub fn format_number(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::approx_constant)]
    fn two_decimals() {
        assert_eq!(format_number(3.14159, 2), "3.14");
    }

    #[test]
    fn pads_and_rounds() {
        assert_eq!(format_number(2.0, 3), "2.000");
        assert_eq!(format_number(2.675, 0), "3");
        assert_eq!(format_number(-1.5, 3), "-1.500");
    }
}
