/// How a requested discount is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscountKind {
    #[default]
    Percentage,
    Fixed,
}

impl DiscountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountKind::Percentage => "percentage",
            DiscountKind::Fixed => "fixed",
        }
    }

    pub fn parse(value: &str) -> Option<DiscountKind> {
        match value {
            "percentage" => Some(DiscountKind::Percentage),
            "fixed" => Some(DiscountKind::Fixed),
            _ => None,
        }
    }
}

/// Price after the requested discount. A percentage is taken off the full
/// price, a fixed amount is subtracted as-is. No clamping: a fixed discount
/// larger than the price yields a negative result.
pub fn discounted_price(original: f64, discount: f64, kind: DiscountKind) -> f64 {
    match kind {
        DiscountKind::Percentage => original - original * discount / 100.0,
        DiscountKind::Fixed => original - discount,
    }
}

/// Priority a discount request is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [
        Urgency::Low,
        Urgency::Normal,
        Urgency::High,
        Urgency::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Normal => "normal",
            Urgency::High => "high",
            Urgency::Urgent => "urgent",
        }
    }

    pub fn parse(value: &str) -> Option<Urgency> {
        match value {
            "low" => Some(Urgency::Low),
            "normal" => Some(Urgency::Normal),
            "high" => Some(Urgency::High),
            "urgent" => Some(Urgency::Urgent),
            _ => None,
        }
    }

    pub fn label_th(&self) -> &'static str {
        match self {
            Urgency::Low => "ไม่เร่งด่วน",
            Urgency::Normal => "ปกติ",
            Urgency::High => "เร่งด่วน",
            Urgency::Urgent => "เร่งด่วนมาก",
        }
    }

    /// Traffic-light dot next to the urgency label.
    pub fn indicator_color(&self) -> &'static str {
        match self {
            Urgency::Low => "#22c55e",
            Urgency::Normal => "#eab308",
            Urgency::High => "#f97316",
            Urgency::Urgent => "#ef4444",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_discount() {
        assert_eq!(
            discounted_price(1_000.0, 15.0, DiscountKind::Percentage),
            850.0
        );
        assert_eq!(
            discounted_price(1_000.0, 100.0, DiscountKind::Percentage),
            0.0
        );
    }

    #[test]
    fn test_fixed_discount() {
        assert_eq!(discounted_price(1_000.0, 150.0, DiscountKind::Fixed), 850.0);
    }

    #[test]
    fn test_zero_discount_keeps_price() {
        assert_eq!(
            discounted_price(2_500.0, 0.0, DiscountKind::Percentage),
            2_500.0
        );
        assert_eq!(discounted_price(2_500.0, 0.0, DiscountKind::Fixed), 2_500.0);
    }

    #[test]
    fn test_fixed_discount_can_exceed_price() {
        assert_eq!(discounted_price(100.0, 150.0, DiscountKind::Fixed), -50.0);
    }

    #[test]
    fn test_discount_kind_round_trip() {
        for kind in [DiscountKind::Percentage, DiscountKind::Fixed] {
            assert_eq!(DiscountKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(DiscountKind::parse("bogus"), None);
    }

    #[test]
    fn test_urgency_round_trip_and_labels() {
        for urgency in Urgency::ALL {
            assert_eq!(Urgency::parse(urgency.as_str()), Some(urgency));
        }
        assert_eq!(Urgency::Urgent.label_th(), "เร่งด่วนมาก");
        assert_eq!(Urgency::Low.indicator_color(), "#22c55e");
        assert_eq!(Urgency::parse(""), None);
    }
}
