use crate::decimal::Decimal;

/// How a fired boost changes a running price.
///
/// Modifiers are applied one at a time in rule order:
/// - **Free**: the price becomes zero and no later rule is evaluated
/// - **Multiply**: the running price is scaled (e.g. `0.75` for 25% off)
/// - **AddShareOfBase**: a share of the *base* price is added, so several
///   additive boosts never compound on each other
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceModifier {
    Free,
    Multiply(Decimal),
    AddShareOfBase(Decimal),
}

impl PriceModifier {
    /// Applies this modifier to `running`, given the untouched `base` price.
    pub fn apply(self, running: Decimal, base: Decimal) -> Decimal {
        match self {
            Self::Free => Decimal::ZERO,
            Self::Multiply(factor) => running * factor,
            Self::AddShareOfBase(share) => running + base * share,
        }
    }

    /// Returns true when applying this modifier ends evaluation.
    pub const fn short_circuits(self) -> bool {
        matches!(self, Self::Free)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::percent;

    #[test]
    fn multipliers_compound_on_running_price() {
        let base = Decimal::from(100);
        let after = PriceModifier::Multiply(percent(90)).apply(base, base);
        let after = PriceModifier::Multiply(percent(80)).apply(after, base);
        assert_eq!(after, Decimal::from(72));
    }

    #[test]
    fn shares_of_base_do_not_compound() {
        let base = Decimal::from(100);
        let after = PriceModifier::AddShareOfBase(percent(20)).apply(base, base);
        let after = PriceModifier::AddShareOfBase(percent(30)).apply(after, base);
        assert_eq!(after, Decimal::from(150));
    }

    #[test]
    fn free_zeroes_and_stops() {
        assert_eq!(
            PriceModifier::Free.apply(Decimal::from(7), Decimal::from(7)),
            Decimal::ZERO
        );
        assert!(PriceModifier::Free.short_circuits());
        assert!(!PriceModifier::Multiply(Decimal::ONE).short_circuits());
    }
}
