//! Running balance carried through the monthly simulation loop

/// State of the projected balance at a month boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionState {
    /// Calendar year of the month just simulated
    pub year: i32,

    /// Month just simulated (1-12), 0 before the first month
    pub month: u32,

    /// Balance at end of the month, full precision
    pub wealth: f64,
}

/// Breakdown of one simulated month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthStep {
    pub bop_wealth: f64,
    pub net_contribution: f64,
    pub growth: f64,
    pub eop_wealth: f64,
}

impl ProjectionState {
    /// Initial state before the first simulated month
    pub fn opening(year: i32, initial_wealth: f64) -> Self {
        Self {
            year,
            month: 0,
            wealth: initial_wealth,
        }
    }

    /// Apply one month: contribution lands first, then the whole balance
    /// grows by `monthly_rate`
    pub fn advance(self, year: i32, month: u32, net: f64, monthly_rate: f64) -> (Self, MonthStep) {
        let bop_wealth = self.wealth;
        let funded = bop_wealth + net;
        let eop_wealth = funded * (1.0 + monthly_rate);

        let next = Self {
            year,
            month,
            wealth: eop_wealth,
        };
        let step = MonthStep {
            bop_wealth,
            net_contribution: net,
            growth: eop_wealth - funded,
            eop_wealth,
        };
        (next, step)
    }
}

/// Monthly-equivalent of an annual rate: `(1 + annual)^(1/12) - 1`
pub fn monthly_rate(annual_rate: f64) -> f64 {
    (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0
}

/// Round to cents, half away from zero
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_rate_compounds_to_annual() {
        for annual in [0.0, 0.04, 0.12, -0.05] {
            let m = monthly_rate(annual);
            assert_relative_eq!((1.0 + m).powi(12) - 1.0, annual, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_contribution_before_growth() {
        let state = ProjectionState::opening(2024, 1_000.0);
        let (next, step) = state.advance(2024, 1, 100.0, 0.01);

        assert_relative_eq!(next.wealth, 1_111.0, epsilon = 1e-9);
        assert_relative_eq!(step.growth, 11.0, epsilon = 1e-9);
        assert_eq!(step.bop_wealth, 1_000.0);
        assert_eq!((next.year, next.month), (2024, 1));
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(104_000.000_000_01), 104_000.0);
        assert_eq!(round_cents(1.005_1), 1.01);
        assert_eq!(round_cents(-2.345_6), -2.35);
    }
}
