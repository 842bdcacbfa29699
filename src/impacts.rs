//! Cumulative settlement impact totals.

use bevy::prelude::*;

/// Three independent running totals, credited once per structure on the
/// turn it was built.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct Impacts {
    social: f64,
    economy: f64,
    ecology: f64,
}

impl Impacts {
    pub fn social(&self) -> f64 {
        self.social
    }

    pub fn economy(&self) -> f64 {
        self.economy
    }

    pub fn ecology(&self) -> f64 {
        self.ecology
    }

    pub fn increment_social(&mut self, value: f64) {
        self.social += value;
    }

    pub fn increment_economy(&mut self, value: f64) {
        self.economy += value;
    }

    pub fn increment_ecology(&mut self, value: f64) {
        self.ecology += value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_accumulate_independently() {
        let mut impacts = Impacts::default();
        impacts.increment_social(2.0);
        impacts.increment_economy(1.5);
        impacts.increment_ecology(-0.5);
        impacts.increment_social(1.0);

        assert_eq!(impacts.social(), 3.0);
        assert_eq!(impacts.economy(), 1.5);
        assert_eq!(impacts.ecology(), -0.5);
    }
}
