use crate::models::Course;

/// Credit bucket that selects the GPA multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpaTier {
    Low,
    Medium,
    High,
}

impl GpaTier {
    pub fn for_credit(credit: i32) -> Self {
        match credit {
            c if c <= 2 => GpaTier::Low,
            3 => GpaTier::Medium,
            _ => GpaTier::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpaTierTable {
    pub low: i64,
    pub medium: i64,
    pub high: i64,
}

pub const GPA_TIERS: GpaTierTable = GpaTierTable {
    low: 3,
    medium: 5,
    high: 10,
};

impl GpaTierTable {
    pub const fn multiplier(&self, tier: GpaTier) -> i64 {
        match tier {
            GpaTier::Low => self.low,
            GpaTier::Medium => self.medium,
            GpaTier::High => self.high,
        }
    }

    /// coefficient × credit × tier multiplier. Expects a validated course.
    pub fn total_gpa(&self, course: &Course) -> i64 {
        let tier = GpaTier::for_credit(course.credit);
        i64::from(course.grade.coefficient) * i64::from(course.credit) * self.multiplier(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grade;

    fn course(credit: i32, coefficient: i32) -> Course {
        Course {
            id: 1,
            name: "Algebra".to_string(),
            credit,
            grade: Grade { coefficient, note: String::new() },
        }
    }

    #[test]
    fn test_tier_selection() {
        assert_eq!(GpaTier::for_credit(0), GpaTier::Low);
        assert_eq!(GpaTier::for_credit(1), GpaTier::Low);
        assert_eq!(GpaTier::for_credit(2), GpaTier::Low);
        assert_eq!(GpaTier::for_credit(3), GpaTier::Medium);
        assert_eq!(GpaTier::for_credit(4), GpaTier::High);
    }

    #[test]
    fn test_total_gpa_per_tier() {
        assert_eq!(GPA_TIERS.total_gpa(&course(2, 4)), 4 * 2 * 3);
        assert_eq!(GPA_TIERS.total_gpa(&course(3, 4)), 4 * 3 * 5);
        assert_eq!(GPA_TIERS.total_gpa(&course(4, 4)), 4 * 4 * 10);
        assert_eq!(GPA_TIERS.total_gpa(&course(0, 4)), 0);
    }

    #[test]
    fn test_large_coefficient_does_not_overflow() {
        let total = GPA_TIERS.total_gpa(&course(4, i32::MAX));
        assert_eq!(total, i64::from(i32::MAX) * 40);
    }
}
