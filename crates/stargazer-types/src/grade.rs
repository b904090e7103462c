//! Letter grade bands for skill values.

/// Lower bounds of each grade band, highest first.
const GRADE_BANDS: [(f64, &str); 15] = [
    (95.0, "S+"),
    (90.0, "S"),
    (85.0, "A+"),
    (80.0, "A"),
    (75.0, "B+"),
    (70.0, "B"),
    (65.0, "B-"),
    (60.0, "C+"),
    (55.0, "C"),
    (50.0, "C-"),
    (45.0, "D+"),
    (40.0, "D"),
    (30.0, "D-"),
    (20.0, "E"),
    (0.0, "F"),
];

/// Map a skill value to its letter grade.
pub fn grade_for(value: f64) -> &'static str {
    GRADE_BANDS
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map_or("F", |(_, grade)| grade)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(grade_for(100.0), "S+");
        assert_eq!(grade_for(95.0), "S+");
        assert_eq!(grade_for(94.9), "S");
        assert_eq!(grade_for(30.0), "D-");
        assert_eq!(grade_for(29.9), "E");
        assert_eq!(grade_for(0.0), "F");
        assert_eq!(grade_for(-3.0), "F");
    }
}
