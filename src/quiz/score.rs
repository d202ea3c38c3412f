/// Rounded share of correct answers, 0..=100.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((100 * score + total / 2) / total) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Outstanding,
    Excellent,
    Good,
    Fair,
    KeepStudying,
}

const TIER_THRESHOLDS: [(u32, ScoreTier); 4] = [
    (90, ScoreTier::Outstanding),
    (80, ScoreTier::Excellent),
    (70, ScoreTier::Good),
    (60, ScoreTier::Fair),
];

impl ScoreTier {
    pub fn for_percentage(percentage: u32) -> Self {
        TIER_THRESHOLDS
            .iter()
            .find(|(min, _)| percentage >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(ScoreTier::KeepStudying)
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Outstanding => "Outstanding! You're a communication expert! 🌟",
            ScoreTier::Excellent => "Excellent work! Great knowledge! 🎉",
            ScoreTier::Good => "Good job! Keep learning! 👍",
            ScoreTier::Fair => "Not bad! Room for improvement! 📚",
            ScoreTier::KeepStudying => "Keep studying! You'll do better next time! 💪",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreColor {
    Success,
    Warning,
    Failure,
}

impl ScoreColor {
    pub fn for_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            ScoreColor::Success
        } else if percentage >= 60 {
            ScoreColor::Warning
        } else {
            ScoreColor::Failure
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ScoreColor::Success => "score-success",
            ScoreColor::Warning => "score-warning",
            ScoreColor::Failure => "score-failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(percentage(7, 10), 70);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 10), 0);
        assert_eq!(percentage(10, 10), 100);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ScoreTier::for_percentage(100), ScoreTier::Outstanding);
        assert_eq!(ScoreTier::for_percentage(90), ScoreTier::Outstanding);
        assert_eq!(ScoreTier::for_percentage(89), ScoreTier::Excellent);
        assert_eq!(ScoreTier::for_percentage(80), ScoreTier::Excellent);
        assert_eq!(ScoreTier::for_percentage(79), ScoreTier::Good);
        assert_eq!(ScoreTier::for_percentage(70), ScoreTier::Good);
        assert_eq!(ScoreTier::for_percentage(69), ScoreTier::Fair);
        assert_eq!(ScoreTier::for_percentage(60), ScoreTier::Fair);
        assert_eq!(ScoreTier::for_percentage(59), ScoreTier::KeepStudying);
        assert_eq!(ScoreTier::for_percentage(0), ScoreTier::KeepStudying);
    }

    #[test]
    fn test_color_boundaries() {
        assert_eq!(ScoreColor::for_percentage(90), ScoreColor::Success);
        assert_eq!(ScoreColor::for_percentage(89), ScoreColor::Success);
        assert_eq!(ScoreColor::for_percentage(80), ScoreColor::Success);
        assert_eq!(ScoreColor::for_percentage(79), ScoreColor::Warning);
        assert_eq!(ScoreColor::for_percentage(60), ScoreColor::Warning);
        assert_eq!(ScoreColor::for_percentage(59), ScoreColor::Failure);
    }

    #[test]
    fn test_seventy_percent_is_good_and_warning() {
        let pct = percentage(7, 10);
        assert!(ScoreTier::for_percentage(pct)
            .message()
            .starts_with("Good job! Keep learning!"));
        assert_eq!(ScoreColor::for_percentage(pct).css_class(), "score-warning");
    }
}
