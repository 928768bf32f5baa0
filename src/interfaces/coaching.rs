//! Static mindset-coaching content for the dashboard side panel.

pub struct CoachingTip {
    pub title: &'static str,
    pub body: &'static str,
}

pub const MINDSET_TIPS: &[CoachingTip] = &[
    CoachingTip {
        title: "Avoid FOMO",
        body: "The market will always be there tomorrow. Don't chase a trade that has already left the station.",
    },
    CoachingTip {
        title: "Risk First",
        body: "Never enter a trade without knowing exactly where you will exit if you are wrong.",
    },
    CoachingTip {
        title: "Detach from Outcome",
        body: "Focus on the process, not the money. A losing trade can still be a 'good' trade if you followed your plan.",
    },
    CoachingTip {
        title: "Revenge Trading",
        body: "If you feel angry after a loss, close your platform. Your emotions are now your biggest liability.",
    },
    CoachingTip {
        title: "Size Matters",
        body: "If you can't sleep because of a position, your size is too big. Scale down until you are indifferent.",
    },
];

pub const DAILY_MANTRA: &str = "I am a professional risk manager who happens to trade. \
I follow my plan, manage my emotions, and accept that outcomes are probabilistic.";

/// Rotates through the tip deck, wrapping at the end.
#[derive(Debug, Default)]
pub struct MindsetCoach {
    index: usize,
}

impl MindsetCoach {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &'static CoachingTip {
        &MINDSET_TIPS[self.index]
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % MINDSET_TIPS.len();
    }

    pub fn select(&mut self, index: usize) {
        self.index = index % MINDSET_TIPS.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps() {
        let mut coach = MindsetCoach::new();
        assert_eq!(coach.current().title, "Avoid FOMO");

        for _ in 0..MINDSET_TIPS.len() {
            coach.advance();
        }
        assert_eq!(coach.current().title, "Avoid FOMO");

        coach.advance();
        assert_eq!(coach.current().title, "Risk First");
    }

    #[test]
    fn test_select_is_modular() {
        let mut coach = MindsetCoach::new();
        coach.select(4);
        assert_eq!(coach.current().title, "Size Matters");
        coach.select(7);
        assert_eq!(coach.current().title, "Detach from Outcome");
    }
}
