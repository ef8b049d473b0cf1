//! Onboarding step machine and hold-to-commit progress.
//!
//! Pure state, no UI. The wizard component owns one [`StepFlow`] and,
//! on the commit step, one [`HoldProgress`], and drives them from
//! events and timers.

/// Delay before a single-select step (mood, goal) auto-advances
pub const AUTO_ADVANCE_MS: u64 = 300;

/// Period of the hold-to-commit timer
pub const HOLD_TICK_MS: u64 = 40;

/// Progress added per hold tick
pub const HOLD_STEP: u8 = 2;

/// The ten onboarding steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Welcome,
    MoodCheck,
    Science,
    Interests,
    Goal,
    Preview,
    Name,
    Reminder,
    Streaks,
    Commit,
}

impl OnboardingStep {
    /// All steps in wizard order
    pub const ALL: [OnboardingStep; 10] = [
        OnboardingStep::Welcome,
        OnboardingStep::MoodCheck,
        OnboardingStep::Science,
        OnboardingStep::Interests,
        OnboardingStep::Goal,
        OnboardingStep::Preview,
        OnboardingStep::Name,
        OnboardingStep::Reminder,
        OnboardingStep::Streaks,
        OnboardingStep::Commit,
    ];
}

/// Forward-only position in the step list.
///
/// There is no back navigation; the only way past a gated step is to
/// satisfy its gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepFlow {
    index: usize,
}

impl StepFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active step
    pub fn current(&self) -> OnboardingStep {
        OnboardingStep::ALL[self.index]
    }

    /// Zero-based position, for the progress dots
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn total() -> usize {
        OnboardingStep::ALL.len()
    }

    /// Advance one step; saturates at the last step.
    pub fn next(&mut self) {
        if self.index + 1 < OnboardingStep::ALL.len() {
            self.index += 1;
        }
    }
}

/// Press-and-hold commit progress, 0-100.
///
/// Ticked on a fixed-period timer while the pointer is down. Reaching
/// 100 reports completion exactly once and is not resettable after
/// that; releasing earlier resets progress to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoldProgress {
    percent: u8,
    fired: bool,
}

impl HoldProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Whether completion has already fired
    pub fn fired(&self) -> bool {
        self.fired
    }

    /// One timer tick while held. Returns true exactly once, on the
    /// tick that reaches 100.
    pub fn tick(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.percent = self.percent.saturating_add(HOLD_STEP).min(100);
        if self.percent == 100 {
            self.fired = true;
            return true;
        }
        false
    }

    /// Pointer released. Before completion this resets progress to 0;
    /// after completion it has no effect.
    pub fn release(&mut self) {
        if !self.fired {
            self.percent = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_run_in_order_and_saturate() {
        let mut flow = StepFlow::new();
        assert_eq!(flow.current(), OnboardingStep::Welcome);
        for expected in &OnboardingStep::ALL[1..] {
            flow.next();
            assert_eq!(flow.current(), *expected);
        }
        assert_eq!(flow.current(), OnboardingStep::Commit);

        // Further calls stay on the last step
        flow.next();
        assert_eq!(flow.current(), OnboardingStep::Commit);
        assert_eq!(flow.position(), StepFlow::total() - 1);
    }

    #[test]
    fn full_hold_fires_exactly_once() {
        let mut hold = HoldProgress::new();
        let mut fires = 0;
        for _ in 0..200 {
            if hold.tick() {
                fires += 1;
            }
        }
        assert_eq!(fires, 1);
        assert_eq!(hold.percent(), 100);
        assert!(hold.fired());
    }

    #[test]
    fn early_release_resets_to_zero_without_firing() {
        let mut hold = HoldProgress::new();
        for _ in 0..20 {
            assert!(!hold.tick());
        }
        assert!(hold.percent() > 0);
        assert!(hold.percent() < 100);

        hold.release();
        assert_eq!(hold.percent(), 0);
        assert!(!hold.fired());
    }

    #[test]
    fn release_after_firing_does_not_reset() {
        let mut hold = HoldProgress::new();
        while !hold.tick() {}
        hold.release();
        assert_eq!(hold.percent(), 100);
        assert!(hold.fired());
        // Ticks after firing never report completion again
        assert!(!hold.tick());
    }
}
