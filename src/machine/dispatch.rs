//! Outcome of a dispatch and the scan that decides it.

use crate::config::DispatchPolicy;

/// What a call to [`Machine::transition`](crate::Machine::transition) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// One or more transitions fired
    Fired(usize),

    /// Matching transitions existed but none was allowed to fire
    Blocked,

    /// No transition of the current state listens for the event
    NoMatch,

    /// The machine has no current state yet
    Uninitialized,
}

impl Dispatch {
    /// Whether the current state may have changed.
    pub fn fired(&self) -> bool {
        matches!(self, Self::Fired(_))
    }

    /// Number of transitions that fired.
    pub fn count(&self) -> usize {
        match self {
            Self::Fired(n) => *n,
            _ => 0,
        }
    }
}

/// Next move of the scan after a transition matched the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Fire,
    FireAndHalt,
    Skip,
    Halt,
}

/// Scan over the matching transitions of one state.
pub(crate) struct Scan {
    policy: DispatchPolicy,
    fired: usize,
    blocked: bool,
}

impl Scan {
    pub fn new(policy: DispatchPolicy) -> Self {
        Self {
            policy,
            fired: 0,
            blocked: false,
        }
    }

    /// Decide what to do with a matching transition given its guard result.
    pub fn on_match(&mut self, allowed: bool) -> Step {
        if !allowed {
            self.blocked = true;
            return match self.policy {
                DispatchPolicy::HaltOnBlocked | DispatchPolicy::FirstMatch => Step::Halt,
                DispatchPolicy::SkipBlocked => Step::Skip,
            };
        }

        self.fired += 1;
        match self.policy {
            DispatchPolicy::FirstMatch => Step::FireAndHalt,
            DispatchPolicy::HaltOnBlocked | DispatchPolicy::SkipBlocked => Step::Fire,
        }
    }

    pub fn outcome(&self) -> Dispatch {
        if self.fired > 0 {
            Dispatch::Fired(self.fired)
        } else if self.blocked {
            Dispatch::Blocked
        } else {
            Dispatch::NoMatch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(policy: DispatchPolicy, guards: &[bool]) -> (Vec<Step>, Dispatch) {
        let mut scan = Scan::new(policy);
        let mut steps = Vec::new();
        for &allowed in guards {
            let step = scan.on_match(allowed);
            steps.push(step);
            if matches!(step, Step::Halt | Step::FireAndHalt) {
                break;
            }
        }
        (steps, scan.outcome())
    }

    #[test]
    fn empty_scan_is_no_match() {
        let (steps, outcome) = run(DispatchPolicy::HaltOnBlocked, &[]);
        assert!(steps.is_empty());
        assert_eq!(outcome, Dispatch::NoMatch);
    }

    #[test]
    fn halt_on_blocked_halts_on_first_refusal() {
        let (steps, outcome) = run(DispatchPolicy::HaltOnBlocked, &[false, true]);
        assert_eq!(steps, vec![Step::Halt]);
        assert_eq!(outcome, Dispatch::Blocked);
    }

    #[test]
    fn halt_on_blocked_fires_until_refusal() {
        let (steps, outcome) = run(DispatchPolicy::HaltOnBlocked, &[true, true, false, true]);
        assert_eq!(steps, vec![Step::Fire, Step::Fire, Step::Halt]);
        assert_eq!(outcome, Dispatch::Fired(2));
    }

    #[test]
    fn first_match_considers_one_transition() {
        let (steps, outcome) = run(DispatchPolicy::FirstMatch, &[true, true]);
        assert_eq!(steps, vec![Step::FireAndHalt]);
        assert_eq!(outcome, Dispatch::Fired(1));

        let (steps, outcome) = run(DispatchPolicy::FirstMatch, &[false, true]);
        assert_eq!(steps, vec![Step::Halt]);
        assert_eq!(outcome, Dispatch::Blocked);
    }

    #[test]
    fn skip_blocked_tries_every_match() {
        let (steps, outcome) = run(DispatchPolicy::SkipBlocked, &[false, true, false]);
        assert_eq!(steps, vec![Step::Skip, Step::Fire, Step::Skip]);
        assert_eq!(outcome, Dispatch::Fired(1));

        let (_, outcome) = run(DispatchPolicy::SkipBlocked, &[false, false]);
        assert_eq!(outcome, Dispatch::Blocked);
    }

    #[test]
    fn dispatch_reports_count() {
        assert_eq!(Dispatch::Fired(3).count(), 3);
        assert!(Dispatch::Fired(1).fired());
        assert_eq!(Dispatch::Blocked.count(), 0);
        assert!(!Dispatch::NoMatch.fired());
        assert!(!Dispatch::Uninitialized.fired());
    }
}
