//! Startup/render state machine.
//!
//! ```text
//! Uninitialized -> Initializing -> Ready -> Rendering
//!        \______________\____________\_________\____> Failed
//! ```
//!
//! Phases only move forward. `Failed` is terminal, and frames are driven only
//! while `Rendering`.

/// Where the program is in its one-way lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Phase {
    #[default]
    Uninitialized,
    /// Adapter, device and surface are being acquired.
    Initializing,
    /// Surface is configured; the pipeline is being built.
    Ready,
    /// The frame loop is running.
    Rendering,
    Failed,
}

impl Phase {
    fn rank(self) -> u8 {
        match self {
            Phase::Uninitialized => 0,
            Phase::Initializing => 1,
            Phase::Ready => 2,
            Phase::Rendering => 3,
            Phase::Failed => 4,
        }
    }

    /// Moves to `next` if that is the immediate successor (or `Failed`).
    ///
    /// Any other request leaves the phase unchanged and returns `false`.
    pub fn advance(&mut self, next: Phase) -> bool {
        let allowed = match next {
            Phase::Failed => *self != Phase::Failed,
            _ => next.rank() == self.rank() + 1 && *self != Phase::Failed,
        };

        if allowed {
            log::debug!("phase {:?} -> {:?}", self, next);
            *self = next;
        } else {
            log::debug!("ignored phase change {:?} -> {:?}", self, next);
        }
        allowed
    }

    pub fn fail(&mut self) -> bool {
        self.advance(Phase::Failed)
    }

    pub fn is_rendering(self) -> bool {
        self == Phase::Rendering
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_rendering() {
        let mut p = Phase::default();
        assert!(p.advance(Phase::Initializing));
        assert!(p.advance(Phase::Ready));
        assert!(p.advance(Phase::Rendering));
        assert!(p.is_rendering());
    }

    #[test]
    fn skipping_a_phase_is_refused() {
        let mut p = Phase::Uninitialized;
        assert!(!p.advance(Phase::Ready));
        assert!(!p.advance(Phase::Rendering));
        assert_eq!(p, Phase::Uninitialized);
    }

    #[test]
    fn no_transition_goes_backwards() {
        let mut p = Phase::Rendering;
        for back in [Phase::Uninitialized, Phase::Initializing, Phase::Ready, Phase::Rendering] {
            assert!(!p.advance(back));
        }
        assert_eq!(p, Phase::Rendering);
    }

    #[test]
    fn failure_bypasses_rendering() {
        for from in [Phase::Uninitialized, Phase::Initializing, Phase::Ready] {
            let mut p = from;
            assert!(p.fail());
            assert_eq!(p, Phase::Failed);
            assert!(!p.is_rendering());
        }
    }

    #[test]
    fn failed_is_terminal() {
        let mut p = Phase::Failed;
        assert!(!p.fail());
        assert!(!p.advance(Phase::Rendering));
        assert!(!p.advance(Phase::Uninitialized));
        assert!(p.is_terminal());
    }
}
