//! Swipe deck state machine.
//!
//! `Idle -> Dragging -> (Committing | Idle)`, `Committing -> (Idle | Exhausted)`.
//! Every transition is a plain method on [`SwipeDeck`]; the component only
//! renders what these return.

use super::jobs::JobListing;

/// Displacement (px) past which a release commits the card.
pub const COMMIT_THRESHOLD: f64 = 100.0;
/// Displacement (px) past which a stamp is shown while dragging.
pub const STAMP_THRESHOLD: f64 = 50.0;
/// Degrees of rotation per pixel of displacement.
pub const ROTATION_PER_PX: f64 = 0.1;
/// Distance the card travels when it leaves the deck.
pub const EXIT_DISTANCE: f64 = 1000.0;
/// Delay between a commit and the next card appearing.
pub const ADVANCE_DELAY_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Apply,
    Pass,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Apply => "apply",
            Decision::Pass => "pass",
        }
    }

    fn sign(self) -> f64 {
        match self {
            Decision::Apply => 1.0,
            Decision::Pass => -1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    pub origin_x: f64,
    pub last_x: f64,
}

impl Gesture {
    pub fn displacement(&self) -> f64 {
        self.last_x - self.origin_x
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Dragging(Gesture),
    Committing(Decision),
    Exhausted,
}

/// Visual state of the top card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub offset_x: f64,
    pub rotation_deg: f64,
    pub stamp: Option<Decision>,
}

impl CardPose {
    pub const NEUTRAL: CardPose = CardPose {
        offset_x: 0.0,
        rotation_deg: 0.0,
        stamp: None,
    };

    pub fn for_displacement(dx: f64) -> Self {
        let stamp = if dx > STAMP_THRESHOLD {
            Some(Decision::Apply)
        } else if dx < -STAMP_THRESHOLD {
            Some(Decision::Pass)
        } else {
            None
        };
        Self {
            offset_x: dx,
            rotation_deg: dx * ROTATION_PER_PX,
            stamp,
        }
    }

    /// Off-screen pose for a committed card. The stamp is carried over from
    /// the drag, so a button press leaves the card unstamped.
    pub fn exit(decision: Decision, stamp: Option<Decision>) -> Self {
        let distance = EXIT_DISTANCE * decision.sign();
        Self {
            offset_x: distance,
            rotation_deg: distance * ROTATION_PER_PX,
            stamp,
        }
    }

    pub fn css_transform(&self) -> String {
        if *self == Self::NEUTRAL {
            return String::new();
        }
        format!(
            "transform: translateX({}px) rotate({}deg);",
            self.offset_x, self.rotation_deg
        )
    }
}

/// Emitted once per committed card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Committed {
    pub decision: Decision,
    pub index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Release {
    /// Gesture did not cross the threshold, card is back in place.
    SnapBack,
    Commit(Committed),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwipeDeck {
    jobs: &'static [JobListing],
    cursor: usize,
    phase: Phase,
    pose: CardPose,
}

impl SwipeDeck {
    pub fn new(jobs: &'static [JobListing]) -> Self {
        let phase = if jobs.is_empty() {
            Phase::Exhausted
        } else {
            Phase::Idle
        };
        Self {
            jobs,
            cursor: 0,
            phase,
            pose: CardPose::NEUTRAL,
        }
    }

    /// Index of the card on top of the deck.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pose(&self) -> CardPose {
        self.pose
    }

    pub fn current(&self) -> Option<&'static JobListing> {
        match self.phase {
            Phase::Exhausted => None,
            _ => self.jobs.get(self.cursor),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Exhausted
    }

    /// Manual pass/apply buttons are live until the deck runs out.
    pub fn controls_enabled(&self) -> bool {
        !self.is_exhausted()
    }

    pub fn start(&mut self, x: f64) -> bool {
        if self.phase != Phase::Idle || self.current().is_none() {
            return false;
        }
        self.phase = Phase::Dragging(Gesture {
            origin_x: x,
            last_x: x,
        });
        true
    }

    pub fn drag_to(&mut self, x: f64) -> Option<CardPose> {
        let Phase::Dragging(mut gesture) = self.phase else {
            return None;
        };
        gesture.last_x = x;
        self.phase = Phase::Dragging(gesture);
        self.pose = CardPose::for_displacement(gesture.displacement());
        Some(self.pose)
    }

    pub fn release(&mut self) -> Option<Release> {
        let Phase::Dragging(gesture) = self.phase else {
            return None;
        };
        let dx = gesture.displacement();

        if dx.abs() > COMMIT_THRESHOLD {
            let decision = if dx > 0.0 {
                Decision::Apply
            } else {
                Decision::Pass
            };
            return self.commit(decision).map(Release::Commit);
        }

        self.phase = Phase::Idle;
        self.pose = CardPose::NEUTRAL;
        Some(Release::SnapBack)
    }

    /// Locks the top card into `decision`. Returns `None` when there is no
    /// card or a commit is already playing out.
    pub fn commit(&mut self, decision: Decision) -> Option<Committed> {
        match self.phase {
            Phase::Idle | Phase::Dragging(_) => {}
            Phase::Committing(_) | Phase::Exhausted => return None,
        }
        self.current()?;

        self.phase = Phase::Committing(decision);
        self.pose = CardPose::exit(decision, self.pose.stamp);
        Some(Committed {
            decision,
            index: self.cursor,
        })
    }

    /// Moves past the committed card. Returns the new top card, if any.
    pub fn advance(&mut self) -> Option<&'static JobListing> {
        if !matches!(self.phase, Phase::Committing(_)) {
            return None;
        }
        self.cursor += 1;
        self.pose = CardPose::NEUTRAL;
        self.phase = if self.cursor >= self.jobs.len() {
            Phase::Exhausted
        } else {
            Phase::Idle
        };
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::jobs::DEMO_JOBS;

    fn drag(deck: &mut SwipeDeck, dx: f64) -> Option<Release> {
        assert!(deck.start(200.0));
        deck.drag_to(200.0 + dx);
        deck.release()
    }

    #[test]
    fn pose_follows_displacement() {
        let mut deck = SwipeDeck::new(&DEMO_JOBS);
        deck.start(10.0);

        let pose = deck.drag_to(40.0).unwrap();
        assert_eq!(pose.offset_x, 30.0);
        assert!((pose.rotation_deg - 3.0).abs() < 1e-9);
        assert_eq!(pose.stamp, None);

        assert_eq!(deck.drag_to(70.0).unwrap().stamp, Some(Decision::Apply));
        assert_eq!(deck.drag_to(-50.0).unwrap().stamp, Some(Decision::Pass));
        // exactly on the stamp threshold shows nothing
        assert_eq!(deck.drag_to(60.0).unwrap().stamp, None);
    }

    #[test]
    fn short_release_snaps_back() {
        for dx in [0.0, 30.0, -99.5, 100.0, -100.0] {
            let mut deck = SwipeDeck::new(&DEMO_JOBS);
            assert_eq!(drag(&mut deck, dx), Some(Release::SnapBack));
            assert_eq!(deck.phase(), Phase::Idle);
            assert_eq!(deck.pose(), CardPose::NEUTRAL);
            assert_eq!(deck.cursor(), 0);
            assert_eq!(deck.advance(), None);
            assert_eq!(deck.cursor(), 0);
        }
    }

    #[test]
    fn long_release_commits_in_sign_direction() {
        let mut deck = SwipeDeck::new(&DEMO_JOBS);
        let release = drag(&mut deck, 100.5).unwrap();
        assert_eq!(
            release,
            Release::Commit(Committed {
                decision: Decision::Apply,
                index: 0
            })
        );
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.advance().map(|j| j.company), Some("Microsoft"));
        assert_eq!(deck.cursor(), 1);

        let release = drag(&mut deck, -250.0).unwrap();
        assert_eq!(
            release,
            Release::Commit(Committed {
                decision: Decision::Pass,
                index: 1
            })
        );
        deck.advance();
        assert_eq!(deck.cursor(), 2);
    }

    #[test]
    fn committing_card_ignores_gestures_and_second_commit() {
        let mut deck = SwipeDeck::new(&DEMO_JOBS);
        deck.commit(Decision::Pass).unwrap();

        assert!(!deck.start(0.0));
        assert_eq!(deck.drag_to(500.0), None);
        assert_eq!(deck.release(), None);
        assert_eq!(deck.commit(Decision::Apply), None);
        assert_eq!(deck.pose(), CardPose::exit(Decision::Pass, None));
    }

    #[test]
    fn manual_commit_interrupts_drag() {
        let mut deck = SwipeDeck::new(&DEMO_JOBS);
        deck.start(0.0);
        deck.drag_to(20.0);
        let committed = deck.commit(Decision::Apply).unwrap();
        assert_eq!(committed.index, 0);
        assert_eq!(deck.release(), None);
    }

    #[test]
    fn exhausts_after_last_card() {
        let mut deck = SwipeDeck::new(&DEMO_JOBS);
        for i in 0..DEMO_JOBS.len() {
            assert!(deck.controls_enabled());
            let committed = deck.commit(Decision::Apply).unwrap();
            assert_eq!(committed.index, i);
            deck.advance();
        }

        assert!(deck.is_exhausted());
        assert!(!deck.controls_enabled());
        assert_eq!(deck.current(), None);
        assert_eq!(deck.commit(Decision::Pass), None);
        assert_eq!(deck.advance(), None);
        assert!(!deck.start(0.0));
        assert_eq!(deck.cursor(), DEMO_JOBS.len());
    }

    #[test]
    fn button_commit_shows_no_stamp() {
        let mut deck = SwipeDeck::new(&DEMO_JOBS);
        deck.commit(Decision::Apply).unwrap();
        assert_eq!(deck.pose().stamp, None);
        assert_eq!(deck.pose().offset_x, EXIT_DISTANCE);
    }

    #[test]
    fn dragged_commit_keeps_its_stamp() {
        let mut deck = SwipeDeck::new(&DEMO_JOBS);
        drag(&mut deck, -150.0);
        assert_eq!(deck.pose().stamp, Some(Decision::Pass));
        assert_eq!(deck.pose().offset_x, -EXIT_DISTANCE);
    }

    #[test]
    fn timing_constants() {
        assert_eq!(ADVANCE_DELAY_MS, 500);
        assert_eq!(COMMIT_THRESHOLD, 100.0);
        assert_eq!(STAMP_THRESHOLD, 50.0);
    }

    #[test]
    fn empty_deck_starts_exhausted() {
        let mut deck = SwipeDeck::new(&[]);
        assert!(deck.is_exhausted());
        assert_eq!(deck.commit(Decision::Apply), None);
    }

    #[test]
    fn exit_pose_leaves_screen() {
        let pose = CardPose::exit(Decision::Pass, None);
        assert_eq!(pose.offset_x, -1000.0);
        assert_eq!(pose.rotation_deg, -100.0);
        assert_eq!(
            pose.css_transform(),
            "transform: translateX(-1000px) rotate(-100deg);"
        );
        assert_eq!(CardPose::NEUTRAL.css_transform(), "");
    }
}
