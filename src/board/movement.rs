//! Pawn move legality.
//!
//! The offset is classified once into a [`MoveKind`]; each kind has one rule.
//! Directions never get their own code paths.

use super::state::Board;
use crate::core::{Cell, Direction, MoveKind, PlayerId, RuleResult, RuleViolation};

impl Board {
    /// Check a move for `mover` as if its pawn stood on `from`.
    ///
    /// The opponent is taken where it really is. This lets the reachability
    /// search walk a cursor around without touching the live pawn.
    pub fn check_pawn_move_from(&self, mover: PlayerId, from: Cell, target: Cell) -> RuleResult<MoveKind> {
        if !target.in_bounds() {
            return Err(RuleViolation::OutOfBounds(target));
        }
        let kind = MoveKind::classify(from, target).ok_or(RuleViolation::IllegalJumpGeometry(target))?;
        let opponent = self.pawn(mover.opponent());

        match kind {
            MoveKind::Step(dir) => self.check_step(from, dir, target, opponent),
            MoveKind::Jump(dir) => self.check_jump(from, dir, target, opponent),
            MoveKind::Diagonal(vertical, horizontal) => {
                self.check_diagonal(from, [vertical, horizontal], target, opponent)
            }
        }?;

        Ok(kind)
    }

    fn check_step(&self, from: Cell, dir: Direction, target: Cell, opponent: Cell) -> RuleResult<()> {
        if !self.is_open(from, dir) || target == opponent {
            return Err(RuleViolation::Blocked(target));
        }
        Ok(())
    }

    fn check_jump(&self, from: Cell, dir: Direction, target: Cell, opponent: Cell) -> RuleResult<()> {
        if from.step(dir) != Some(opponent) {
            return Err(RuleViolation::IllegalJumpGeometry(target));
        }
        if !self.is_open(from, dir) || !self.is_open(opponent, dir) {
            return Err(RuleViolation::Blocked(target));
        }
        Ok(())
    }

    /// A diagonal is two half-moves: towards the opponent, then sideways
    /// around it. Either ordering of the two directions may apply.
    fn check_diagonal(&self, from: Cell, dirs: [Direction; 2], target: Cell, opponent: Cell) -> RuleResult<()> {
        let mut blocked = false;

        for (toward, around) in [(dirs[0], dirs[1]), (dirs[1], dirs[0])] {
            if from.step(toward) != Some(opponent) {
                continue;
            }
            if !self.is_open(from, toward) || !self.is_open(opponent, around) {
                blocked = true;
                continue;
            }
            // Straight jump still available: no diagonal.
            if self.is_open(opponent, toward) {
                continue;
            }
            return Ok(());
        }

        if blocked {
            Err(RuleViolation::Blocked(target))
        } else {
            Err(RuleViolation::IllegalJumpGeometry(target))
        }
    }
}
