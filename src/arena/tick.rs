use tracing::{debug, instrument, trace};

use super::Arena;
use crate::error::ArenaError;
use crate::snake::Snake;
use crate::types::EliminationObserver;

impl Arena {
    /// Plays one tick and reports whether the match is over.
    ///
    /// A match is over once the step limit has been used up (no winner) or once
    /// a single snake is left (it becomes the winner). Otherwise every snake
    /// steps, in registration order. A snake that has just stepped eats every
    /// snake that stepped before it in this tick and now has a body segment
    /// under its head. Snakes that step later are not checked, so the outcome
    /// depends on registration order.
    ///
    /// Ticking an arena with no snakes is a usage error.
    #[instrument(level = "trace", skip_all, fields(step = self.steps))]
    pub fn tick<O: EliminationObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<bool, ArenaError> {
        if self.steps >= self.step_limit {
            debug!(steps = self.steps, "step limit reached, nobody wins");
            return Ok(true);
        }

        match self.snakes.len() {
            0 => Err(ArenaError::NoSnakes),
            1 => {
                let winner = self.snakes[0].id();
                debug!(%winner, steps = self.steps, "last snake standing");
                self.winner = Some(winner);
                Ok(true)
            }
            _ => {
                self.step_snakes(observer);
                self.steps += 1;
                trace!(alive = self.snakes.len(), "tick done");
                Ok(false)
            }
        }
    }

    /// ticks until the match is over and returns the winner, if any
    pub fn run<O: EliminationObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<Option<&Snake>, ArenaError> {
        while !self.tick(&mut *observer)? {}
        Ok(self.winner())
    }

    fn step_snakes<O: EliminationObserver + ?Sized>(&mut self, observer: &mut O) {
        let mut eaten = vec![false; self.snakes.len()];

        for current in 0..self.snakes.len() {
            self.snakes[current].step();
            let eater = &self.snakes[current];
            for (earlier, prey) in self.snakes[..current].iter().enumerate() {
                if eaten[earlier] || !eater.is_eating_another_snake(prey) {
                    continue;
                }
                eaten[earlier] = true;
                debug!(eater = %eater.id(), eaten = %prey.id(), "snake eaten");
                observer.observe_elimination(eater.id(), prey.id());
            }
        }

        let snakes = std::mem::take(&mut self.snakes);
        for (snake, was_eaten) in snakes.into_iter().zip(eaten) {
            if was_eaten {
                self.dead_snakes.insert(snake.id(), snake);
            } else {
                self.snakes.push(snake);
            }
        }
    }
}
