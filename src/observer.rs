//! stock [EliminationObserver] implementations
use tracing::info;

use crate::types::{EliminationObserver, SnakeId};

/// Reports every elimination as an `info` event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl EliminationObserver for TracingObserver {
    fn observe_elimination(&mut self, eater: SnakeId, eaten: SnakeId) {
        info!(%eater, %eaten, "snake {} eats snake {}", eater, eaten);
    }
}

/// Ignores eliminations
impl EliminationObserver for () {
    fn observe_elimination(&mut self, _: SnakeId, _: SnakeId) {}
}

/// One snake eating another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Elimination {
    #[allow(missing_docs)]
    pub eater: SnakeId,
    #[allow(missing_docs)]
    pub eaten: SnakeId,
}

/// Keeps every elimination in the order it happened
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EliminationLog {
    eliminations: Vec<Elimination>,
}

impl EliminationLog {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(missing_docs)]
    pub fn eliminations(&self) -> &[Elimination] {
        &self.eliminations
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.eliminations.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.eliminations.is_empty()
    }
}

impl EliminationObserver for EliminationLog {
    fn observe_elimination(&mut self, eater: SnakeId, eaten: SnakeId) {
        self.eliminations.push(Elimination { eater, eaten });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_order() {
        let mut log = EliminationLog::new();
        assert!(log.is_empty());
        log.observe_elimination(SnakeId(2), SnakeId(1));
        log.observe_elimination(SnakeId(2), SnakeId(0));
        assert_eq!(log.len(), 2);
        assert_eq!(
            log.eliminations(),
            &[
                Elimination {
                    eater: SnakeId(2),
                    eaten: SnakeId(1)
                },
                Elimination {
                    eater: SnakeId(2),
                    eaten: SnakeId(0)
                },
            ]
        );
    }
}
