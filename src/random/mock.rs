use super::UniformSource;
use std::collections::VecDeque;

/// Source that replays a fixed list of draws.
///
/// Each draw is clamped into the requested range. Once the script runs out
/// every draw returns the range's lower bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<i64>,
    draws: usize,
    requests: Vec<(i64, i64)>,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = i64>) -> Self {
        Self {
            script: script.into_iter().collect(),
            draws: 0,
            requests: Vec::new(),
        }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Ranges requested so far, in order
    pub fn requests(&self) -> &[(i64, i64)] {
        &self.requests
    }
}

impl UniformSource for ScriptedSource {
    fn uniform(&mut self, min: i64, max: i64) -> i64 {
        self.draws += 1;
        self.requests.push((min, max));
        self.script
            .pop_front()
            .map(|n| n.clamp(min, max))
            .unwrap_or(min)
    }
}
