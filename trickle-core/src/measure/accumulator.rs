/// Running counts owned by the scheduler thread.
///
/// `current` collects everything ingested since the last tick. `lifetime`
/// only ever changes through [`Accumulator::fold`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Accumulator {
    current: u64,
    lifetime: u64,
    matches: u64,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulate(&mut self, n: u64) {
        self.current += n;
    }

    pub fn record_matches(&mut self, n: u64) {
        self.matches += n;
    }

    /// Move the current interval into the lifetime total. Returns the amount moved.
    pub fn fold(&mut self) -> u64 {
        let moved = self.current;
        self.lifetime += moved;
        self.current = 0;
        moved
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn lifetime(&self) -> u64 {
        self.lifetime
    }

    pub fn matches(&self) -> u64 {
        self.matches
    }
}
