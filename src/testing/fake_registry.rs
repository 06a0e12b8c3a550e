use crate::{runtime::ThreadRegistry, testing::FakeUnit};

/// Registry enumerating a fixed list of [`FakeUnit`]s in insertion order.
#[derive(Debug, Clone, Default)]
pub struct FakeRegistry {
    units: Vec<FakeUnit>,
    panicking: bool,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(mut self, unit: FakeUnit) -> Self {
        self.units.push(unit);
        self
    }

    /// Enumeration itself panics.
    pub fn panicking(mut self) -> Self {
        self.panicking = true;
        self
    }
}

impl ThreadRegistry for FakeRegistry {
    type Unit = FakeUnit;

    fn live_units(&self) -> Vec<FakeUnit> {
        if self.panicking {
            panic!("thread list unavailable");
        }
        self.units.clone()
    }
}
