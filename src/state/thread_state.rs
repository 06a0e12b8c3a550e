use crate::{Backtrace, Config, ObjectId, internal::probe, runtime::ExecutionUnit};

/// Copy of a thread the runtime doesn't manage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThreadState {
    pub id: ObjectId,
    pub backtrace: Option<Backtrace>,
}

impl ThreadState {
    pub fn capture<U: ExecutionUnit>(unit: &U, config: &Config) -> Self {
        Self {
            id: probe("unit.id", || unit.id()).unwrap_or(ObjectId::UNKNOWN),
            backtrace: probe("unit.backtrace", || unit.backtrace())
                .flatten()
                .map(|bt| bt.truncated(config.max_frames)),
        }
    }

    pub fn unresponsive(id: ObjectId) -> Self {
        Self {
            id,
            backtrace: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeUnit;

    #[test]
    fn copies_identity_and_backtrace() {
        let unit = FakeUnit::thread(0xabc).with_backtrace(["main", "run", "poll"]);
        let state = ThreadState::capture(&unit, &Config::default());
        assert_eq!(state.id, ObjectId::new(0xabc));
        assert_eq!(state.backtrace.map(|bt| bt.len()), Some(3));
    }

    #[test]
    fn exited_thread_has_no_backtrace() {
        let unit = FakeUnit::thread(0xabc).panicking_backtrace();
        let state = ThreadState::capture(&unit, &Config::default());
        assert_eq!(state, ThreadState::unresponsive(ObjectId::new(0xabc)));
    }
}
