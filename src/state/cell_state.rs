use crate::{ObjectId, runtime::Subject};

/// Copy of the subject a cell actor is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellState {
    pub subject_id: ObjectId,
    /// Type name of the subject, e.g. `Worker`.
    pub subject_type: String,
}

impl CellState {
    pub fn capture<S: Subject>(subject: &S) -> Self {
        Self {
            subject_id: subject.id(),
            subject_type: subject.type_name().into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSubject;

    #[test]
    fn copies_identity_and_type() {
        let cell = CellState::capture(&FakeSubject::new(0x2a, "Worker"));
        assert_eq!(cell.subject_id, ObjectId::new(0x2a));
        assert_eq!(cell.subject_type, "Worker");
    }
}
