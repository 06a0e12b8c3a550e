use std::borrow::Cow;

use crate::{ObjectId, runtime::Subject};

/// Subject bound to a [`FakeActor`](super::FakeActor) cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeSubject {
    id: u64,
    type_name: Cow<'static, str>,
}

impl FakeSubject {
    pub fn new(id: u64, type_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id,
            type_name: type_name.into(),
        }
    }
}

impl Subject for FakeSubject {
    fn id(&self) -> ObjectId {
        ObjectId::new(self.id)
    }

    fn type_name(&self) -> Cow<'static, str> {
        self.type_name.clone()
    }
}
