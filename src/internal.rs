mod probe;

pub(crate) use probe::probe;
