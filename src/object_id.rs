use std::fmt;

/// Opaque identity of an actor, subject or thread.
///
/// The dumper never interprets the value; it only prints it as hex. Hosts
/// that keep their own numeric ids wrap them directly, others can derive
/// one from an address with [`ObjectId::of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectId(u64);

impl ObjectId {
    /// Identity used when the real one couldn't be read.
    pub const UNKNOWN: ObjectId = ObjectId(0);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Identity derived from the address of `value`.
    ///
    /// Only meaningful while `value` stays where it is, which holds for
    /// heap-allocated runtime objects behind an `Arc` or `Box`.
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Self(value as *const T as *const () as usize as u64)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ObjectId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::LowerHex for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn display_is_prefixed_lower_hex() {
        assert_eq!(ObjectId::new(0xBEEF).to_string(), "0xbeef");
        assert_eq!(format!("{:x}", ObjectId::new(255)), "ff");
        assert_eq!(ObjectId::UNKNOWN.to_string(), "0x0");
    }

    #[test]
    fn of_is_stable_for_the_same_allocation() {
        let value = Arc::new(42);
        let other = Arc::new(42);
        assert_eq!(ObjectId::of(&*value), ObjectId::of(&*value.clone()));
        assert_ne!(ObjectId::of(&*value), ObjectId::of(&*other));
    }
}
