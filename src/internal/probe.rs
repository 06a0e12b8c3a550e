use std::{
    any::Any,
    panic::{AssertUnwindSafe, catch_unwind},
};

/// Run one read against live runtime state, isolating panics.
///
/// A unit that exits mid-read, or a host accessor tripping over a
/// half-torn-down actor, must not take the dump down with it. Returns
/// `None` when `read` panicked so the caller can fall back to its
/// placeholder.
pub(crate) fn probe<T>(what: &'static str, read: impl FnOnce() -> T) -> Option<T> {
    match catch_unwind(AssertUnwindSafe(read)) {
        Ok(value) => Some(value),
        Err(payload) => {
            tracing::warn!(
                probe = what,
                reason = panic_message(payload.as_ref()),
                "Runtime probe panicked, using placeholder"
            );
            None
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_values_through() {
        assert_eq!(probe("value", || 7), Some(7));
        assert_eq!(probe("option", || None::<u8>), Some(None));
    }

    #[test]
    fn panics_become_none() {
        let value: Option<u8> = probe("panicking", || panic!("unit exited"));
        assert_eq!(value, None);
    }

    #[test]
    fn extracts_panic_messages() {
        let static_msg: Box<dyn Any + Send> = Box::new("gone");
        let owned_msg: Box<dyn Any + Send> = Box::new(String::from("torn down"));
        let other: Box<dyn Any + Send> = Box::new(3_u8);
        assert_eq!(panic_message(static_msg.as_ref()), "gone");
        assert_eq!(panic_message(owned_msg.as_ref()), "torn down");
        assert_eq!(panic_message(other.as_ref()), "unknown panic");
    }
}
