use std::fmt;

/// Descriptive copy of the metadata a runtime attaches to a task.
///
/// Task metadata is arbitrary and owned by the running task, so it is
/// flattened to text when the task record is copied. Nothing in a
/// `TaskMeta` points back into the live runtime.
///
/// ```rust
/// use stack_dump::TaskMeta;
///
/// let meta = TaskMeta::default()
///     .field("method", "handle_event")
///     .field("dangerous_suspend", false);
/// assert_eq!(meta.to_string(), "{method: handle_event, dangerous_suspend: false}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TaskMeta {
    /// Nothing attached.
    #[default]
    Empty,
    /// Free-form description, e.g. a `Debug` rendering.
    Text(String),
    /// Ordered key/value pairs.
    Fields(Vec<(String, String)>),
}

impl TaskMeta {
    pub fn text(text: impl Into<String>) -> Self {
        TaskMeta::Text(text.into())
    }

    /// Metadata rendered with the value's `Debug` implementation.
    pub fn debug(value: &impl fmt::Debug) -> Self {
        TaskMeta::Text(format!("{value:?}"))
    }

    /// Append a key/value pair, turning the metadata into [`TaskMeta::Fields`].
    ///
    /// Existing free-form text is kept under the `text` key.
    pub fn field(self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        let mut fields = match self {
            TaskMeta::Empty => Vec::new(),
            TaskMeta::Text(text) => vec![("text".to_string(), text)],
            TaskMeta::Fields(fields) => fields,
        };
        fields.push((key.into(), value.to_string()));
        TaskMeta::Fields(fields)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TaskMeta::Empty)
    }
}

impl fmt::Display for TaskMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskMeta::Empty => f.write_str("(none)"),
            TaskMeta::Text(text) => f.write_str(text),
            TaskMeta::Fields(fields) => {
                f.write_str("{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
