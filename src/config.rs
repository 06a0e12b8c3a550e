use std::{borrow::Cow, time::Duration};

/// Capture and rendering configuration.
///
/// Controls how deep backtraces are kept, how long a single unit may take
/// under [`Snapshot::capture_bounded`](crate::Snapshot::capture_bounded),
/// and the labels used in the text report. Use the builder pattern to
/// customize, or use [`Default`] for the stock report format.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use stack_dump::Config;
///
/// let config = Config::default()
///     .with_actor_label("maiko::Actor")    // Header prefix for actor blocks
///     .with_max_frames(32)                 // Keep the top 32 frames only
///     .with_unit_timeout(Duration::from_millis(200));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Kind label printed at the start of every actor header.
    /// Default: `Actor`
    pub actor_label: Cow<'static, str>,

    /// Kind label printed before the bound subject of a cell actor.
    /// Default: `Cell`
    pub cell_label: Cow<'static, str>,

    /// Prefix written before every backtrace frame.
    /// Default: a single tab.
    pub indent: Cow<'static, str>,

    /// Maximum number of frames kept per backtrace at capture time.
    /// Default: `None` (keep everything the host reports).
    pub max_frames: Option<usize>,

    /// Upper bound for capturing a single execution unit in
    /// [`Snapshot::capture_bounded`](crate::Snapshot::capture_bounded).
    /// The plain synchronous capture ignores it.
    /// Default: 1 s
    pub unit_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            actor_label: Cow::Borrowed("Actor"),
            cell_label: Cow::Borrowed("Cell"),
            indent: Cow::Borrowed("\t"),
            max_frames: None,
            unit_timeout: Duration::from_secs(1),
        }
    }
}

impl Config {
    /// Set the label printed in front of every actor id.
    pub fn with_actor_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.actor_label = label.into();
        self
    }

    /// Set the label printed in front of a cell's subject id.
    pub fn with_cell_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.cell_label = label.into();
        self
    }

    /// Set the indentation unit used for backtrace frames.
    pub fn with_indent(mut self, indent: impl Into<Cow<'static, str>>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Keep at most `frames` frames (innermost first) of every backtrace.
    ///
    /// Deep recursion in a runaway actor can produce thousands of frames;
    /// truncating at capture time keeps the snapshot small.
    pub fn with_max_frames(mut self, frames: usize) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Set the per-unit time limit used by bounded capture.
    pub fn with_unit_timeout(mut self, timeout: Duration) -> Self {
        self.unit_timeout = timeout;
        self
    }
}
