use std::backtrace::BacktraceStatus;

/// Call stack of an execution unit at one instant, innermost frame first.
///
/// Frames are plain descriptions; the dumper doesn't resolve symbols itself.
/// A host that can only observe the thread it is running on can use
/// [`Backtrace::current`] from inside that thread and hand the result over.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Backtrace {
    frames: Vec<String>,
}

impl Backtrace {
    pub fn from_frames<I, S>(frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            frames: frames.into_iter().map(Into::into).collect(),
        }
    }

    /// Capture the calling thread's stack via [`std::backtrace::Backtrace`].
    ///
    /// Returns `None` when the platform doesn't support stack capture.
    /// Each frame reads `symbol at file:line` when source locations are
    /// available, otherwise just the symbol.
    pub fn current() -> Option<Self> {
        let captured = std::backtrace::Backtrace::force_capture();
        match captured.status() {
            BacktraceStatus::Captured => Some(Self::parse(&captured.to_string())),
            _ => None,
        }
    }

    /// Parse the `Display` output of a std backtrace into frames.
    fn parse(text: &str) -> Self {
        let mut frames: Vec<String> = Vec::new();
        for line in text.lines().map(str::trim) {
            if let Some(location) = line.strip_prefix("at ") {
                if let Some(last) = frames.last_mut() {
                    last.push_str(" at ");
                    last.push_str(location);
                }
                continue;
            }
            let symbol = line
                .split_once(": ")
                .filter(|(index, _)| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()))
                .map(|(_, symbol)| symbol);
            if let Some(symbol) = symbol {
                frames.push(symbol.to_string());
            }
        }
        Self { frames }
    }

    #[inline]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Keep only the `max` innermost frames.
    pub fn truncated(mut self, max: Option<usize>) -> Self {
        if let Some(max) = max {
            self.frames.truncate(max);
        }
        self
    }
}

impl<S: Into<String>> FromIterator<S> for Backtrace {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_frames(iter)
    }
}
