//! Tag-path selectors such as `FAMC.HUSB.NAME:full`.

/// A dot-separated path of tags with an optional `:format` on the last segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    segments: Vec<String>,
    format: Option<String>,
}

impl Selector {
    /// Parse a selector. Format suffixes on intermediate segments are dropped.
    pub fn parse(selector: &str) -> Self {
        let mut format = None;
        let parts: Vec<&str> = selector.split('.').collect();
        let last = parts.len().saturating_sub(1);
        let segments = parts
            .iter()
            .enumerate()
            .filter_map(|(idx, part)| {
                let (tag, suffix) = match part.split_once(':') {
                    Some((tag, suffix)) => (tag, Some(suffix)),
                    None => (*part, None),
                };
                if idx == last {
                    format = suffix.filter(|s| !s.is_empty()).map(str::to_string);
                }
                let tag = tag.trim();
                (!tag.is_empty()).then(|| tag.to_string())
            })
            .collect();
        Self { segments, format }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The `:format` suffix, if any.
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// The final tag, which decides how the resolved value is rendered.
    pub fn last_tag(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("."))?;
        if let Some(format) = &self.format {
            write!(f, ":{}", format)?;
        }
        Ok(())
    }
}
