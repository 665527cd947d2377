use std::fmt;

/// Prefix of every tag this client puts on remote torrents.
pub const TAG_PREFIX: &str = "alist";

/// Caller-chosen identifier of a download job.
///
/// A job is correlated with at most one remote torrent through the tag returned by
/// [`JobTag::remote_tag`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobTag(String);

impl JobTag {
    /// Wraps a job identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw job identifier.
    pub fn id(&self) -> &str {
        &self.0
    }

    /// The tag used on the daemon, both when submitting and when looking up.
    pub fn remote_tag(&self) -> String {
        format!("{TAG_PREFIX}-{}", self.0)
    }
}

impl fmt::Display for JobTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobTag {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for JobTag {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::JobTag;

    #[test]
    fn remote_tag_is_prefixed() {
        assert_eq!(JobTag::new("1234").remote_tag(), "alist-1234");
    }

    #[test]
    fn remote_tag_is_stable() {
        let job = JobTag::from("task-7");
        assert_eq!(job.remote_tag(), job.clone().remote_tag());
        assert_eq!(job.id(), "task-7");
        assert_eq!(job.to_string(), "task-7");
    }
}
