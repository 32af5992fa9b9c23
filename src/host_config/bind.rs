// ABOUTME: Fluent producer of bind-mount strings for the Binds field.
// ABOUTME: Formats "dest", "src:dest" or "src:dest:ro" from either entry order.

use std::fmt;

/// A formatted bind mount, e.g. `/host/data:/data:ro`.
///
/// Start from either side of the mount; both orders format identically:
///
/// ```
/// use hostconfig::Bind;
///
/// let a = Bind::to("/data").from("/srv/data").read_only(true).build();
/// let b = Bind::from("/srv/data").to("/data").read_only(true).build();
/// assert_eq!(a.to_string(), "/srv/data:/data:ro");
/// assert_eq!(a, b);
/// ```
///
/// Building with only one side given leaves the other unset: a bind with no
/// host side formats as the bare container path, and one with no container
/// side formats as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bind {
    to: Option<String>,
    from: Option<String>,
    read_only: bool,
}

impl Bind {
    /// Begin with the path inside the container.
    pub fn to(to: impl Into<String>) -> BindTo {
        BindTo { to: to.into() }
    }

    /// Begin with the host path or volume name.
    #[allow(clippy::should_implement_trait)]
    pub fn from(from: impl Into<String>) -> BindFrom {
        BindFrom { from: from.into() }
    }
}

impl fmt::Display for Bind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to = match self.to.as_deref() {
            None | Some("") => return Ok(()),
            Some(to) => to,
        };

        match self.from.as_deref() {
            None | Some("") => write!(f, "{}", to),
            Some(from) if self.read_only => write!(f, "{}:{}:ro", from, to),
            Some(from) => write!(f, "{}:{}", from, to),
        }
    }
}

impl From<Bind> for String {
    fn from(bind: Bind) -> Self {
        bind.to_string()
    }
}

impl From<&Bind> for String {
    fn from(bind: &Bind) -> Self {
        bind.to_string()
    }
}

/// A bind started from its container path.
#[derive(Debug, Clone)]
pub struct BindTo {
    to: String,
}

impl BindTo {
    pub fn from(self, from: impl Into<String>) -> BindBuilder {
        BindBuilder {
            to: Some(self.to),
            from: Some(from.into()),
            read_only: false,
        }
    }

    pub fn build(self) -> Bind {
        Bind {
            to: Some(self.to),
            from: None,
            read_only: false,
        }
    }
}

/// A bind started from its host path.
#[derive(Debug, Clone)]
pub struct BindFrom {
    from: String,
}

impl BindFrom {
    pub fn to(self, to: impl Into<String>) -> BindBuilder {
        BindBuilder {
            to: Some(to.into()),
            from: Some(self.from),
            read_only: false,
        }
    }

    pub fn build(self) -> Bind {
        Bind {
            to: None,
            from: Some(self.from),
            read_only: false,
        }
    }
}

/// Both sides of a bind are known; either may still be replaced.
#[derive(Debug, Clone)]
pub struct BindBuilder {
    to: Option<String>,
    from: Option<String>,
    read_only: bool,
}

impl BindBuilder {
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn build(self) -> Bind {
        Bind {
            to: self.to,
            from: self.from,
            read_only: self.read_only,
        }
    }
}
