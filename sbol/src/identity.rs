//! Identifier resolution: minting and parsing compliant URIs.
//!
//! A compliant identity has the shape `prefix/displayId/version`, where the
//! prefix is the homespace (optionally followed by the class name when typed
//! URIs are on) for top-level objects, or the parent's persistent identity for
//! child objects. The persistent identity is the identity without its version.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::kinds::ObjectKind;
use crate::model::Uri;

/// Version assigned when none is supplied.
pub const DEFAULT_VERSION: &str = "1";

/// Local name used when an object is created without one.
pub const DEFAULT_DISPLAY_ID: &str = "example";

const DISPLAY_ID_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";
const VERSION_PATTERN: &str = r"^[0-9]+[A-Za-z0-9_-]*(\.[0-9]+[A-Za-z0-9_-]*)*$";
const SCHEME_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9+.-]*:";

fn matches(cell: &'static OnceLock<Option<Regex>>, source: &str, text: &str) -> bool {
    cell.get_or_init(|| Regex::new(source).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(text))
}

/// True if `id` is a valid SBOL displayId.
#[must_use]
pub fn is_valid_display_id(id: &str) -> bool {
    static CELL: OnceLock<Option<Regex>> = OnceLock::new();
    matches(&CELL, DISPLAY_ID_PATTERN, id)
}

/// True if `version` is a valid SBOL version string.
#[must_use]
pub fn is_valid_version(version: &str) -> bool {
    static CELL: OnceLock<Option<Regex>> = OnceLock::new();
    matches(&CELL, VERSION_PATTERN, version)
}

/// True if `name` carries a URI scheme (and is therefore used verbatim).
#[must_use]
pub fn is_absolute(name: &str) -> bool {
    static CELL: OnceLock<Option<Regex>> = OnceLock::new();
    matches(&CELL, SCHEME_PATTERN, name)
}

/// The identity fields of one object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifiers {
    /// Full identity URI.
    pub identity: Uri,
    /// Version-independent identity.
    pub persistent_identity: Uri,
    /// Short local name; `None` outside compliant mode.
    pub display_id: Option<String>,
    /// Version string.
    pub version: Option<String>,
}

/// The namespace new identities are minted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    base: String,
    typed: bool,
    compliant: bool,
    version: Option<String>,
}

impl Scope {
    /// Scope for top-level objects: the configured homespace.
    #[must_use]
    pub fn top_level(config: &Config) -> Self {
        Self {
            base: config.homespace.trim_end_matches('/').to_string(),
            typed: config.typed_uris,
            compliant: config.compliant_uris,
            version: None,
        }
    }

    /// Scope for children of an object with the given persistent identity.
    /// Children inherit the parent's version unless given their own.
    #[must_use]
    pub fn child_of(persistent_identity: &str, version: Option<&str>, compliant: bool) -> Self {
        Self {
            base: persistent_identity.to_string(),
            typed: false,
            compliant,
            version: version.map(str::to_string),
        }
    }

    /// The URI prefix children are minted under.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Whether objects minted here are compliant.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.compliant
    }

    /// Computes identifiers for a new object named `name`.
    ///
    /// In compliant mode `name` must be a valid displayId (or a compliant
    /// absolute URI). Otherwise an absolute `name` is taken verbatim and a
    /// relative one is appended to the scope base.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an invalid displayId or version
    /// in compliant mode.
    pub fn mint(&self, kind: ObjectKind, name: &str, version: Option<&str>) -> Result<Identifiers> {
        let name = if name.is_empty() {
            DEFAULT_DISPLAY_ID
        } else {
            name
        };
        if self.compliant {
            self.mint_compliant(kind, name, version)
        } else {
            Ok(self.mint_open(name, version))
        }
    }

    fn mint_compliant(
        &self,
        kind: ObjectKind,
        name: &str,
        version: Option<&str>,
    ) -> Result<Identifiers> {
        if is_absolute(name) {
            let parsed = parse(name);
            return match (&parsed.display_id, &parsed.version) {
                (Some(_), Some(_)) => Ok(parsed),
                _ => Err(Error::InvalidArgument(format!(
                    "{name} is not a compliant URI of the form prefix/displayId/version"
                ))),
            };
        }
        if !is_valid_display_id(name) {
            return Err(Error::InvalidArgument(format!(
                "{name:?} is not a valid displayId"
            )));
        }
        let version = version
            .or(self.version.as_deref())
            .unwrap_or(DEFAULT_VERSION);
        if !is_valid_version(version) {
            return Err(Error::InvalidArgument(format!(
                "{version:?} is not a valid version"
            )));
        }
        let prefix = if self.typed && kind.is_top_level() {
            format!("{}/{}", self.base, kind.class_name())
        } else {
            self.base.clone()
        };
        let persistent_identity = format!("{prefix}/{name}");
        Ok(Identifiers {
            identity: Uri::new(format!("{persistent_identity}/{version}")),
            persistent_identity: Uri::new(persistent_identity),
            display_id: Some(name.to_string()),
            version: Some(version.to_string()),
        })
    }

    fn mint_open(&self, name: &str, version: Option<&str>) -> Identifiers {
        let identity = if is_absolute(name) {
            name.to_string()
        } else {
            format!("{}/{}", self.base, name)
        };
        let explicit = version.or(self.version.as_deref());
        let (persistent_identity, version) = match identity.rsplit_once('/') {
            Some((head, last))
                if explicit.map_or(is_valid_version(last), |v| v == last) && !head.is_empty() =>
            {
                (head.to_string(), last.to_string())
            }
            _ => (
                identity.clone(),
                explicit.unwrap_or(DEFAULT_VERSION).to_string(),
            ),
        };
        Identifiers {
            identity: Uri::new(identity),
            persistent_identity: Uri::new(persistent_identity),
            display_id: None,
            version: Some(version),
        }
    }
}

/// Mints identifiers for a top-level object under `config`.
///
/// ```
/// use sbol::{identity, Config, ObjectKind};
///
/// let config = Config::new("http://sbols.org/CRISPR_Example").typed(false);
/// let ids = identity::mint(&config, ObjectKind::ModuleDefinition, "CRISPR_Template", None).unwrap();
/// assert_eq!(ids.identity, "http://sbols.org/CRISPR_Example/CRISPR_Template/1");
/// assert_eq!(ids.persistent_identity, "http://sbols.org/CRISPR_Example/CRISPR_Template");
/// ```
///
/// # Errors
///
/// See [`Scope::mint`].
pub fn mint(
    config: &Config,
    kind: ObjectKind,
    name: &str,
    version: Option<&str>,
) -> Result<Identifiers> {
    Scope::top_level(config).mint(kind, name, version)
}

/// Recovers identifiers from an existing URI.
///
/// A trailing segment that looks like a version is split off; the segment
/// before it becomes the displayId when valid. Without a version segment the
/// last segment is taken as the displayId candidate and the URI is its own
/// persistent identity.
#[must_use]
pub fn parse(uri: &str) -> Identifiers {
    let trimmed = uri.trim_end_matches('/');
    if let Some((head, last)) = trimmed.rsplit_once('/') {
        if is_valid_version(last) {
            let display_id = head
                .rsplit_once('/')
                .map(|(_, id)| id)
                .filter(|id| is_valid_display_id(id));
            if let Some(id) = display_id {
                return Identifiers {
                    identity: Uri::new(uri),
                    persistent_identity: Uri::new(head),
                    display_id: Some(id.to_string()),
                    version: Some(last.to_string()),
                };
            }
        }
    }
    let display_id = trimmed
        .rsplit(|c: char| c == '/' || c == '#' || c == ':')
        .next()
        .filter(|id| is_valid_display_id(id))
        .map(str::to_string);
    Identifiers {
        identity: Uri::new(uri),
        persistent_identity: Uri::new(uri),
        display_id,
        version: None,
    }
}

/// Turns arbitrary text into a valid displayId by replacing invalid
/// characters with `_` and prefixing `_` when it starts with a digit.
#[must_use]
pub fn sanitize_display_id(text: &str) -> String {
    let mut id: String = text
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if id.is_empty() || id.starts_with(|c: char| c.is_ascii_digit()) {
        id.insert(0, '_');
    }
    id
}
