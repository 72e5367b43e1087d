//! The compilation unit: one interface file and its package metadata.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::{Annotations, Declaration, Fields, Function};

/// Package version, written `major.minor` (e.g. `@1.0`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl TryFrom<String> for Version {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| format!("invalid version '{}', expected 'X.Y'", s))?;
        Ok(Self {
            major: major.parse().map_err(|_| "invalid major")?,
            minor: minor.parse().map_err(|_| "invalid minor")?,
        })
    }
}

/// The interface declaration of a unit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub line: u32,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A parsed and validated interface file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Fully qualified package name (e.g. `android.hardware.nfc`).
    pub package: String,
    pub version: Version,
    /// Namespace path segments, outermost first.
    #[serde(default)]
    pub namespace: Vec<String>,
    /// Imported package paths; the last segment is the imported name.
    #[serde(default)]
    pub imports: Vec<Vec<String>>,
    /// Absent when the file declares no interface.
    #[serde(default)]
    pub interface: Option<Interface>,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
    /// Interface-level state variables.
    #[serde(default)]
    pub vars: Fields,
}

impl Unit {
    pub fn new(package: impl Into<String>, version: Version) -> Self {
        Self {
            package: package.into(),
            version,
            namespace: Vec::new(),
            imports: Vec::new(),
            interface: None,
            declarations: Vec::new(),
            vars: Fields::new(),
        }
    }

    /// Functions in declaration order.
    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.declarations.iter().filter_map(Declaration::as_function)
    }
}
