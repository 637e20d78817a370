use std::fmt::Display;
use std::str::FromStr;

use crate::grammar::is_ident;

/// Options which shape the generated code, but not the grammar itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    /// Traits derived on every category enum and variant record.
    pub derives: Vec<String>,
    /// Handle used for recursive node references.
    pub indirection: Indirection,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            derives: vec!["Debug".into(), "Clone".into(), "PartialEq".into()],
            indirection: Indirection::Box,
        }
    }
}

/// How to hold a node which refers to another node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Indirection {
    #[default]
    Box,
    Rc,
    Arc,
}

impl Indirection {
    pub fn name(self) -> &'static str {
        match self {
            Indirection::Box => "Box",
            Indirection::Rc => "Rc",
            Indirection::Arc => "Arc",
        }
    }

    /// `Box` is in the prelude, the others are not.
    pub fn import(self) -> Option<&'static str> {
        match self {
            Indirection::Box => None,
            Indirection::Rc => Some("std::rc::Rc"),
            Indirection::Arc => Some("std::sync::Arc"),
        }
    }
}

impl Display for Indirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Indirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "box" => Ok(Indirection::Box),
            "rc" => Ok(Indirection::Rc),
            "arc" => Ok(Indirection::Arc),
            other => Err(format!(
                "unknown indirection `{other}`, expected one of: box, rc, arc"
            )),
        }
    }
}

/// A comma-separated list of derivable trait paths, e.g. `Debug,Clone,serde::Serialize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derives(pub Vec<String>);

impl FromStr for Derives {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut derives = Vec::new();
        for item in s.split(',') {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            if !item.split("::").all(is_ident) {
                return Err(format!("`{item}` is not a valid trait path"));
            }
            if !derives.iter().any(|d| d == item) {
                derives.push(item.to_owned());
            }
        }
        Ok(Derives(derives))
    }
}
