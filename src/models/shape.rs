use std::str::FromStr;

use serde::Deserialize;

use super::Alphabet;

/// The identifier formats the generator knows how to produce
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdShape {
    /// 21 symbols from the default alphabet, first one a letter
    Default,
    /// 14 symbols from the default alphabet
    Short,
    /// Four dash-joined groups of four, each group starting with a letter
    WebSafe,
    /// Caller-chosen alphabet and size
    Custom { alphabet: Alphabet, size: usize },
}

impl FromStr for IdShape {
    type Err = String;

    /// Parses the named shapes. `custom` needs an alphabet and size, which
    /// the caller fills in afterwards; it parses to the default alphabet at
    /// the default size.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" | "nanoid" => Ok(IdShape::Default),
            "short" | "14" => Ok(IdShape::Short),
            "websafe" | "web-safe" | "html" => Ok(IdShape::WebSafe),
            "custom" => Ok(IdShape::Custom {
                alphabet: Alphabet::default(),
                size: crate::services::id_generator::DEFAULT_SIZE,
            }),
            _ => Err(format!(
                "Invalid shape: {}. Must be one of: default, short, websafe, custom",
                s
            )),
        }
    }
}
