use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown platform '{name}' (expected one of: {expected})")]
    UnknownPlatform { name: String, expected: String },

    #[error("unknown item type '{name}' (expected skill, agent or command)")]
    UnknownItemType { name: String },

    #[error("{platform} does not support {item_type}s")]
    Unsupported {
        platform: crate::Platform,
        item_type: crate::ItemType,
    },
}

impl Error {
    #[must_use]
    pub fn unknown_platform(name: impl Into<String>) -> Self {
        let expected = crate::Platform::ALL
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnknownPlatform {
            name: name.into(),
            expected,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
