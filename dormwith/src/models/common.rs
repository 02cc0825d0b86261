use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    #[serde(rename = "남성", alias = "남자")]
    Male,
    #[serde(rename = "여성", alias = "여자")]
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "남성"),
            Self::Female => write!(f, "여성"),
        }
    }
}

/// Bucket a candidate profile occupies in the viewer's matching lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MatchingStatus {
    /// Suggested to the viewer, no action taken yet.
    Recommended,
    /// The viewer showed interest and is waiting on the other side.
    Waiting,
    /// The other side showed interest in the viewer.
    Received,
    Matched,
    Rejected,
}

impl std::fmt::Display for MatchingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recommended => write!(f, "recommended"),
            Self::Waiting => write!(f, "waiting"),
            Self::Received => write!(f, "received"),
            Self::Matched => write!(f, "matched"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// Outcome recorded in the viewer's match history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Matched,
    Rejected,
    Waiting,
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Matched => write!(f, "matched"),
            Self::Rejected => write!(f, "rejected"),
            Self::Waiting => write!(f, "waiting"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostKind {
    /// Posts the viewer wrote.
    #[default]
    Mine,
    Commented,
    Liked,
    Bookmarked,
}

impl std::fmt::Display for PostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mine => write!(f, "mine"),
            Self::Commented => write!(f, "commented"),
            Self::Liked => write!(f, "liked"),
            Self::Bookmarked => write!(f, "bookmarked"),
        }
    }
}

impl std::str::FromStr for PostKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mine" | "my" => Ok(Self::Mine),
            "commented" => Ok(Self::Commented),
            "liked" => Ok(Self::Liked),
            "bookmarked" => Ok(Self::Bookmarked),
            _ => Err(format!("Unknown post kind: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    #[default]
    Text,
    Image,
    File,
    Voice,
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Image => write!(f, "image"),
            Self::File => write!(f, "file"),
            Self::Voice => write!(f, "voice"),
        }
    }
}
