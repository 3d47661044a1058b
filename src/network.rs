use std::fmt;
use std::str::FromStr;

/// Top-level grouping of lines. Each network ships as its own data file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Network {
    Suburban,
    Intercity,
}

impl Network {
    pub fn file_name(&self) -> &'static str {
        match self {
            Network::Suburban => "Suburban.csv",
            Network::Intercity => "Intercity.csv",
        }
    }

    /// Maps the interactive menu choice (1 or 2) to a network.
    pub fn from_menu_choice(choice: &str) -> Option<Network> {
        match choice.trim() {
            "1" => Some(Network::Suburban),
            "2" => Some(Network::Intercity),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Suburban => write!(f, "Suburban"),
            Network::Intercity => write!(f, "Intercity"),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "suburban" => Ok(Network::Suburban),
            "intercity" => Ok(Network::Intercity),
            _ => Err(format!("Invalid network: {}", s)),
        }
    }
}
