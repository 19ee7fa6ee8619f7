use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Role a registrant attends the event in (`tipo_asamblea` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipationType {
    #[serde(rename = "Niño")]
    Child,
    #[serde(rename = "Asambleista")]
    AssemblyMember,
    #[serde(rename = "Visitante")]
    Visitor,
    #[serde(rename = "Invitado Especial")]
    SpecialGuest,
}

impl ParticipationType {
    pub const ALL: [ParticipationType; 4] = [
        ParticipationType::Child,
        ParticipationType::AssemblyMember,
        ParticipationType::Visitor,
        ParticipationType::SpecialGuest,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Child => "Niño",
            Self::AssemblyMember => "Asambleista",
            Self::Visitor => "Visitante",
            Self::SpecialGuest => "Invitado Especial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Child => "Child",
            Self::AssemblyMember => "Assembly member",
            Self::Visitor => "Visitor",
            Self::SpecialGuest => "Special guest",
        }
    }
}

impl FromStr for ParticipationType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "niño" | "nino" | "child" => Ok(Self::Child),
            "asambleista" | "assembly-member" | "assembly_member" => Ok(Self::AssemblyMember),
            "visitante" | "visitor" => Ok(Self::Visitor),
            "invitado especial" | "special-guest" | "special_guest" => Ok(Self::SpecialGuest),
            _ => Err(CoreError::InvalidParticipationType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ParticipationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
