use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sport {
    Football,   // foot
    Basketball, // basket
    Tennis,     // tennis
    Running,    // running
    Cycling,    // velo
    Swimming,   // natation
}

impl Sport {
    pub fn code(&self) -> &'static str {
        match self {
            Sport::Football => "foot",
            Sport::Basketball => "basket",
            Sport::Tennis => "tennis",
            Sport::Running => "running",
            Sport::Cycling => "velo",
            Sport::Swimming => "natation",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "foot" => Some(Sport::Football),
            "basket" => Some(Sport::Basketball),
            "tennis" => Some(Sport::Tennis),
            "running" => Some(Sport::Running),
            "velo" => Some(Sport::Cycling),
            "natation" => Some(Sport::Swimming),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        Sport::from_db_str(&code.to_lowercase())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sport::Football => "Football",
            Sport::Basketball => "Basketball",
            Sport::Tennis => "Tennis",
            Sport::Running => "Running",
            Sport::Cycling => "Cycling",
            Sport::Swimming => "Swimming",
        }
    }
}
