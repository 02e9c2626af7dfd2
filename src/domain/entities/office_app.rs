use crate::domain::error::InstallerError;
use std::fmt;
use std::str::FromStr;

/// The closed set of Office applications the add-in can be installed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OfficeApp {
    Excel,
    Word,
    PowerPoint,
}

impl OfficeApp {
    /// Fixed display order. Bulk operations walk the set in this order.
    pub const ALL: [OfficeApp; 3] = [OfficeApp::Excel, OfficeApp::Word, OfficeApp::PowerPoint];

    pub fn display_name(&self) -> &'static str {
        match self {
            OfficeApp::Excel => "Excel",
            OfficeApp::Word => "Word",
            OfficeApp::PowerPoint => "PowerPoint",
        }
    }

    /// Lower-case token the backend expects in requests.
    pub fn token(&self) -> &'static str {
        match self {
            OfficeApp::Excel => "excel",
            OfficeApp::Word => "word",
            OfficeApp::PowerPoint => "powerpoint",
        }
    }

    /// Exact match on the display-cased name used in status replies.
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|app| app.display_name() == name)
    }
}

impl fmt::Display for OfficeApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for OfficeApp {
    type Err = InstallerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|app| app.token() == needle)
            .ok_or_else(|| InstallerError::UnknownApp(s.to_string()))
    }
}
