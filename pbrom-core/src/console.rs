/// Console types that own a ROM directory.
///
/// Each variant carries its folder convention and accepted file extensions,
/// so the console identity is the only thing a catalog needs to be told.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ConsoleType {
    Nes,
    GameBoy,
    GameBoyColor,
    GameBoyAdvance,
    PcEngine,
    MegaDrive,
    Lynx,
    /// Fallback type: browses the base directory itself and accepts nothing.
    Unknown,
}

/// All console variants in table order.
const ALL_CONSOLES: &[ConsoleType] = &[
    ConsoleType::Nes,
    ConsoleType::GameBoy,
    ConsoleType::GameBoyColor,
    ConsoleType::GameBoyAdvance,
    ConsoleType::PcEngine,
    ConsoleType::MegaDrive,
    ConsoleType::Lynx,
    ConsoleType::Unknown,
];

impl ConsoleType {
    /// Canonical short name used for CLI arguments and the settings file.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Nes => "nes",
            Self::GameBoy => "gb",
            Self::GameBoyColor => "gbc",
            Self::GameBoyAdvance => "gba",
            Self::PcEngine => "pce",
            Self::MegaDrive => "megadrive",
            Self::Lynx => "lynx",
            Self::Unknown => "unknown",
        }
    }

    /// Full display name for the console.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Nes => "Nintendo Entertainment System",
            Self::GameBoy => "Game Boy",
            Self::GameBoyColor => "Game Boy Color",
            Self::GameBoyAdvance => "Game Boy Advance",
            Self::PcEngine => "PC Engine / TurboGrafx-16",
            Self::MegaDrive => "Sega Mega Drive / Genesis",
            Self::Lynx => "Atari Lynx",
            Self::Unknown => "Unknown",
        }
    }

    /// Folder under the storage base that holds this console's ROMs.
    ///
    /// Game Boy and Game Boy Color share one folder. `Unknown` has no
    /// folder of its own and browses the base directly.
    pub fn subdirectory(&self) -> Option<&'static str> {
        match self {
            Self::Nes => Some("nes"),
            Self::GameBoy | Self::GameBoyColor => Some("gb"),
            Self::GameBoyAdvance => Some("gba"),
            Self::PcEngine => Some("pce"),
            Self::MegaDrive => Some("smd"),
            Self::Lynx => Some("lnx"),
            Self::Unknown => None,
        }
    }

    /// Accepted file extensions, compared case-sensitively.
    pub fn extensions(&self) -> ExtensionSet {
        ExtensionSet(match self {
            Self::Nes => &["nes", "NES", "zip", "ZIP"],
            Self::GameBoy | Self::GameBoyColor => &["gb", "gbc", "bin", "zip"],
            Self::GameBoyAdvance => &["gba", "GBA", "zip", "bin"],
            Self::PcEngine => &["pce"],
            Self::MegaDrive => &["smd", "gen", "bin"],
            Self::Lynx => &["lnx"],
            Self::Unknown => &[],
        })
    }

    /// All accepted names for this console (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Nes => &["nes", "famicom", "fc"],
            Self::GameBoy => &["gb", "gameboy", "game boy"],
            Self::GameBoyColor => &["gbc", "gameboy color", "game boy color"],
            Self::GameBoyAdvance => &["gba", "game boy advance", "gameboy advance"],
            Self::PcEngine => &["pce", "pc engine", "pcengine", "tg16", "turbografx"],
            Self::MegaDrive => &["megadrive", "mega drive", "genesis", "smd", "md"],
            Self::Lynx => &["lynx", "lnx", "atari lynx"],
            Self::Unknown => &["unknown", "default", "none"],
        }
    }

    pub fn all() -> &'static [ConsoleType] {
        ALL_CONSOLES
    }
}

impl std::fmt::Display for ConsoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Name that matches no console alias. Carries the input as given.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown console '{0}' (try `pbrom consoles`)")]
pub struct ConsoleParseError(pub String);

impl std::str::FromStr for ConsoleType {
    type Err = ConsoleParseError;

    /// Parse a console from its short name or any alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_CONSOLES
            .iter()
            .copied()
            .find(|console| console.aliases().iter().any(|alias| *alias == lower))
            .ok_or_else(|| ConsoleParseError(s.to_string()))
    }
}

impl TryFrom<String> for ConsoleType {
    type Error = ConsoleParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ConsoleType> for String {
    fn from(console: ConsoleType) -> Self {
        console.short_name().to_string()
    }
}

/// Ordered, immutable set of accepted file extensions for one console type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionSet(&'static [&'static str]);

impl ExtensionSet {
    /// Exact, case-sensitive membership test.
    pub fn contains(&self, extension: &str) -> bool {
        self.0.iter().any(|e| *e == extension)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &'static [&'static str] {
        self.0
    }

    /// Whether a file name is accepted by this set.
    ///
    /// The extension is the text after the last `.`; a name without any `.`
    /// is compared whole.
    pub fn accepts(&self, file_name: &str) -> bool {
        self.contains(extension_of(file_name))
    }
}

/// Text after the last `.` in `file_name`, or the whole name if it has none.
pub fn extension_of(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(pos) => &file_name[pos + 1..],
        None => file_name,
    }
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
