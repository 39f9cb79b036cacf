//! Architecture of the installed runtime tree.

/// Which parallel installation tree to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arch {
    #[default]
    X86,
    X64,
}

impl Arch {
    /// Interpret the architecture flag. Only an exact `"1"` selects 64-bit.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("1") => Arch::X64,
            _ => Arch::X86,
        }
    }

    /// Directory under the installation root holding this tree.
    pub fn tree_dir(self) -> &'static str {
        match self {
            Arch::X86 => "v",
            Arch::X64 => "v-x64",
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arch::X86 => write!(f, "x86"),
            Arch::X64 => write!(f, "x64"),
        }
    }
}
