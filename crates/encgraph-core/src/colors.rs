//! Terminal palette for instruction listings.

/// Escape sequence per role in a disassembly line or CLI section header.
/// Every field is empty in `OFF`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    /// Opcodes that stay inside the current graph.
    pub opcode: &'static str,
    /// Opcodes that jump out of it: interface dispatch and recursive calls.
    pub call: &'static str,
    /// Record field keys and definition names.
    pub key: &'static str,
    /// Slot lists and nesting markers.
    pub slots: &'static str,
    /// Section labels such as `code` and `subroutine`.
    pub label: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        opcode: "\x1b[34m",
        call: "\x1b[35m",
        key: "\x1b[32m",
        slots: "\x1b[2m",
        label: "\x1b[1m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        opcode: "",
        call: "",
        key: "",
        slots: "",
        label: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// `text` wrapped in `style` and a reset.
    pub fn paint(&self, style: &str, text: &str) -> String {
        if style.is_empty() {
            text.to_owned()
        } else {
            format!("{style}{text}{}", self.reset)
        }
    }
}
