use crate::format::Format;

/// Immutable configuration for a scan, built once at startup.
#[derive(Clone)]
pub struct ScanConfig {
    pub pattern: String,
    pub case_insensitive: bool,
    pub case_smart: bool,
    pub format: Format,
}

impl ScanConfig {
    pub fn from(pattern: String) -> Self {
        Self {
            pattern,
            case_insensitive: false,
            case_smart: false,
            format: Format::default(),
        }
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn case_smart(mut self, case_smart: bool) -> Self {
        self.case_smart = case_smart;
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }
}
