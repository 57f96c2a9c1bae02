use log::Level;

use crate::embed::Color;

/// The level of a notification, which picks its default accent colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Debug,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Debug,
    ];

    /// The colour used when no override was configured.
    pub fn default_color(self) -> Color {
        match self {
            Severity::Info => Color(0x00ff00),
            Severity::Warning => Color(0xffff00),
            Severity::Error => Color(0xff0000),
            Severity::Debug => Color(0xff00ff),
        }
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Severity::Error,
            Level::Warn => Severity::Warning,
            Level::Info => Severity::Info,
            Level::Debug | Level::Trace => Severity::Debug,
        }
    }
}

/// Accent colours per severity, starting from [`Severity::default_color`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Palette {
    info: Color,
    warning: Color,
    error: Color,
    debug: Color,
}

impl Palette {
    pub(crate) fn get(&self, severity: Severity) -> Color {
        match severity {
            Severity::Info => self.info,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
            Severity::Debug => self.debug,
        }
    }

    pub(crate) fn set(&mut self, severity: Severity, color: Color) {
        let slot = match severity {
            Severity::Info => &mut self.info,
            Severity::Warning => &mut self.warning,
            Severity::Error => &mut self.error,
            Severity::Debug => &mut self.debug,
        };
        *slot = color;
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            info: Severity::Info.default_color(),
            warning: Severity::Warning.default_color(),
            error: Severity::Error.default_color(),
            debug: Severity::Debug.default_color(),
        }
    }
}
