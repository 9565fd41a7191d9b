//! Shader programs and the diagnostics produced while building them.

use std::fmt;

/// Handle of a linked shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub(crate) u32);

impl fmt::Display for ProgramHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ProgramHandle({})", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ShaderStage::Vertex => write!(f, "Vertex shader"),
            ShaderStage::Fragment => write!(f, "Fragment shader"),
        }
    }
}

/// A failed compile or link step. The program object is still created; drawing with it
/// has no visible effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderDiagnostic {
    Compile { stage: ShaderStage, log: String },
    Link { log: String },
}

impl ShaderDiagnostic {
    /// The information log reported by the driver.
    pub fn log(&self) -> &str {
        match *self {
            ShaderDiagnostic::Compile { ref log, .. } => log,
            ShaderDiagnostic::Link { ref log } => log,
        }
    }
}

impl fmt::Display for ShaderDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ShaderDiagnostic::Compile { stage, .. } => write!(f, "{} did not compile.", stage),
            ShaderDiagnostic::Link { .. } => write!(f, "Shader program did not link."),
        }
    }
}

/// Substitutes a placeholder for drivers that fail without writing a log.
pub(crate) fn non_empty_log(log: String) -> String {
    if log.trim().is_empty() {
        "(no information log)".to_owned()
    } else {
        log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let diag = ShaderDiagnostic::Compile {
            stage: ShaderStage::Fragment,
            log: "0:1(1): error: syntax error".into(),
        };
        assert_eq!(format!("{}", diag), "Fragment shader did not compile.");
        assert_eq!(diag.log(), "0:1(1): error: syntax error");

        let diag = ShaderDiagnostic::Link { log: "mismatch".into() };
        assert_eq!(format!("{}", diag), "Shader program did not link.");
    }

    #[test]
    fn empty_log() {
        assert_eq!(non_empty_log("\n".into()), "(no information log)");
        assert_eq!(non_empty_log("error".into()), "error");
    }
}
