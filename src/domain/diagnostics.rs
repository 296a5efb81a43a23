//! Value-carried diagnostics.
//!
//! Components report what went wrong alongside their (possibly empty) result
//! instead of logging mid-pipeline. The outer boundary decides what to do with
//! the messages, which keeps every component deterministic under test.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Row-level or shape-level degradation; the pipeline continues.
    Warn,
    /// The producing component returned an empty result. Caller cannot proceed.
    Error,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.0.push(Diagnostic {
            severity: Severity::Warn,
            message: message.into(),
        });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.0.push(Diagnostic {
            severity: Severity::Error,
            message: message.into(),
        });
    }

    pub fn absorb(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.0.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    /// Emit everything through the `log` facade. Called once at the app
    /// boundary after the pipeline has run.
    pub fn log_all(&self) {
        for d in &self.0 {
            match d.severity {
                Severity::Warn => log::warn!("{}", d.message),
                Severity::Error => log::error!("{}", d.message),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_keeps_order_and_severity() {
        let mut a = Diagnostics::new();
        a.warn("first");
        let mut b = Diagnostics::new();
        b.error("second");
        a.absorb(b);

        let collected: Vec<_> = a.iter().map(|d| (d.severity, d.message.as_str())).collect();
        assert_eq!(
            collected,
            vec![(Severity::Warn, "first"), (Severity::Error, "second")]
        );
        assert!(a.has_errors());
    }

    #[test]
    fn fresh_diagnostics_are_clean() {
        let d = Diagnostics::new();
        assert!(d.is_empty());
        assert!(!d.has_errors());
    }
}
