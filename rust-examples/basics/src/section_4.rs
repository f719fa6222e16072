//! Section 4: Process Explorer
//!
//! Reads the identity of the running process. The operating system is
//! reached only through [`ProcessIdentity`], so the report can be built
//! from a fixed identity in tests.

use std::fmt;

use tracing::debug;

/// Source of the two process identifiers the tour reports.
pub trait ProcessIdentity {
    fn pid(&self) -> u32;

    /// `None` where the platform offers no portable way to ask.
    fn parent_pid(&self) -> Option<u32>;
}

/// The process this code is running in.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentProcess;

impl ProcessIdentity for CurrentProcess {
    fn pid(&self) -> u32 {
        std::process::id()
    }

    #[cfg(unix)]
    fn parent_pid(&self) -> Option<u32> {
        Some(std::os::unix::process::parent_id())
    }

    #[cfg(not(unix))]
    fn parent_pid(&self) -> Option<u32> {
        None
    }
}

/// Identity of a process at the moment it was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessReport {
    pub pid: u32,
    pub parent_pid: Option<u32>,
}

impl ProcessReport {
    /// Reads both identifiers from `identity`.
    pub fn capture(identity: &impl ProcessIdentity) -> Self {
        let report = Self {
            pid: identity.pid(),
            parent_pid: identity.parent_pid(),
        };
        debug!(pid = report.pid, parent_pid = ?report.parent_pid, "captured process identity");
        report
    }
}

impl fmt::Display for ProcessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Process ID: {}", self.pid)?;
        match self.parent_pid {
            Some(ppid) => write!(f, "Parent Process ID: {ppid}"),
            None => write!(f, "Parent Process ID: unavailable"),
        }
    }
}

/// Prints the process section of the tour.
pub fn demonstrate_process() {
    println!("\n=== Process Information ===");
    println!("{}", ProcessReport::capture(&CurrentProcess));
    println!("Other processes cannot access this process's memory due to process isolation.");
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedIdentity {
        pid: u32,
        parent_pid: Option<u32>,
    }

    impl ProcessIdentity for FixedIdentity {
        fn pid(&self) -> u32 {
            self.pid
        }

        fn parent_pid(&self) -> Option<u32> {
            self.parent_pid
        }
    }

    #[test]
    fn test_capture_fixed_identity() {
        let identity = FixedIdentity {
            pid: 4242,
            parent_pid: Some(1),
        };
        let report = ProcessReport::capture(&identity);
        assert_eq!(
            report,
            ProcessReport {
                pid: 4242,
                parent_pid: Some(1)
            }
        );
        assert_eq!(report.to_string(), "Process ID: 4242\nParent Process ID: 1");
    }

    #[test]
    fn test_display_without_parent() {
        let report = ProcessReport {
            pid: 7,
            parent_pid: None,
        };
        assert_eq!(
            report.to_string(),
            "Process ID: 7\nParent Process ID: unavailable"
        );
    }

    #[test]
    fn test_current_process_matches_std() {
        let report = ProcessReport::capture(&CurrentProcess);
        assert_eq!(report.pid, std::process::id());
        #[cfg(unix)]
        assert!(report.parent_pid.is_some());
    }
}
