//! Launcher for the containerized log-to-Gantt pipeline.
//!
//! The pipeline itself (log parsing, chart computation, HTML/JSON rendering)
//! lives in container images driven by an external orchestration tool. This
//! crate is the thin front door: it prepares the workspace layout, refuses to
//! start without the required input file, hands control to the orchestration
//! command, and reports where the artifacts land. The architecture enforces a
//! strict separation:
//!
//! - [`artifacts`]: pure, deterministic knowledge of the expected pipeline
//!   outputs. No I/O, fully testable in isolation.
//! - [`io`]: side-effecting operations (filesystem layout, configuration,
//!   process execution). Isolated to enable mocking in tests.
//!
//! [`launch`] coordinates the two to implement the CLI.

pub mod artifacts;
pub mod exit_codes;
pub mod io;
pub mod launch;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
