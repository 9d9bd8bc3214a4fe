//! Workspace-level integration tests for polyfft; see `tests/`.
