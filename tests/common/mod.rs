//! Consolidated test utilities for gstatus
//!
//! This module provides shared helpers for integration tests: throwaway
//! repositories (real or hand-built `.git` layouts), canned porcelain input and
//! output predicates.

pub mod assertions;
pub mod fixtures;
pub mod repository;
