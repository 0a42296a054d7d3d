//! CLI infrastructure for the ttt-orbits toolkit
//!
//! This module provides the command-line interface for exploring the
//! symmetry-reduced state space and exporting the resulting class DAG.

pub mod commands;
pub mod output;
