//! Terminal output helpers for the Kitchonomy command line
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Colored tier badges
//! - Text meters and count/percentage formatting

#![warn(missing_docs)]

pub mod output;
