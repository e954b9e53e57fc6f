//! `arc-diem-config` - settings form for the Arc Diem watch face
//!
//! The settings page is a Clay form declared as typed data
//! ([`config::arc_diem_form`]). This library validates forms, renders them
//! into the documents a settings host consumes, and models the key -> value
//! selection the host returns, including the typed settings the watch face
//! derives from it.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod settings;
