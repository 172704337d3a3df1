// src/lib.rs
//! Burrow - a terminal storage browser.
//!
//! The [`fs`] module lists and orders entries, [`open`] decides how a selected
//! entry is opened, and [`app`]/[`ui`] drive the interactive browser.

pub mod app;
pub mod config;
pub mod fs;
pub mod open;
pub mod ui;
