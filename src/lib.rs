//! Core of the Hitscope dashboard: loading the popular-songs table and
//! computing everything the charts display. The egui front-end lives in the
//! binary.

pub mod config;
pub mod data;
