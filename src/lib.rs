//! Core library for music-file-tag-masks
pub mod checksum;
pub mod config;
pub mod extract;
pub mod fields;
pub mod generate;
pub mod mask;
pub mod models;
pub mod process;
pub mod roman;
pub mod tags;
pub mod transform;
