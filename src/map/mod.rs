//! This module contains the tile grid and everything needed to build and walk it.

pub mod access;
pub mod connectivity;
pub mod direction;
pub mod generator;
pub mod grid;
pub mod rotation;
pub mod tile;
