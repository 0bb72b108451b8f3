#![cfg_attr(not(feature = "std"), no_std)]

pub mod ecosystem;
pub mod synthetics;

pub use ecosystem::*;
pub use synthetics::*;
