#![cfg_attr(not(feature = "std"), no_std)]

#[cfg_attr(test, macro_use)]
extern crate alloc;

pub mod binary;
pub mod common;

#[cfg(test)]
mod tests;
