#![doc = include_str!("../README.md")]

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

mod dir;
mod errors;
mod file;
#[cfg(any(unix, windows))]
pub mod locate;
mod native;
mod parser;
mod path;
mod segment;
mod syntax;
mod unix;
mod walk;
mod windows;

mod private {
    /// Used to mark traits as sealed to prevent implements from others outside of this crate
    pub trait Sealed {}
}

pub use dir::*;
pub use errors::*;
pub use file::*;
pub use native::*;
pub use path::*;
pub use segment::*;
pub use syntax::*;
pub use unix::*;
pub use walk::*;
pub use windows::*;
