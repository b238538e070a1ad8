//! Page region builders.
//!
//! Each region turns its slice of the content model into one element.
//! Repeated cards are built by one function per record type.

pub mod nav;
pub mod hero;
pub mod about;
pub mod expertise;
pub mod process;
pub mod philosophy;
pub mod contact;
pub mod footer;
