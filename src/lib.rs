//! Fix up compiler-generated dependency files.
//!
//! Compilers emit dependency listings (`gcc -MD`) that record which headers
//! an object file was built from. Included verbatim in a GNU Makefile, such
//! a listing breaks the build as soon as a header is deleted or renamed:
//! make aborts with "No rule to make target". The cure, described at
//! <http://mad-scientist.net/make/autodep.html>, is an empty rule per
//! prerequisite, so that a vanished file means "nothing to do" instead.
//!
//! Example usage:
//!
//! ~~~
//! use depfix::{expand, MARKER};
//!
//! let out = expand("a.o: a.c a.h\n").unwrap();
//! assert!(out.starts_with(MARKER));
//! assert!(out.ends_with("a.o: a.c a.h\na.c:\na.h:\n"));
//! ~~~

mod error;
mod fixup;
mod opt;
mod parse;

pub use error::Error;
pub use fixup::{expand, fixup, MARKER};
pub use opt::Opt;
pub use parse::{prerequisites, LineStart};
