//! picoapp native library.
//!
//! Backs the `native` methods of `com.example.picoapp.MainActivity`. The
//! Android app loads it with `System.loadLibrary("picoapp")`; the JVM then
//! resolves each method to the matching `Java_...` export in `ffi`.

pub mod adder;
pub mod binding;
pub mod ffi;
pub mod logging;

pub use adder::add;
pub use binding::{BindingError, JavaClass};

#[cfg(test)]
mod tests;
