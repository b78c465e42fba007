//! JNI layer for `com.example.picoapp.MainActivity`.
//!
//! These functions are exported under the names the JVM resolves at
//! `System.loadLibrary("picoapp")` time. They are thin wrappers; the logic
//! lives in `adder`.

pub mod add;
pub mod lifecycle;

pub use add::Java_com_example_picoapp_MainActivity_add;
pub use lifecycle::JNI_OnLoad;
