//! JNI naming for the Java class this library is bound to.
//!
//! The JVM resolves `native` methods by looking up a "short name" symbol
//! derived from the declaring class and the method name. The exported
//! function in `ffi::add` must match [`short_name`] for [`CLASS_NAME`] and
//! [`ADD_METHOD`], otherwise `MainActivity.add` fails with
//! `UnsatisfiedLinkError` at first call.

use std::fmt::Write;

use thiserror::Error;

/// Name passed to `System.loadLibrary`.
pub const LIBRARY_NAME: &str = "picoapp";

/// Fully-qualified name of the class declaring the native methods.
pub const CLASS_NAME: &str = "com.example.picoapp.MainActivity";

/// Native method name on [`CLASS_NAME`].
pub const ADD_METHOD: &str = "add";

/// JVM descriptor of `int add(int, int)`.
pub const ADD_SIGNATURE: &str = "(II)I";

/// Log tag used on device.
pub const LOG_TAG: &str = "picoapp";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    #[error("class name is empty")]
    EmptyName,
    #[error("class name `{name}` has an empty segment")]
    EmptySegment { name: String },
}

/// A validated, dot-separated fully-qualified Java class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaClass {
    name: String,
}

impl JavaClass {
    pub fn new(name: &str) -> Result<Self, BindingError> {
        if name.is_empty() {
            return Err(BindingError::EmptyName);
        }
        if name.split('.').any(str::is_empty) {
            return Err(BindingError::EmptySegment {
                name: name.to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
        })
    }

    /// The dotted form, e.g. `com.example.picoapp.MainActivity`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The internal form used by `FindClass`, e.g. `com/example/picoapp/MainActivity`.
    pub fn internal_name(&self) -> String {
        self.name.replace('.', "/")
    }
}

/// Escapes a class or method name per the JNI short-name rules.
pub fn mangle_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '.' | '/' => out.push('_'),
            '_' => out.push_str("_1"),
            ';' => out.push_str("_2"),
            '[' => out.push_str("_3"),
            c if c.is_ascii_alphanumeric() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    // Writing to a String cannot fail.
                    let _ = write!(out, "_0{unit:04x}");
                }
            }
        }
    }
    out
}

/// Symbol the JVM looks up for `method` declared on `class`.
pub fn short_name(class: &JavaClass, method: &str) -> String {
    format!(
        "Java_{}_{}",
        mangle_component(class.name()),
        mangle_component(method)
    )
}

/// The class this library is bound to.
pub fn bound_class() -> Result<JavaClass, BindingError> {
    JavaClass::new(CLASS_NAME)
}
