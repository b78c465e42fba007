//! Library load hook.

use std::os::raw::c_void;

use jni::sys::{jint, JNI_VERSION_1_6};
use jni::JavaVM;
use log::{debug, info};

use crate::binding::{ADD_METHOD, ADD_SIGNATURE, CLASS_NAME, LIBRARY_NAME};
use crate::logging;

/// Called by the JVM once `System.loadLibrary("picoapp")` has mapped the
/// library.
///
/// Sets up logging and reports the JNI version this library was built
/// against. Native methods are resolved by short name, so nothing is
/// registered here.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    logging::init();
    info!("lib{LIBRARY_NAME} loaded for {CLASS_NAME}");
    debug!("native method {ADD_METHOD}{ADD_SIGNATURE}");
    JNI_VERSION_1_6
}
