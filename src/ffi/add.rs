//! `MainActivity.add(int, int)`.

use jni::objects::JObject;
use jni::sys::jint;
use jni::JNIEnv;

use crate::adder;

/// Native implementation of `int MainActivity.add(int x, int y)`.
///
/// The environment and receiver are unused. Overflow wraps like Java `int`.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_com_example_picoapp_MainActivity_add<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
    x: jint,
    y: jint,
) -> jint {
    adder::add(x, y)
}
