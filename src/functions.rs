use std::os::raw::c_char;

use crate::{Device, Instance};

/// Untyped entry point, the common currency of every table slot. Callers
/// transmute a resolved slot to the concrete signature before invoking it.
pub type FnVoidFunction = extern "system" fn();

pub type FnGetInstanceProcAddr =
    extern "system" fn(instance: Instance, name: *const c_char) -> Option<FnVoidFunction>;

pub type FnGetDeviceProcAddr =
    extern "system" fn(device: Device, name: *const c_char) -> Option<FnVoidFunction>;
