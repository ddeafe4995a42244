//! Procedure-pointer tables for Vulkan's staged dispatch model.
//!
//! Vulkan entry points are not statically linked; they are resolved by name,
//! in three tiers that mirror the API's object lifecycle:
//!
//! 1. **Loader tier** — resolved from the Vulkan library itself, before any
//!    API object exists ([`LoaderFunctions`]).
//! 2. **Instance tier** — resolved through `vkGetInstanceProcAddr` once the
//!    caller has created an instance ([`InstanceFunctions`]).
//! 3. **Device tier** — resolved through `vkGetDeviceProcAddr` once the
//!    caller has created a device ([`DeviceFunctions`]).
//!
//! Population is total and silent: every declared slot is written exactly
//! once, and a name the implementation does not provide is recorded as
//! `None`. Tier ordering is not validated; loading the instance tier from a
//! loader table whose `vkGetInstanceProcAddr` slot is unresolved yields a
//! table of `None` slots, not an error. The caller owns the library handle,
//! the instance and the device, and must not invoke unresolved slots.
//!
//! ```no_run
//! let library = unsafe { libloading::Library::new("libvulkan.so.1") }.unwrap();
//! let loader = vulkan_loader::LoaderFunctions::from_library(&library);
//! assert!(loader.create_instance.is_some());
//!
//! // ...create an instance through `loader.create_instance`, then:
//! # let instance = vulkan_loader::Instance::null();
//! let instance_functions = vulkan_loader::InstanceFunctions::load(&loader, instance);
//! ```
//!
//! Tables are plain values and callers may hold as many as they like, e.g.
//! one device table per device. The [`global`] module offers process-wide
//! defaults behind initialize-once rules for programs that want a single
//! shared set.
//!
//! Window-system specific entry points are compiled in per family via the
//! `xcb`, `xlib`, `wayland`, `win32`, `android` and `metal` cargo features;
//! a disabled family's slots do not exist in the table types at all.

mod functions;
mod handles;
mod table;
mod tables;

pub mod global;

pub use functions::{FnGetDeviceProcAddr, FnGetInstanceProcAddr, FnVoidFunction};
pub use handles::{Device, Instance};
pub use tables::{DeviceFunctions, InstanceFunctions, LoaderFunctions};
