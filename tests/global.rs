//! The process-wide tables are statics, so every lifetime rule is exercised
//! from a single test in a fixed order.

use std::mem::transmute;

use vulkan_loader::global::{self, GlobalLoadError};
use vulkan_loader::{Device, FnVoidFunction, Instance, LoaderFunctions};

fn sentinel(addr: usize) -> FnVoidFunction {
    assert_ne!(addr, 0);
    unsafe { transmute::<usize, FnVoidFunction>(addr) }
}

fn addr_of(slot: Option<FnVoidFunction>) -> Option<usize> {
    slot.map(|function| function as usize)
}

#[test]
fn global_tables_follow_lifetime_rules() {
    // Out-of-order initialization is rejected before any table exists.
    assert!(matches!(
        global::load_instance(Instance::null()),
        Err(GlobalLoadError::LoaderNotInitialized)
    ));
    assert!(matches!(
        global::load_device(Device::null()),
        Err(GlobalLoadError::InstanceNotInitialized)
    ));
    assert!(global::loader().is_none());
    assert!(global::instance().is_none());
    assert!(global::device().is_none());

    global::init(|name| (name == c"vkCreateInstance").then(|| sentinel(0x1000))).unwrap();
    let loader = global::loader().unwrap();
    assert_eq!(addr_of(loader.create_instance), Some(0x1000));
    assert_eq!(addr_of(loader.enumerate_instance_version), None);

    // An explicitly-loaded table and the process-wide one do not contaminate
    // each other.
    let explicit = LoaderFunctions::load(|_| Some(sentinel(0x9000)));
    assert_eq!(addr_of(explicit.create_instance), Some(0x9000));
    assert_eq!(
        addr_of(global::loader().unwrap().create_instance),
        Some(0x1000)
    );

    // Re-initialization fails and leaves the table untouched.
    assert!(matches!(
        global::init(|_| Some(sentinel(0x9000))),
        Err(GlobalLoadError::LoaderAlreadyInitialized)
    ));
    assert_eq!(
        addr_of(global::loader().unwrap().create_instance),
        Some(0x1000)
    );

    // The loader table above has no vkGetInstanceProcAddr; the instance tier
    // still populates, to all-null slots.
    global::load_instance(Instance::null()).unwrap();
    let instance_functions = global::instance().unwrap();
    assert!(instance_functions.destroy_instance.is_none());
    assert!(matches!(
        global::load_instance(Instance::null()),
        Err(GlobalLoadError::InstanceAlreadyInitialized)
    ));

    global::load_device(Device::null()).unwrap();
    assert!(global::device().unwrap().destroy_device.is_none());
    assert!(matches!(
        global::load_device(Device::null()),
        Err(GlobalLoadError::DeviceAlreadyInitialized)
    ));
}
