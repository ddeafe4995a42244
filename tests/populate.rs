use std::collections::HashMap;
use std::ffi::{CStr, CString};
use std::mem::transmute;
use std::os::raw::c_char;

use vulkan_loader::{
    Device, DeviceFunctions, FnGetDeviceProcAddr, FnGetInstanceProcAddr, FnVoidFunction, Instance,
    InstanceFunctions, LoaderFunctions,
};

fn sentinel(addr: usize) -> FnVoidFunction {
    assert_ne!(addr, 0);
    unsafe { transmute::<usize, FnVoidFunction>(addr) }
}

fn addr_of(slot: Option<FnVoidFunction>) -> Option<usize> {
    slot.map(|function| function as usize)
}

fn loader_slots(table: &LoaderFunctions) -> Vec<(&'static CStr, Option<usize>)> {
    let mut slots = Vec::new();
    table.for_each_slot(|name, slot| slots.push((name, addr_of(slot))));
    slots
}

#[test]
fn loader_slots_match_resolver() {
    let mut assigned = HashMap::new();
    let mut next = 0x1000usize;
    let table = LoaderFunctions::load(|name| {
        let addr = next;
        next += 16;
        assigned.insert(name.to_owned(), addr);
        Some(sentinel(addr))
    });

    let mut visited = 0;
    table.for_each_slot(|name, slot| {
        visited += 1;
        assert_eq!(addr_of(slot), Some(assigned[&name.to_owned()]));
    });
    assert_eq!(visited, assigned.len());
    assert!(table.unresolved_names().is_empty());
}

#[test]
fn null_resolver_populates_null_slots() {
    let table = LoaderFunctions::load(|_| None);
    let mut total = 0;
    table.for_each_slot(|_, slot| {
        total += 1;
        assert!(slot.is_none());
    });
    assert_eq!(table.unresolved_names().len(), total);
}

#[test]
fn population_is_idempotent() {
    fn resolve(name: &CStr) -> Option<FnVoidFunction> {
        let mut hash = 0xcbf29ce484222325usize;
        for &byte in name.to_bytes() {
            hash = (hash ^ byte as usize).wrapping_mul(0x100000001b3);
        }
        Some(sentinel(hash | 1))
    }

    let first = LoaderFunctions::load(resolve);
    let second = LoaderFunctions::load(resolve);
    assert_eq!(loader_slots(&first), loader_slots(&second));
}

#[test]
fn create_instance_scenario() {
    let table = LoaderFunctions::load(|name| {
        (name == c"vkCreateInstance").then(|| sentinel(0x1000))
    });
    assert_eq!(addr_of(table.create_instance), Some(0x1000));
    assert_eq!(addr_of(table.enumerate_instance_version), None);
    assert_eq!(addr_of(table.get_instance_proc_addr), None);
}

extern "system" fn get_instance_proc_addr_destroy_only(
    _instance: Instance,
    name: *const c_char,
) -> Option<FnVoidFunction> {
    let name = unsafe { CStr::from_ptr(name) };
    (name == c"vkDestroyInstance").then(|| sentinel(0x2000))
}

#[test]
fn instance_population_goes_through_fixed_resolver() {
    let mut loader = LoaderFunctions::default();
    loader.get_instance_proc_addr = Some(unsafe {
        transmute::<FnGetInstanceProcAddr, FnVoidFunction>(get_instance_proc_addr_destroy_only)
    });

    let table = InstanceFunctions::load(&loader, Instance::null());
    assert_eq!(addr_of(table.destroy_instance), Some(0x2000));

    let mut resolved = 0;
    table.for_each_slot(|_, slot| resolved += usize::from(slot.is_some()));
    assert_eq!(resolved, 1);
}

extern "system" fn get_device_proc_addr_all(
    _device: Device,
    name: *const c_char,
) -> Option<FnVoidFunction> {
    let name = unsafe { CStr::from_ptr(name) };
    let mut hash = 0xcbf29ce484222325usize;
    for &byte in name.to_bytes() {
        hash = (hash ^ byte as usize).wrapping_mul(0x100000001b3);
    }
    Some(sentinel(hash | 1))
}

#[test]
fn device_population_goes_through_fixed_resolver() {
    let mut instance_functions = InstanceFunctions::default();
    instance_functions.get_device_proc_addr = Some(unsafe {
        transmute::<FnGetDeviceProcAddr, FnVoidFunction>(get_device_proc_addr_all)
    });

    let table = DeviceFunctions::load(&instance_functions, Device::null());
    assert!(table.unresolved_names().is_empty());
    assert!(table.destroy_device.is_some());
    assert!(table.queue_submit.is_some());
}

#[test]
fn skipped_loader_tier_yields_null_instance_table() {
    let table = InstanceFunctions::load(&LoaderFunctions::default(), Instance::null());
    table.for_each_slot(|_, slot| assert!(slot.is_none()));
}

#[test]
fn skipped_instance_tier_yields_null_device_table() {
    let table = DeviceFunctions::load(&InstanceFunctions::default(), Device::null());
    table.for_each_slot(|_, slot| assert!(slot.is_none()));
}

#[test]
fn explicit_tables_do_not_alias() {
    let one = LoaderFunctions::load(|_| Some(sentinel(0x3000)));
    let two = LoaderFunctions::load(|_| None);
    assert_eq!(addr_of(one.create_instance), Some(0x3000));
    assert_eq!(addr_of(two.create_instance), None);
}

#[test]
fn resolver_sees_stable_names() {
    let mut seen: Vec<CString> = Vec::new();
    LoaderFunctions::load(|name| {
        seen.push(name.to_owned());
        None
    });
    assert!(seen.contains(&CString::new("vkGetInstanceProcAddr").unwrap()));
    assert!(seen.contains(&CString::new("vkEnumerateInstanceLayerProperties").unwrap()));
}
