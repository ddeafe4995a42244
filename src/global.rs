//! Process-wide default tables.
//!
//! Most programs should thread [`LoaderFunctions`] and friends through
//! explicitly; these defaults exist for the minority that want one shared
//! set of tables for the whole process. Each tier is initialized exactly
//! once, in tier order, and is immutable afterwards; racing initializers are
//! well defined (one wins, the others get an error).

use std::ffi::CStr;
use std::sync::OnceLock;

use thiserror::Error;

use crate::{
    Device, DeviceFunctions, FnVoidFunction, Instance, InstanceFunctions, LoaderFunctions,
};

static LOADER: OnceLock<LoaderFunctions> = OnceLock::new();
static INSTANCE: OnceLock<InstanceFunctions> = OnceLock::new();
static DEVICE: OnceLock<DeviceFunctions> = OnceLock::new();

/// Violations of the initialize-once, tier-order lifetime rules. Individual
/// entry points that fail to resolve are never an error; they stay `None` in
/// the table.
#[derive(Debug, Error)]
pub enum GlobalLoadError {
    #[error("process-wide loader table is already initialized")]
    LoaderAlreadyInitialized,
    #[error("process-wide instance table is already initialized")]
    InstanceAlreadyInitialized,
    #[error("process-wide device table is already initialized")]
    DeviceAlreadyInitialized,
    #[error("process-wide loader table is not initialized")]
    LoaderNotInitialized,
    #[error("process-wide instance table is not initialized")]
    InstanceNotInitialized,
}

/// Populates the process-wide loader table through `resolve`. The first call
/// wins; later calls fail and leave the table untouched.
pub fn init<F>(resolve: F) -> Result<(), GlobalLoadError>
where
    F: FnMut(&CStr) -> Option<FnVoidFunction>,
{
    set_loader(LoaderFunctions::load(resolve))
}

/// [`init`], resolving from a caller-owned Vulkan library.
pub fn init_from_library(library: &libloading::Library) -> Result<(), GlobalLoadError> {
    set_loader(LoaderFunctions::from_library(library))
}

fn set_loader(table: LoaderFunctions) -> Result<(), GlobalLoadError> {
    LOADER
        .set(table)
        .map_err(|_| GlobalLoadError::LoaderAlreadyInitialized)
}

/// Populates the process-wide instance table for `instance` through the
/// process-wide loader table.
pub fn load_instance(instance: Instance) -> Result<(), GlobalLoadError> {
    let loader = LOADER.get().ok_or(GlobalLoadError::LoaderNotInitialized)?;
    INSTANCE
        .set(InstanceFunctions::load(loader, instance))
        .map_err(|_| GlobalLoadError::InstanceAlreadyInitialized)
}

/// Populates the process-wide device table for `device` through the
/// process-wide instance table.
pub fn load_device(device: Device) -> Result<(), GlobalLoadError> {
    let instance_functions = INSTANCE
        .get()
        .ok_or(GlobalLoadError::InstanceNotInitialized)?;
    DEVICE
        .set(DeviceFunctions::load(instance_functions, device))
        .map_err(|_| GlobalLoadError::DeviceAlreadyInitialized)
}

pub fn loader() -> Option<&'static LoaderFunctions> {
    LOADER.get()
}

pub fn instance() -> Option<&'static InstanceFunctions> {
    INSTANCE.get()
}

pub fn device() -> Option<&'static DeviceFunctions> {
    DEVICE.get()
}
