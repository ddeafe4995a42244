//! The three per-tier procedure tables and their population entry points.
//!
//! Slot declarations are grouped by the core version or extension that
//! introduces them. Functions dispatching on `VkInstance` or
//! `VkPhysicalDevice` live in the instance tier, functions dispatching on
//! `VkDevice`, `VkQueue` or `VkCommandBuffer` in the device tier, with the
//! usual exception of `VK_EXT_debug_utils`, whose device-level entry points
//! must still be resolved through `vkGetInstanceProcAddr`.

use std::ffi::CStr;
use std::mem::transmute;

use log::{debug, log_enabled, trace, Level};

use crate::table::proc_table;
use crate::{Device, FnGetDeviceProcAddr, FnGetInstanceProcAddr, FnVoidFunction, Instance};

macro_rules! log_population {
    ($tier:literal, $table:expr) => {{
        let mut total = 0usize;
        let mut resolved = 0usize;
        $table.for_each_slot(|_, slot| {
            total += 1;
            resolved += usize::from(slot.is_some());
        });
        debug!(concat!($tier, " table populated: {}/{} entry points resolved"), resolved, total);
        if log_enabled!(Level::Trace) {
            for name in $table.unresolved_names() {
                trace!(concat!($tier, " entry point {:?} unresolved"), name);
            }
        }
    }};
}

proc_table! {
    /// Entry points obtainable from the Vulkan library before any instance
    /// exists.
    pub struct LoaderFunctions {
        get_instance_proc_addr => c"vkGetInstanceProcAddr",
        create_instance => c"vkCreateInstance",
        enumerate_instance_version => c"vkEnumerateInstanceVersion",
        enumerate_instance_extension_properties => c"vkEnumerateInstanceExtensionProperties",
        enumerate_instance_layer_properties => c"vkEnumerateInstanceLayerProperties",
    }
}

proc_table! {
    /// Instance- and physical-device-level entry points, resolved through the
    /// loader table's `vkGetInstanceProcAddr`.
    pub struct InstanceFunctions {
        destroy_instance => c"vkDestroyInstance",
        enumerate_physical_devices => c"vkEnumeratePhysicalDevices",
        get_physical_device_features => c"vkGetPhysicalDeviceFeatures",
        get_physical_device_format_properties => c"vkGetPhysicalDeviceFormatProperties",
        get_physical_device_image_format_properties => c"vkGetPhysicalDeviceImageFormatProperties",
        get_physical_device_properties => c"vkGetPhysicalDeviceProperties",
        get_physical_device_queue_family_properties => c"vkGetPhysicalDeviceQueueFamilyProperties",
        get_physical_device_memory_properties => c"vkGetPhysicalDeviceMemoryProperties",
        get_physical_device_sparse_image_format_properties => c"vkGetPhysicalDeviceSparseImageFormatProperties",
        create_device => c"vkCreateDevice",
        get_device_proc_addr => c"vkGetDeviceProcAddr",
        enumerate_device_extension_properties => c"vkEnumerateDeviceExtensionProperties",
        enumerate_device_layer_properties => c"vkEnumerateDeviceLayerProperties",

        // VERSION_1_1
        enumerate_physical_device_groups => c"vkEnumeratePhysicalDeviceGroups",
        get_physical_device_features2 => c"vkGetPhysicalDeviceFeatures2",
        get_physical_device_properties2 => c"vkGetPhysicalDeviceProperties2",
        get_physical_device_format_properties2 => c"vkGetPhysicalDeviceFormatProperties2",
        get_physical_device_image_format_properties2 => c"vkGetPhysicalDeviceImageFormatProperties2",
        get_physical_device_queue_family_properties2 => c"vkGetPhysicalDeviceQueueFamilyProperties2",
        get_physical_device_memory_properties2 => c"vkGetPhysicalDeviceMemoryProperties2",
        get_physical_device_sparse_image_format_properties2 => c"vkGetPhysicalDeviceSparseImageFormatProperties2",
        get_physical_device_external_buffer_properties => c"vkGetPhysicalDeviceExternalBufferProperties",
        get_physical_device_external_fence_properties => c"vkGetPhysicalDeviceExternalFenceProperties",
        get_physical_device_external_semaphore_properties => c"vkGetPhysicalDeviceExternalSemaphoreProperties",

        // VERSION_1_3
        get_physical_device_tool_properties => c"vkGetPhysicalDeviceToolProperties",

        // VK_KHR_surface
        destroy_surface_khr => c"vkDestroySurfaceKHR",
        get_physical_device_surface_support_khr => c"vkGetPhysicalDeviceSurfaceSupportKHR",
        get_physical_device_surface_capabilities_khr => c"vkGetPhysicalDeviceSurfaceCapabilitiesKHR",
        get_physical_device_surface_formats_khr => c"vkGetPhysicalDeviceSurfaceFormatsKHR",
        get_physical_device_surface_present_modes_khr => c"vkGetPhysicalDeviceSurfacePresentModesKHR",

        // VK_KHR_get_surface_capabilities2
        get_physical_device_surface_capabilities2_khr => c"vkGetPhysicalDeviceSurfaceCapabilities2KHR",
        get_physical_device_surface_formats2_khr => c"vkGetPhysicalDeviceSurfaceFormats2KHR",

        // VK_KHR_swapchain
        get_physical_device_present_rectangles_khr => c"vkGetPhysicalDevicePresentRectanglesKHR",

        // VK_KHR_display
        get_physical_device_display_properties_khr => c"vkGetPhysicalDeviceDisplayPropertiesKHR",
        get_physical_device_display_plane_properties_khr => c"vkGetPhysicalDeviceDisplayPlanePropertiesKHR",
        get_display_plane_supported_displays_khr => c"vkGetDisplayPlaneSupportedDisplaysKHR",
        get_display_mode_properties_khr => c"vkGetDisplayModePropertiesKHR",
        create_display_mode_khr => c"vkCreateDisplayModeKHR",
        get_display_plane_capabilities_khr => c"vkGetDisplayPlaneCapabilitiesKHR",
        create_display_plane_surface_khr => c"vkCreateDisplayPlaneSurfaceKHR",

        // VK_KHR_get_display_properties2
        get_physical_device_display_properties2_khr => c"vkGetPhysicalDeviceDisplayProperties2KHR",
        get_physical_device_display_plane_properties2_khr => c"vkGetPhysicalDeviceDisplayPlaneProperties2KHR",
        get_display_mode_properties2_khr => c"vkGetDisplayModeProperties2KHR",
        get_display_plane_capabilities2_khr => c"vkGetDisplayPlaneCapabilities2KHR",

        // VK_KHR_performance_query
        enumerate_physical_device_queue_family_performance_query_counters_khr => c"vkEnumeratePhysicalDeviceQueueFamilyPerformanceQueryCountersKHR",
        get_physical_device_queue_family_performance_query_passes_khr => c"vkGetPhysicalDeviceQueueFamilyPerformanceQueryPassesKHR",

        // VK_KHR_fragment_shading_rate
        get_physical_device_fragment_shading_rates_khr => c"vkGetPhysicalDeviceFragmentShadingRatesKHR",

        // VK_KHR_video_queue
        get_physical_device_video_capabilities_khr => c"vkGetPhysicalDeviceVideoCapabilitiesKHR",
        get_physical_device_video_format_properties_khr => c"vkGetPhysicalDeviceVideoFormatPropertiesKHR",

        // VK_KHR_video_encode_queue
        get_physical_device_video_encode_quality_level_properties_khr => c"vkGetPhysicalDeviceVideoEncodeQualityLevelPropertiesKHR",

        // VK_KHR_cooperative_matrix
        get_physical_device_cooperative_matrix_properties_khr => c"vkGetPhysicalDeviceCooperativeMatrixPropertiesKHR",

        // VK_EXT_debug_report
        create_debug_report_callback_ext => c"vkCreateDebugReportCallbackEXT",
        destroy_debug_report_callback_ext => c"vkDestroyDebugReportCallbackEXT",
        debug_report_message_ext => c"vkDebugReportMessageEXT",

        // VK_EXT_debug_utils
        create_debug_utils_messenger_ext => c"vkCreateDebugUtilsMessengerEXT",
        destroy_debug_utils_messenger_ext => c"vkDestroyDebugUtilsMessengerEXT",
        submit_debug_utils_message_ext => c"vkSubmitDebugUtilsMessageEXT",
        cmd_begin_debug_utils_label_ext => c"vkCmdBeginDebugUtilsLabelEXT",
        cmd_end_debug_utils_label_ext => c"vkCmdEndDebugUtilsLabelEXT",
        cmd_insert_debug_utils_label_ext => c"vkCmdInsertDebugUtilsLabelEXT",
        queue_begin_debug_utils_label_ext => c"vkQueueBeginDebugUtilsLabelEXT",
        queue_end_debug_utils_label_ext => c"vkQueueEndDebugUtilsLabelEXT",
        queue_insert_debug_utils_label_ext => c"vkQueueInsertDebugUtilsLabelEXT",
        set_debug_utils_object_name_ext => c"vkSetDebugUtilsObjectNameEXT",
        set_debug_utils_object_tag_ext => c"vkSetDebugUtilsObjectTagEXT",

        // VK_EXT_sample_locations
        get_physical_device_multisample_properties_ext => c"vkGetPhysicalDeviceMultisamplePropertiesEXT",

        // VK_EXT_calibrated_timestamps
        get_physical_device_calibrateable_time_domains_ext => c"vkGetPhysicalDeviceCalibrateableTimeDomainsEXT",

        // VK_EXT_direct_mode_display
        release_display_ext => c"vkReleaseDisplayEXT",

        // VK_EXT_display_surface_counter
        get_physical_device_surface_capabilities2_ext => c"vkGetPhysicalDeviceSurfaceCapabilities2EXT",

        // VK_EXT_acquire_drm_display
        acquire_drm_display_ext => c"vkAcquireDrmDisplayEXT",
        get_drm_display_ext => c"vkGetDrmDisplayEXT",

        // VK_EXT_headless_surface
        create_headless_surface_ext => c"vkCreateHeadlessSurfaceEXT",

        // VK_KHR_xcb_surface
        #[cfg(feature = "xcb")]
        create_xcb_surface_khr => c"vkCreateXcbSurfaceKHR",
        #[cfg(feature = "xcb")]
        get_physical_device_xcb_presentation_support_khr => c"vkGetPhysicalDeviceXcbPresentationSupportKHR",

        // VK_KHR_xlib_surface
        #[cfg(feature = "xlib")]
        create_xlib_surface_khr => c"vkCreateXlibSurfaceKHR",
        #[cfg(feature = "xlib")]
        get_physical_device_xlib_presentation_support_khr => c"vkGetPhysicalDeviceXlibPresentationSupportKHR",

        // VK_EXT_acquire_xlib_display
        #[cfg(feature = "xlib")]
        acquire_xlib_display_ext => c"vkAcquireXlibDisplayEXT",
        #[cfg(feature = "xlib")]
        get_rand_r_output_display_ext => c"vkGetRandROutputDisplayEXT",

        // VK_KHR_wayland_surface
        #[cfg(feature = "wayland")]
        create_wayland_surface_khr => c"vkCreateWaylandSurfaceKHR",
        #[cfg(feature = "wayland")]
        get_physical_device_wayland_presentation_support_khr => c"vkGetPhysicalDeviceWaylandPresentationSupportKHR",

        // VK_KHR_win32_surface
        #[cfg(feature = "win32")]
        create_win32_surface_khr => c"vkCreateWin32SurfaceKHR",
        #[cfg(feature = "win32")]
        get_physical_device_win32_presentation_support_khr => c"vkGetPhysicalDeviceWin32PresentationSupportKHR",

        // VK_EXT_full_screen_exclusive
        #[cfg(feature = "win32")]
        get_physical_device_surface_present_modes2_ext => c"vkGetPhysicalDeviceSurfacePresentModes2EXT",

        // VK_KHR_android_surface
        #[cfg(feature = "android")]
        create_android_surface_khr => c"vkCreateAndroidSurfaceKHR",

        // VK_EXT_metal_surface
        #[cfg(feature = "metal")]
        create_metal_surface_ext => c"vkCreateMetalSurfaceEXT",
    }
}

proc_table! {
    /// Device-level entry points, resolved through the instance table's
    /// `vkGetDeviceProcAddr`.
    pub struct DeviceFunctions {
        destroy_device => c"vkDestroyDevice",
        get_device_queue => c"vkGetDeviceQueue",
        queue_submit => c"vkQueueSubmit",
        queue_wait_idle => c"vkQueueWaitIdle",
        device_wait_idle => c"vkDeviceWaitIdle",
        allocate_memory => c"vkAllocateMemory",
        free_memory => c"vkFreeMemory",
        map_memory => c"vkMapMemory",
        unmap_memory => c"vkUnmapMemory",
        flush_mapped_memory_ranges => c"vkFlushMappedMemoryRanges",
        invalidate_mapped_memory_ranges => c"vkInvalidateMappedMemoryRanges",
        get_device_memory_commitment => c"vkGetDeviceMemoryCommitment",
        bind_buffer_memory => c"vkBindBufferMemory",
        bind_image_memory => c"vkBindImageMemory",
        get_buffer_memory_requirements => c"vkGetBufferMemoryRequirements",
        get_image_memory_requirements => c"vkGetImageMemoryRequirements",
        get_image_sparse_memory_requirements => c"vkGetImageSparseMemoryRequirements",
        queue_bind_sparse => c"vkQueueBindSparse",
        create_fence => c"vkCreateFence",
        destroy_fence => c"vkDestroyFence",
        reset_fences => c"vkResetFences",
        get_fence_status => c"vkGetFenceStatus",
        wait_for_fences => c"vkWaitForFences",
        create_semaphore => c"vkCreateSemaphore",
        destroy_semaphore => c"vkDestroySemaphore",
        create_event => c"vkCreateEvent",
        destroy_event => c"vkDestroyEvent",
        get_event_status => c"vkGetEventStatus",
        set_event => c"vkSetEvent",
        reset_event => c"vkResetEvent",
        create_query_pool => c"vkCreateQueryPool",
        destroy_query_pool => c"vkDestroyQueryPool",
        get_query_pool_results => c"vkGetQueryPoolResults",
        create_buffer => c"vkCreateBuffer",
        destroy_buffer => c"vkDestroyBuffer",
        create_buffer_view => c"vkCreateBufferView",
        destroy_buffer_view => c"vkDestroyBufferView",
        create_image => c"vkCreateImage",
        destroy_image => c"vkDestroyImage",
        get_image_subresource_layout => c"vkGetImageSubresourceLayout",
        create_image_view => c"vkCreateImageView",
        destroy_image_view => c"vkDestroyImageView",
        create_shader_module => c"vkCreateShaderModule",
        destroy_shader_module => c"vkDestroyShaderModule",
        create_pipeline_cache => c"vkCreatePipelineCache",
        destroy_pipeline_cache => c"vkDestroyPipelineCache",
        get_pipeline_cache_data => c"vkGetPipelineCacheData",
        merge_pipeline_caches => c"vkMergePipelineCaches",
        create_graphics_pipelines => c"vkCreateGraphicsPipelines",
        create_compute_pipelines => c"vkCreateComputePipelines",
        destroy_pipeline => c"vkDestroyPipeline",
        create_pipeline_layout => c"vkCreatePipelineLayout",
        destroy_pipeline_layout => c"vkDestroyPipelineLayout",
        create_sampler => c"vkCreateSampler",
        destroy_sampler => c"vkDestroySampler",
        create_descriptor_set_layout => c"vkCreateDescriptorSetLayout",
        destroy_descriptor_set_layout => c"vkDestroyDescriptorSetLayout",
        create_descriptor_pool => c"vkCreateDescriptorPool",
        destroy_descriptor_pool => c"vkDestroyDescriptorPool",
        reset_descriptor_pool => c"vkResetDescriptorPool",
        allocate_descriptor_sets => c"vkAllocateDescriptorSets",
        free_descriptor_sets => c"vkFreeDescriptorSets",
        update_descriptor_sets => c"vkUpdateDescriptorSets",
        create_framebuffer => c"vkCreateFramebuffer",
        destroy_framebuffer => c"vkDestroyFramebuffer",
        create_render_pass => c"vkCreateRenderPass",
        destroy_render_pass => c"vkDestroyRenderPass",
        get_render_area_granularity => c"vkGetRenderAreaGranularity",
        create_command_pool => c"vkCreateCommandPool",
        destroy_command_pool => c"vkDestroyCommandPool",
        reset_command_pool => c"vkResetCommandPool",
        allocate_command_buffers => c"vkAllocateCommandBuffers",
        free_command_buffers => c"vkFreeCommandBuffers",
        begin_command_buffer => c"vkBeginCommandBuffer",
        end_command_buffer => c"vkEndCommandBuffer",
        reset_command_buffer => c"vkResetCommandBuffer",
        cmd_bind_pipeline => c"vkCmdBindPipeline",
        cmd_set_viewport => c"vkCmdSetViewport",
        cmd_set_scissor => c"vkCmdSetScissor",
        cmd_set_line_width => c"vkCmdSetLineWidth",
        cmd_set_depth_bias => c"vkCmdSetDepthBias",
        cmd_set_blend_constants => c"vkCmdSetBlendConstants",
        cmd_set_depth_bounds => c"vkCmdSetDepthBounds",
        cmd_set_stencil_compare_mask => c"vkCmdSetStencilCompareMask",
        cmd_set_stencil_write_mask => c"vkCmdSetStencilWriteMask",
        cmd_set_stencil_reference => c"vkCmdSetStencilReference",
        cmd_bind_descriptor_sets => c"vkCmdBindDescriptorSets",
        cmd_bind_index_buffer => c"vkCmdBindIndexBuffer",
        cmd_bind_vertex_buffers => c"vkCmdBindVertexBuffers",
        cmd_draw => c"vkCmdDraw",
        cmd_draw_indexed => c"vkCmdDrawIndexed",
        cmd_draw_indirect => c"vkCmdDrawIndirect",
        cmd_draw_indexed_indirect => c"vkCmdDrawIndexedIndirect",
        cmd_dispatch => c"vkCmdDispatch",
        cmd_dispatch_indirect => c"vkCmdDispatchIndirect",
        cmd_copy_buffer => c"vkCmdCopyBuffer",
        cmd_copy_image => c"vkCmdCopyImage",
        cmd_blit_image => c"vkCmdBlitImage",
        cmd_copy_buffer_to_image => c"vkCmdCopyBufferToImage",
        cmd_copy_image_to_buffer => c"vkCmdCopyImageToBuffer",
        cmd_update_buffer => c"vkCmdUpdateBuffer",
        cmd_fill_buffer => c"vkCmdFillBuffer",
        cmd_clear_color_image => c"vkCmdClearColorImage",
        cmd_clear_depth_stencil_image => c"vkCmdClearDepthStencilImage",
        cmd_clear_attachments => c"vkCmdClearAttachments",
        cmd_resolve_image => c"vkCmdResolveImage",
        cmd_set_event => c"vkCmdSetEvent",
        cmd_reset_event => c"vkCmdResetEvent",
        cmd_wait_events => c"vkCmdWaitEvents",
        cmd_pipeline_barrier => c"vkCmdPipelineBarrier",
        cmd_begin_query => c"vkCmdBeginQuery",
        cmd_end_query => c"vkCmdEndQuery",
        cmd_reset_query_pool => c"vkCmdResetQueryPool",
        cmd_write_timestamp => c"vkCmdWriteTimestamp",
        cmd_copy_query_pool_results => c"vkCmdCopyQueryPoolResults",
        cmd_push_constants => c"vkCmdPushConstants",
        cmd_begin_render_pass => c"vkCmdBeginRenderPass",
        cmd_next_subpass => c"vkCmdNextSubpass",
        cmd_end_render_pass => c"vkCmdEndRenderPass",
        cmd_execute_commands => c"vkCmdExecuteCommands",

        // VERSION_1_1
        bind_buffer_memory2 => c"vkBindBufferMemory2",
        bind_image_memory2 => c"vkBindImageMemory2",
        get_device_group_peer_memory_features => c"vkGetDeviceGroupPeerMemoryFeatures",
        cmd_set_device_mask => c"vkCmdSetDeviceMask",
        cmd_dispatch_base => c"vkCmdDispatchBase",
        get_image_memory_requirements2 => c"vkGetImageMemoryRequirements2",
        get_buffer_memory_requirements2 => c"vkGetBufferMemoryRequirements2",
        get_image_sparse_memory_requirements2 => c"vkGetImageSparseMemoryRequirements2",
        trim_command_pool => c"vkTrimCommandPool",
        get_device_queue2 => c"vkGetDeviceQueue2",
        create_sampler_ycbcr_conversion => c"vkCreateSamplerYcbcrConversion",
        destroy_sampler_ycbcr_conversion => c"vkDestroySamplerYcbcrConversion",
        create_descriptor_update_template => c"vkCreateDescriptorUpdateTemplate",
        destroy_descriptor_update_template => c"vkDestroyDescriptorUpdateTemplate",
        update_descriptor_set_with_template => c"vkUpdateDescriptorSetWithTemplate",
        get_descriptor_set_layout_support => c"vkGetDescriptorSetLayoutSupport",

        // VERSION_1_2
        cmd_draw_indirect_count => c"vkCmdDrawIndirectCount",
        cmd_draw_indexed_indirect_count => c"vkCmdDrawIndexedIndirectCount",
        create_render_pass2 => c"vkCreateRenderPass2",
        cmd_begin_render_pass2 => c"vkCmdBeginRenderPass2",
        cmd_next_subpass2 => c"vkCmdNextSubpass2",
        cmd_end_render_pass2 => c"vkCmdEndRenderPass2",
        reset_query_pool => c"vkResetQueryPool",
        get_semaphore_counter_value => c"vkGetSemaphoreCounterValue",
        wait_semaphores => c"vkWaitSemaphores",
        signal_semaphore => c"vkSignalSemaphore",
        get_buffer_device_address => c"vkGetBufferDeviceAddress",
        get_buffer_opaque_capture_address => c"vkGetBufferOpaqueCaptureAddress",
        get_device_memory_opaque_capture_address => c"vkGetDeviceMemoryOpaqueCaptureAddress",

        // VERSION_1_3
        create_private_data_slot => c"vkCreatePrivateDataSlot",
        destroy_private_data_slot => c"vkDestroyPrivateDataSlot",
        set_private_data => c"vkSetPrivateData",
        get_private_data => c"vkGetPrivateData",
        cmd_set_event2 => c"vkCmdSetEvent2",
        cmd_reset_event2 => c"vkCmdResetEvent2",
        cmd_wait_events2 => c"vkCmdWaitEvents2",
        cmd_pipeline_barrier2 => c"vkCmdPipelineBarrier2",
        cmd_write_timestamp2 => c"vkCmdWriteTimestamp2",
        queue_submit2 => c"vkQueueSubmit2",
        cmd_copy_buffer2 => c"vkCmdCopyBuffer2",
        cmd_copy_image2 => c"vkCmdCopyImage2",
        cmd_copy_buffer_to_image2 => c"vkCmdCopyBufferToImage2",
        cmd_copy_image_to_buffer2 => c"vkCmdCopyImageToBuffer2",
        cmd_blit_image2 => c"vkCmdBlitImage2",
        cmd_resolve_image2 => c"vkCmdResolveImage2",
        cmd_begin_rendering => c"vkCmdBeginRendering",
        cmd_end_rendering => c"vkCmdEndRendering",
        cmd_set_cull_mode => c"vkCmdSetCullMode",
        cmd_set_front_face => c"vkCmdSetFrontFace",
        cmd_set_primitive_topology => c"vkCmdSetPrimitiveTopology",
        cmd_set_viewport_with_count => c"vkCmdSetViewportWithCount",
        cmd_set_scissor_with_count => c"vkCmdSetScissorWithCount",
        cmd_bind_vertex_buffers2 => c"vkCmdBindVertexBuffers2",
        cmd_set_depth_test_enable => c"vkCmdSetDepthTestEnable",
        cmd_set_depth_write_enable => c"vkCmdSetDepthWriteEnable",
        cmd_set_depth_compare_op => c"vkCmdSetDepthCompareOp",
        cmd_set_depth_bounds_test_enable => c"vkCmdSetDepthBoundsTestEnable",
        cmd_set_stencil_test_enable => c"vkCmdSetStencilTestEnable",
        cmd_set_stencil_op => c"vkCmdSetStencilOp",
        cmd_set_rasterizer_discard_enable => c"vkCmdSetRasterizerDiscardEnable",
        cmd_set_depth_bias_enable => c"vkCmdSetDepthBiasEnable",
        cmd_set_primitive_restart_enable => c"vkCmdSetPrimitiveRestartEnable",
        get_device_buffer_memory_requirements => c"vkGetDeviceBufferMemoryRequirements",
        get_device_image_memory_requirements => c"vkGetDeviceImageMemoryRequirements",
        get_device_image_sparse_memory_requirements => c"vkGetDeviceImageSparseMemoryRequirements",

        // VK_KHR_swapchain
        create_swapchain_khr => c"vkCreateSwapchainKHR",
        destroy_swapchain_khr => c"vkDestroySwapchainKHR",
        get_swapchain_images_khr => c"vkGetSwapchainImagesKHR",
        acquire_next_image_khr => c"vkAcquireNextImageKHR",
        queue_present_khr => c"vkQueuePresentKHR",
        get_device_group_present_capabilities_khr => c"vkGetDeviceGroupPresentCapabilitiesKHR",
        get_device_group_surface_present_modes_khr => c"vkGetDeviceGroupSurfacePresentModesKHR",
        acquire_next_image2_khr => c"vkAcquireNextImage2KHR",

        // VK_KHR_display_swapchain
        create_shared_swapchains_khr => c"vkCreateSharedSwapchainsKHR",

        // VK_KHR_map_memory2
        map_memory2_khr => c"vkMapMemory2KHR",
        unmap_memory2_khr => c"vkUnmapMemory2KHR",

        // VK_KHR_push_descriptor
        cmd_push_descriptor_set_khr => c"vkCmdPushDescriptorSetKHR",
        cmd_push_descriptor_set_with_template_khr => c"vkCmdPushDescriptorSetWithTemplateKHR",

        // VK_KHR_performance_query
        acquire_profiling_lock_khr => c"vkAcquireProfilingLockKHR",
        release_profiling_lock_khr => c"vkReleaseProfilingLockKHR",

        // VK_KHR_fragment_shading_rate
        cmd_set_fragment_shading_rate_khr => c"vkCmdSetFragmentShadingRateKHR",

        // VK_KHR_present_wait
        wait_for_present_khr => c"vkWaitForPresentKHR",

        // VK_KHR_deferred_host_operations
        create_deferred_operation_khr => c"vkCreateDeferredOperationKHR",
        destroy_deferred_operation_khr => c"vkDestroyDeferredOperationKHR",
        get_deferred_operation_max_concurrency_khr => c"vkGetDeferredOperationMaxConcurrencyKHR",
        get_deferred_operation_result_khr => c"vkGetDeferredOperationResultKHR",
        deferred_operation_join_khr => c"vkDeferredOperationJoinKHR",

        // VK_KHR_acceleration_structure
        create_acceleration_structure_khr => c"vkCreateAccelerationStructureKHR",
        destroy_acceleration_structure_khr => c"vkDestroyAccelerationStructureKHR",
        cmd_build_acceleration_structures_khr => c"vkCmdBuildAccelerationStructuresKHR",
        cmd_build_acceleration_structures_indirect_khr => c"vkCmdBuildAccelerationStructuresIndirectKHR",
        build_acceleration_structures_khr => c"vkBuildAccelerationStructuresKHR",
        copy_acceleration_structure_khr => c"vkCopyAccelerationStructureKHR",
        copy_acceleration_structure_to_memory_khr => c"vkCopyAccelerationStructureToMemoryKHR",
        copy_memory_to_acceleration_structure_khr => c"vkCopyMemoryToAccelerationStructureKHR",
        write_acceleration_structures_properties_khr => c"vkWriteAccelerationStructuresPropertiesKHR",
        cmd_copy_acceleration_structure_khr => c"vkCmdCopyAccelerationStructureKHR",
        cmd_copy_acceleration_structure_to_memory_khr => c"vkCmdCopyAccelerationStructureToMemoryKHR",
        cmd_copy_memory_to_acceleration_structure_khr => c"vkCmdCopyMemoryToAccelerationStructureKHR",
        get_acceleration_structure_device_address_khr => c"vkGetAccelerationStructureDeviceAddressKHR",
        cmd_write_acceleration_structures_properties_khr => c"vkCmdWriteAccelerationStructuresPropertiesKHR",
        get_device_acceleration_structure_compatibility_khr => c"vkGetDeviceAccelerationStructureCompatibilityKHR",
        get_acceleration_structure_build_sizes_khr => c"vkGetAccelerationStructureBuildSizesKHR",

        // VK_KHR_ray_tracing_pipeline
        cmd_trace_rays_khr => c"vkCmdTraceRaysKHR",
        create_ray_tracing_pipelines_khr => c"vkCreateRayTracingPipelinesKHR",
        get_ray_tracing_shader_group_handles_khr => c"vkGetRayTracingShaderGroupHandlesKHR",
        get_ray_tracing_capture_replay_shader_group_handles_khr => c"vkGetRayTracingCaptureReplayShaderGroupHandlesKHR",
        cmd_trace_rays_indirect_khr => c"vkCmdTraceRaysIndirectKHR",
        get_ray_tracing_shader_group_stack_size_khr => c"vkGetRayTracingShaderGroupStackSizeKHR",
        cmd_set_ray_tracing_pipeline_stack_size_khr => c"vkCmdSetRayTracingPipelineStackSizeKHR",

        // VK_KHR_ray_tracing_maintenance1
        cmd_trace_rays_indirect2_khr => c"vkCmdTraceRaysIndirect2KHR",

        // VK_KHR_video_queue
        create_video_session_khr => c"vkCreateVideoSessionKHR",
        destroy_video_session_khr => c"vkDestroyVideoSessionKHR",
        get_video_session_memory_requirements_khr => c"vkGetVideoSessionMemoryRequirementsKHR",
        bind_video_session_memory_khr => c"vkBindVideoSessionMemoryKHR",
        create_video_session_parameters_khr => c"vkCreateVideoSessionParametersKHR",
        update_video_session_parameters_khr => c"vkUpdateVideoSessionParametersKHR",
        destroy_video_session_parameters_khr => c"vkDestroyVideoSessionParametersKHR",
        cmd_begin_video_coding_khr => c"vkCmdBeginVideoCodingKHR",
        cmd_end_video_coding_khr => c"vkCmdEndVideoCodingKHR",
        cmd_control_video_coding_khr => c"vkCmdControlVideoCodingKHR",

        // VK_KHR_video_decode_queue
        cmd_decode_video_khr => c"vkCmdDecodeVideoKHR",

        // VK_KHR_video_encode_queue
        cmd_encode_video_khr => c"vkCmdEncodeVideoKHR",
        get_encoded_video_session_parameters_khr => c"vkGetEncodedVideoSessionParametersKHR",

        // VK_KHR_external_memory_fd
        get_memory_fd_khr => c"vkGetMemoryFdKHR",
        get_memory_fd_properties_khr => c"vkGetMemoryFdPropertiesKHR",

        // VK_KHR_external_semaphore_fd
        import_semaphore_fd_khr => c"vkImportSemaphoreFdKHR",
        get_semaphore_fd_khr => c"vkGetSemaphoreFdKHR",

        // VK_KHR_external_fence_fd
        import_fence_fd_khr => c"vkImportFenceFdKHR",
        get_fence_fd_khr => c"vkGetFenceFdKHR",

        // VK_KHR_maintenance5
        cmd_bind_index_buffer2_khr => c"vkCmdBindIndexBuffer2KHR",
        get_rendering_area_granularity_khr => c"vkGetRenderingAreaGranularityKHR",
        get_device_image_subresource_layout_khr => c"vkGetDeviceImageSubresourceLayoutKHR",
        get_image_subresource_layout2_khr => c"vkGetImageSubresourceLayout2KHR",

        // VK_EXT_debug_marker
        debug_marker_set_object_tag_ext => c"vkDebugMarkerSetObjectTagEXT",
        debug_marker_set_object_name_ext => c"vkDebugMarkerSetObjectNameEXT",
        cmd_debug_marker_begin_ext => c"vkCmdDebugMarkerBeginEXT",
        cmd_debug_marker_end_ext => c"vkCmdDebugMarkerEndEXT",
        cmd_debug_marker_insert_ext => c"vkCmdDebugMarkerInsertEXT",

        // VK_EXT_calibrated_timestamps
        get_calibrated_timestamps_ext => c"vkGetCalibratedTimestampsEXT",

        // VK_EXT_line_rasterization
        cmd_set_line_stipple_ext => c"vkCmdSetLineStippleEXT",

        // VK_EXT_vertex_input_dynamic_state
        cmd_set_vertex_input_ext => c"vkCmdSetVertexInputEXT",

        // VK_EXT_color_write_enable
        cmd_set_color_write_enable_ext => c"vkCmdSetColorWriteEnableEXT",

        // VK_EXT_mesh_shader
        cmd_draw_mesh_tasks_ext => c"vkCmdDrawMeshTasksEXT",
        cmd_draw_mesh_tasks_indirect_ext => c"vkCmdDrawMeshTasksIndirectEXT",
        cmd_draw_mesh_tasks_indirect_count_ext => c"vkCmdDrawMeshTasksIndirectCountEXT",

        // VK_EXT_image_drm_format_modifier
        get_image_drm_format_modifier_properties_ext => c"vkGetImageDrmFormatModifierPropertiesEXT",

        // VK_EXT_validation_cache
        create_validation_cache_ext => c"vkCreateValidationCacheEXT",
        destroy_validation_cache_ext => c"vkDestroyValidationCacheEXT",
        merge_validation_caches_ext => c"vkMergeValidationCachesEXT",
        get_validation_cache_data_ext => c"vkGetValidationCacheDataEXT",

        // VK_EXT_device_fault
        get_device_fault_info_ext => c"vkGetDeviceFaultInfoEXT",

        // VK_EXT_swapchain_maintenance1
        release_swapchain_images_ext => c"vkReleaseSwapchainImagesEXT",

        // VK_EXT_pageable_device_local_memory
        set_device_memory_priority_ext => c"vkSetDeviceMemoryPriorityEXT",

        // VK_KHR_external_memory_win32
        #[cfg(feature = "win32")]
        get_memory_win32_handle_khr => c"vkGetMemoryWin32HandleKHR",
        #[cfg(feature = "win32")]
        get_memory_win32_handle_properties_khr => c"vkGetMemoryWin32HandlePropertiesKHR",

        // VK_KHR_external_semaphore_win32
        #[cfg(feature = "win32")]
        import_semaphore_win32_handle_khr => c"vkImportSemaphoreWin32HandleKHR",
        #[cfg(feature = "win32")]
        get_semaphore_win32_handle_khr => c"vkGetSemaphoreWin32HandleKHR",

        // VK_KHR_external_fence_win32
        #[cfg(feature = "win32")]
        import_fence_win32_handle_khr => c"vkImportFenceWin32HandleKHR",
        #[cfg(feature = "win32")]
        get_fence_win32_handle_khr => c"vkGetFenceWin32HandleKHR",

        // VK_EXT_full_screen_exclusive
        #[cfg(feature = "win32")]
        acquire_full_screen_exclusive_mode_ext => c"vkAcquireFullScreenExclusiveModeEXT",
        #[cfg(feature = "win32")]
        release_full_screen_exclusive_mode_ext => c"vkReleaseFullScreenExclusiveModeEXT",
        #[cfg(feature = "win32")]
        get_device_group_surface_present_modes2_ext => c"vkGetDeviceGroupSurfacePresentModes2EXT",

        // VK_ANDROID_external_memory_android_hardware_buffer
        #[cfg(feature = "android")]
        get_android_hardware_buffer_properties_android => c"vkGetAndroidHardwareBufferPropertiesANDROID",
        #[cfg(feature = "android")]
        get_memory_android_hardware_buffer_android => c"vkGetMemoryAndroidHardwareBufferANDROID",

        // VK_EXT_metal_objects
        #[cfg(feature = "metal")]
        export_metal_objects_ext => c"vkExportMetalObjectsEXT",
    }
}

impl LoaderFunctions {
    /// Populates a loader-tier table through `resolve`, typically a symbol
    /// lookup against the Vulkan library. Every slot is written; a name the
    /// resolver does not know is recorded as `None`.
    pub fn load<F>(resolve: F) -> Self
    where
        F: FnMut(&CStr) -> Option<FnVoidFunction>,
    {
        let table = Self::resolve(resolve);
        log_population!("loader", table);
        table
    }

    /// Populates the loader tier from a caller-owned Vulkan library. The
    /// library stays owned by the caller; this only looks symbols up in it.
    pub fn from_library(library: &libloading::Library) -> Self {
        Self::load(|name| unsafe {
            library
                .get::<FnVoidFunction>(name.to_bytes_with_nul())
                .map(|symbol| *symbol)
                .ok()
        })
    }
}

impl InstanceFunctions {
    /// Populates an instance-tier table for `instance` through the loader
    /// table's `vkGetInstanceProcAddr` slot.
    ///
    /// If that slot is unresolved, every slot of the result is `None`. The
    /// same holds slot-by-slot for anything the implementation does not
    /// provide for this instance.
    pub fn load(loader: &LoaderFunctions, instance: Instance) -> Self {
        let get_instance_proc_addr = loader.get_instance_proc_addr.map(|function| unsafe {
            transmute::<FnVoidFunction, FnGetInstanceProcAddr>(function)
        });
        let table = Self::resolve(|name| {
            get_instance_proc_addr
                .and_then(|get_instance_proc_addr| get_instance_proc_addr(instance, name.as_ptr()))
        });
        log_population!("instance", table);
        table
    }
}

impl DeviceFunctions {
    /// Populates a device-tier table for `device` through the instance
    /// table's `vkGetDeviceProcAddr` slot. Same unresolved-slot policy as
    /// [`InstanceFunctions::load`].
    pub fn load(instance_functions: &InstanceFunctions, device: Device) -> Self {
        let get_device_proc_addr = instance_functions.get_device_proc_addr.map(|function| unsafe {
            transmute::<FnVoidFunction, FnGetDeviceProcAddr>(function)
        });
        let table = Self::resolve(|name| {
            get_device_proc_addr
                .and_then(|get_device_proc_addr| get_device_proc_addr(device, name.as_ptr()))
        });
        log_population!("device", table);
        table
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::ffi::CStr;

    use super::*;

    fn names<F>(for_each_slot: F) -> Vec<&'static CStr>
    where
        F: FnOnce(&mut dyn FnMut(&'static CStr, Option<FnVoidFunction>)),
    {
        let mut names = Vec::new();
        for_each_slot(&mut |name, _| names.push(name));
        names
    }

    fn assert_well_formed(names: &[&'static CStr]) {
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        for name in names {
            assert!(name.to_str().unwrap().starts_with("vk"), "{name:?}");
        }
    }

    #[test]
    fn loader_names_well_formed() {
        let names = names(|f| LoaderFunctions::default().for_each_slot(f));
        assert_well_formed(&names);
        assert!(names.contains(&c"vkGetInstanceProcAddr"));
        assert!(names.contains(&c"vkCreateInstance"));
    }

    #[test]
    fn instance_names_well_formed() {
        let names = names(|f| InstanceFunctions::default().for_each_slot(f));
        assert_well_formed(&names);
        assert!(names.contains(&c"vkDestroyInstance"));
        assert!(names.contains(&c"vkGetDeviceProcAddr"));
    }

    #[test]
    fn device_names_well_formed() {
        let names = names(|f| DeviceFunctions::default().for_each_slot(f));
        assert_well_formed(&names);
        assert!(names.contains(&c"vkDestroyDevice"));
        assert!(names.contains(&c"vkQueueSubmit"));
    }

    #[test]
    fn default_tables_are_unresolved() {
        let table = DeviceFunctions::default();
        assert!(table.destroy_device.is_none());
        let unresolved = table.unresolved_names();
        let declared = names(|f| table.for_each_slot(f));
        assert_eq!(unresolved.len(), declared.len());
    }

    #[cfg(feature = "xcb")]
    #[test]
    fn xcb_surface_slots_declared() {
        let names = names(|f| InstanceFunctions::default().for_each_slot(f));
        assert!(names.contains(&c"vkCreateXcbSurfaceKHR"));
    }

    #[cfg(feature = "wayland")]
    #[test]
    fn wayland_surface_slots_declared() {
        let names = names(|f| InstanceFunctions::default().for_each_slot(f));
        assert!(names.contains(&c"vkCreateWaylandSurfaceKHR"));
    }

    #[cfg(not(feature = "win32"))]
    #[test]
    fn win32_slots_not_declared() {
        let instance_names = names(|f| InstanceFunctions::default().for_each_slot(f));
        assert!(!instance_names.contains(&c"vkCreateWin32SurfaceKHR"));
        let device_names = names(|f| DeviceFunctions::default().for_each_slot(f));
        assert!(!device_names.contains(&c"vkGetMemoryWin32HandleKHR"));
    }
}
