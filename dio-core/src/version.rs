//! Module identification and version information

/// Vendor id reported in diagnostics and version info
pub const DIO_VENDOR_ID: u16 = 1000;

/// Module id of the DIO driver
pub const DIO_MODULE_ID: u16 = 120;

/// Instance id (single driver instance per bank set)
pub const DIO_INSTANCE_ID: u8 = 0;

/// Software version
pub const DIO_SW_MAJOR_VERSION: u8 = 1;
pub const DIO_SW_MINOR_VERSION: u8 = 0;
pub const DIO_SW_PATCH_VERSION: u8 = 0;

/// Interface release the driver follows (4.0.3)
pub const DIO_AR_RELEASE_MAJOR_VERSION: u8 = 4;
pub const DIO_AR_RELEASE_MINOR_VERSION: u8 = 0;
pub const DIO_AR_RELEASE_PATCH_VERSION: u8 = 3;

/// Version record filled by `Dio::get_version_info`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VersionInfo {
    pub vendor_id: u16,
    pub module_id: u16,
    pub sw_major_version: u8,
    pub sw_minor_version: u8,
    pub sw_patch_version: u8,
}

impl VersionInfo {
    /// Version of this driver
    pub const CURRENT: VersionInfo = VersionInfo {
        vendor_id: DIO_VENDOR_ID,
        module_id: DIO_MODULE_ID,
        sw_major_version: DIO_SW_MAJOR_VERSION,
        sw_minor_version: DIO_SW_MINOR_VERSION,
        sw_patch_version: DIO_SW_PATCH_VERSION,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_version() {
        let info = VersionInfo::CURRENT;
        assert_eq!(info.vendor_id, 1000);
        assert_eq!(info.module_id, 120);
        assert_eq!(
            (info.sw_major_version, info.sw_minor_version, info.sw_patch_version),
            (1, 0, 0)
        );
    }
}
