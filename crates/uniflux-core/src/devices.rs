// ── Device dump loading ──

use tracing::debug;

use uniflux_api::DeviceStatus;

use crate::error::CoreError;

/// Decode a `stat/device` dump (envelope, bare array, or single record).
pub fn parse_devices(body: &str) -> Result<Vec<DeviceStatus>, CoreError> {
    Ok(uniflux_api::parse_devices(body)?)
}

/// Fill `site_name` on records that lack it.
///
/// `stat/device` responses are per-site and do not repeat the site name on
/// each record, so it has to be supplied by the caller.
pub fn fill_site_name(devices: &mut [DeviceStatus], site_name: &str) {
    let mut filled = 0_usize;
    for device in devices.iter_mut().filter(|d| d.site_name.is_empty()) {
        device.site_name = site_name.to_owned();
        filled += 1;
    }
    if filled > 0 {
        debug!(filled, site_name, "filled missing site names");
    }
}
