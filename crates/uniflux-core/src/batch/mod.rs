// ── Point builders ──
//
// One builder per device role. Each reads a `DeviceStatus`, composes tag and
// field maps, and hands finished points to the caller's sink. The combo
// (UDM) builder reuses the per-role field extractors and detail builders, so
// a gateway's `usg_networks` point looks the same whether it came from a USG
// or a Dream Machine.
//
// Builders are split across files by role:
//   - `usg.rs`  gateway point, network table, WAN uplinks
//   - `usw.rs`  switch point, port table
//   - `uap.rs`  access-point point, radios, virtual APs
//   - `udm.rs`  combo device emitting all three roles

mod uap;
mod udm;
mod usg;
mod usw;

use std::fmt;

use tracing::debug;

use uniflux_api::{DeviceStatus, FlexInt};

use crate::point::{Tags, tags};
use crate::sink::Sink;

pub use uap::{ap_overlay_fields, ap_stat_fields, with_ap_overlay};
pub use usg::gateway_fields;
pub use usw::{switch_base_fields, switch_stat_fields};

// ── Device kinds ─────────────────────────────────────────────────────

/// The device roles the builders understand, keyed by the record's `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Gateway,
    Switch,
    AccessPoint,
    DreamMachine,
}

impl DeviceKind {
    /// Map a controller `type` string. Unknown types yield `None`.
    pub fn from_type(device_type: &str) -> Option<Self> {
        match device_type {
            "ugw" | "usg" => Some(Self::Gateway),
            "usw" => Some(Self::Switch),
            "uap" => Some(Self::AccessPoint),
            "udm" => Some(Self::DreamMachine),
            _ => None,
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gateway => "gateway",
            Self::Switch => "switch",
            Self::AccessPoint => "access point",
            Self::DreamMachine => "dream machine",
        })
    }
}

// ── Builder ──────────────────────────────────────────────────────────

/// Knobs that change which detail points are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuilderOptions {
    /// Emit switch ports that are down or disabled too.
    pub dead_ports: bool,
}

/// Turns device records into points.
///
/// Stateless apart from its options; every call reads only its arguments
/// and writes only to the sink it is given.
#[derive(Debug, Clone, Default)]
pub struct PointBuilder {
    opts: BuilderOptions,
}

impl PointBuilder {
    pub fn new(opts: BuilderOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> BuilderOptions {
        self.opts
    }

    /// Route one record to the builder for its type.
    ///
    /// Returns the kind that handled it, or `None` when the type is not one
    /// the builders know (nothing is emitted in that case).
    pub fn batch_device(&self, device: &DeviceStatus, sink: &mut dyn Sink) -> Option<DeviceKind> {
        let Some(kind) = DeviceKind::from_type(&device.device_type) else {
            debug!(
                mac = %device.mac,
                device_type = %device.device_type,
                "skipping unsupported device type"
            );
            return None;
        };

        debug!(mac = %device.mac, name = %device.name, %kind, "building points");
        match kind {
            DeviceKind::Gateway => self.batch_usg(device, sink),
            DeviceKind::Switch => self.batch_usw(device, sink),
            DeviceKind::AccessPoint => self.batch_uap(device, sink),
            DeviceKind::DreamMachine => self.batch_udm(device, sink),
        }
        Some(kind)
    }

    /// Run [`batch_device`](Self::batch_device) over a slice, returning how
    /// many records were handled.
    pub fn batch_devices(&self, devices: &[DeviceStatus], sink: &mut dyn Sink) -> usize {
        devices
            .iter()
            .filter_map(|d| self.batch_device(d, sink))
            .count()
    }
}

// ── Shared tag sets ──────────────────────────────────────────────────

/// Tags identifying the device on every top-level point. Built fresh per
/// point so no two points share a map.
pub fn identity_tags(device: &DeviceStatus) -> Tags {
    tags! {
        "mac" => &device.mac,
        "site_name" => &device.site_name,
        "name" => &device.name,
        "version" => &device.version,
        "model" => &device.model,
        "serial" => &device.serial,
        "type" => &device.device_type,
    }
}

/// Leading tags on every detail point (ports, networks, radios...).
fn detail_tags(device: &DeviceStatus) -> Tags {
    tags! {
        "device_name" => &device.name,
        "site_name" => &device.site_name,
    }
}

/// Client counts go out as integers.
#[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
fn int(value: &FlexInt) -> i64 {
    value.val() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_kinds_from_type() {
        assert_eq!(DeviceKind::from_type("ugw"), Some(DeviceKind::Gateway));
        assert_eq!(DeviceKind::from_type("usg"), Some(DeviceKind::Gateway));
        assert_eq!(DeviceKind::from_type("udm"), Some(DeviceKind::DreamMachine));
        assert_eq!(DeviceKind::from_type("uxg"), None);
        assert_eq!(DeviceKind::from_type(""), None);
    }

    #[test]
    fn unknown_type_emits_nothing() {
        let device = DeviceStatus {
            device_type: "uph".into(),
            ..DeviceStatus::default()
        };
        let mut points = Vec::new();
        assert_eq!(PointBuilder::default().batch_device(&device, &mut points), None);
        assert!(points.is_empty());
    }

    #[test]
    fn batch_devices_counts_handled_records() {
        let devices = ["usw", "bogus", "uap"].map(|t| DeviceStatus {
            device_type: t.into(),
            ..DeviceStatus::default()
        });
        let mut points = Vec::new();
        assert_eq!(PointBuilder::default().batch_devices(&devices, &mut points), 2);
        assert_eq!(
            points.iter().filter(|p| p.table == "usw" || p.table == "uap").count(),
            2
        );
    }

    #[test]
    fn identity_tags_cover_seven_keys() {
        let device = DeviceStatus {
            mac: "aa".into(),
            name: "gw".into(),
            device_type: "udm".into(),
            ..DeviceStatus::default()
        };
        let tags = identity_tags(&device);
        assert_eq!(tags.len(), 7);
        assert_eq!(tags["type"], "udm");
        assert_eq!(tags["serial"], "");
    }
}
