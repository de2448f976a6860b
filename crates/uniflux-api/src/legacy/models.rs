// Legacy API response types
//
// Models for the controller's `stat/device` records. All responses are
// wrapped in the `LegacyResponse<T>` envelope. Every field carries a serde
// default because the API is inconsistent about field presence across
// firmware versions and device types.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::flex::{FlexBool, FlexInt, null_as_empty};
use crate::legacy::tables::{NetworkEntry, Port, Radio, RadioStats, Vap, Wan};

// ── Response Envelope ────────────────────────────────────────────────

/// Standard UniFi legacy API response envelope.
///
/// ```json
/// { "meta": { "rc": "ok", "msg": "optional" }, "data": [...] }
/// ```
#[derive(Debug, Deserialize)]
pub struct LegacyResponse<T> {
    pub meta: Meta,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Metadata from the legacy envelope. `rc` == `"ok"` means success.
#[derive(Debug, Deserialize)]
pub struct Meta {
    pub rc: String,
    #[serde(default)]
    pub msg: Option<String>,
}

// ── Device ───────────────────────────────────────────────────────────

/// One device record from `stat/device`.
///
/// The same shape covers gateways (`ugw`), switches (`usw`), access points
/// (`uap`) and combo devices (`udm`); sections a device type doesn't report
/// are left at their defaults. `site_name` is not part of the controller's
/// payload and is filled in by whoever fetched the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceStatus {
    #[serde(rename = "_id", deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub mac: String,
    #[serde(rename = "type", deserialize_with = "null_as_empty")]
    pub device_type: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub site_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub site_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub model: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub serial: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub version: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub ip: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub license_state: String,
    pub adopted: FlexBool,
    /// 0=offline, 1=online, 2=pending, 4=upgrading, 5=provisioning
    pub state: FlexInt,
    pub bytes: FlexInt,
    pub rx_bytes: FlexInt,
    pub tx_bytes: FlexInt,
    pub uptime: FlexInt,
    pub last_seen: FlexInt,
    pub num_sta: FlexInt,
    #[serde(rename = "user-num_sta")]
    pub user_num_sta: FlexInt,
    #[serde(rename = "guest-num_sta")]
    pub guest_num_sta: FlexInt,
    pub num_desktop: FlexInt,
    pub num_handheld: FlexInt,
    pub num_mobile: FlexInt,
    pub fan_level: FlexInt,
    pub general_temperature: FlexInt,
    #[serde(rename = "speedtest-status")]
    pub speedtest_status: SpeedtestStatus,
    pub stat: DeviceStat,
    pub sys_stats: SysStats,
    #[serde(rename = "system-stats")]
    pub system_stats: SystemStats,
    pub network_table: Vec<NetworkEntry>,
    pub port_table: Vec<Port>,
    pub wan1: Option<Wan>,
    pub wan2: Option<Wan>,
    pub radio_table: Vec<Radio>,
    pub radio_table_stats: Vec<RadioStats>,
    pub vap_table: Vec<Vap>,
}

// ── Resource utilization ─────────────────────────────────────────────

/// `sys_stats`: load averages and memory, in the controller's units.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SysStats {
    pub loadavg_1: FlexInt,
    pub loadavg_5: FlexInt,
    pub loadavg_15: FlexInt,
    pub mem_buffer: FlexInt,
    pub mem_total: FlexInt,
    pub mem_used: FlexInt,
}

/// `system-stats`: CPU and memory percentages plus system uptime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemStats {
    pub cpu: FlexInt,
    pub mem: FlexInt,
    pub uptime: FlexInt,
}

/// `speedtest-status` as reported by gateways.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedtestStatus {
    pub latency: FlexInt,
    pub rundate: FlexInt,
    pub runtime: FlexInt,
    pub status_ping: FlexInt,
    pub xput_download: FlexInt,
    pub xput_upload: FlexInt,
}

// ── Role statistics ──────────────────────────────────────────────────

static EMPTY_GATEWAY: LazyLock<GatewayStats> = LazyLock::new(GatewayStats::default);
static EMPTY_SWITCH: LazyLock<SwitchStats> = LazyLock::new(SwitchStats::default);

/// The `stat` block: one optional sub-record per role the device plays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceStat {
    pub gw: Option<GatewayStats>,
    pub sw: Option<SwitchStats>,
    pub ap: Option<ApStats>,
}

impl DeviceStat {
    /// Gateway counters, or an all-zero record when the device reported none.
    pub fn gateway(&self) -> &GatewayStats {
        self.gw.as_ref().unwrap_or(&EMPTY_GATEWAY)
    }

    /// Switch counters, or an all-zero record when the device reported none.
    pub fn switch(&self) -> &SwitchStats {
        self.sw.as_ref().unwrap_or(&EMPTY_SWITCH)
    }

    /// Access-point counters. `None` means the device is not acting as an AP.
    pub fn access_point(&self) -> Option<&ApStats> {
        self.ap.as_ref()
    }
}

/// `stat.gw`: LAN-side gateway counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayStats {
    #[serde(rename = "lan-rx_bytes")]
    pub lan_rx_bytes: FlexInt,
    #[serde(rename = "lan-rx_packets")]
    pub lan_rx_packets: FlexInt,
    #[serde(rename = "lan-tx_bytes")]
    pub lan_tx_bytes: FlexInt,
    #[serde(rename = "lan-tx_packets")]
    pub lan_tx_packets: FlexInt,
}

/// `stat.sw`: aggregate switching counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchStats {
    pub bytes: FlexInt,
    pub rx_bytes: FlexInt,
    pub rx_crypts: FlexInt,
    pub rx_dropped: FlexInt,
    pub rx_errors: FlexInt,
    pub rx_frags: FlexInt,
    pub rx_packets: FlexInt,
    pub tx_bytes: FlexInt,
    pub tx_dropped: FlexInt,
    pub tx_errors: FlexInt,
    pub tx_packets: FlexInt,
    pub tx_retries: FlexInt,
}

/// `stat.ap`: wireless counters.
///
/// Access points report dozens of flat counters keyed by scope and radio
/// (`user-rx_packets`, `guest-tx_retries`, `user-wifi0-rx_bytes`, ...), so
/// they are kept as a map and read through [`ApStats::counter`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApStats {
    /// MAC of the reporting AP.
    #[serde(deserialize_with = "null_as_empty")]
    pub ap: String,
    /// Catch-all for the counters.
    #[serde(flatten)]
    pub counters: serde_json::Map<String, Value>,
}

impl ApStats {
    /// Read a counter by its wire name. Missing or non-numeric values are zero.
    pub fn counter(&self, key: &str) -> f64 {
        match self.counters.get(key) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_role_records_read_as_zero() {
        let stat = DeviceStat::default();
        assert_eq!(stat.gateway().lan_rx_bytes.val(), 0.0);
        assert_eq!(stat.switch().tx_retries.val(), 0.0);
        assert!(stat.access_point().is_none());
    }

    #[test]
    fn null_role_record_is_absent() {
        let stat: DeviceStat = serde_json::from_value(json!({ "ap": null })).unwrap();
        assert!(stat.access_point().is_none());
    }

    #[test]
    fn ap_counter_accepts_numbers_and_strings() {
        let ap: ApStats = serde_json::from_value(json!({
            "ap": "aa:bb:cc:dd:ee:ff",
            "rx_packets": 12,
            "user-rx_bytes": "3400",
            "o": "ap",
        }))
        .unwrap();
        assert_eq!(ap.ap, "aa:bb:cc:dd:ee:ff");
        assert_eq!(ap.counter("rx_packets"), 12.0);
        assert_eq!(ap.counter("user-rx_bytes"), 3400.0);
        assert_eq!(ap.counter("o"), 0.0);
        assert_eq!(ap.counter("missing"), 0.0);
    }

    #[test]
    fn device_uses_wire_names() {
        let device: DeviceStatus = serde_json::from_value(json!({
            "mac": "aa:bb:cc:dd:ee:ff",
            "type": "udm",
            "user-num_sta": 5,
            "system-stats": { "cpu": "12.5" },
            "sys_stats": { "loadavg_1": "0.40" },
            "speedtest-status": { "xput_download": 940.2 },
            "stat": { "gw": { "lan-rx_bytes": 77 } }
        }))
        .unwrap();
        assert_eq!(device.device_type, "udm");
        assert_eq!(device.user_num_sta.val(), 5.0);
        assert_eq!(device.system_stats.cpu.val(), 12.5);
        assert_eq!(device.sys_stats.loadavg_1.val(), 0.4);
        assert_eq!(device.speedtest_status.xput_download.val(), 940.2);
        assert_eq!(device.stat.gateway().lan_rx_bytes.val(), 77.0);
        assert!(device.stat.sw.is_none());
        assert!(device.wan1.is_none());
    }
}
