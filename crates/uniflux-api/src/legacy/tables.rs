// Per-interface tables nested inside a device record
//
// Network, WAN, switch-port, radio and virtual-AP entries. Same conventions
// as `models`: wire names via serde renames, everything defaulted.

use serde::{Deserialize, Serialize};

use crate::flex::{FlexBool, FlexInt, null_as_empty};

// ── Gateway ──────────────────────────────────────────────────────────

/// One `network_table` entry (a LAN/VLAN served by a gateway).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkEntry {
    #[serde(rename = "_id", deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub ip: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub mac: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub domain_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub purpose: String,
    pub is_guest: FlexBool,
    pub up: FlexBool,
    pub enabled: FlexBool,
    pub num_sta: FlexInt,
    pub rx_bytes: FlexInt,
    pub rx_packets: FlexInt,
    pub tx_bytes: FlexInt,
    pub tx_packets: FlexInt,
}

/// A `wan1` / `wan2` uplink interface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Wan {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub ip: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub mac: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub ifname: String,
    #[serde(rename = "type", deserialize_with = "null_as_empty")]
    pub wan_type: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub gateway: String,
    pub up: FlexBool,
    pub enable: FlexBool,
    pub full_duplex: FlexBool,
    pub max_speed: FlexInt,
    pub speed: FlexInt,
    #[serde(rename = "bytes-r")]
    pub bytes_r: FlexInt,
    pub rx_bytes: FlexInt,
    #[serde(rename = "rx_bytes-r")]
    pub rx_bytes_r: FlexInt,
    pub rx_dropped: FlexInt,
    pub rx_errors: FlexInt,
    pub rx_broadcast: FlexInt,
    pub rx_multicast: FlexInt,
    pub rx_packets: FlexInt,
    pub tx_bytes: FlexInt,
    #[serde(rename = "tx_bytes-r")]
    pub tx_bytes_r: FlexInt,
    pub tx_dropped: FlexInt,
    pub tx_errors: FlexInt,
    pub tx_packets: FlexInt,
}

// ── Switch ───────────────────────────────────────────────────────────

/// One `port_table` entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Port {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub media: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub poe_mode: String,
    pub port_idx: FlexInt,
    pub port_poe: FlexBool,
    pub poe_enable: FlexBool,
    pub poe_current: FlexInt,
    pub poe_power: FlexInt,
    pub poe_voltage: FlexInt,
    pub flowctrl_rx: FlexBool,
    pub flowctrl_tx: FlexBool,
    pub up: FlexBool,
    pub enable: FlexBool,
    pub speed: FlexInt,
    pub stp_pathcost: FlexInt,
    #[serde(rename = "bytes-r")]
    pub bytes_r: FlexInt,
    pub rx_broadcast: FlexInt,
    pub rx_bytes: FlexInt,
    #[serde(rename = "rx_bytes-r")]
    pub rx_bytes_r: FlexInt,
    pub rx_dropped: FlexInt,
    pub rx_errors: FlexInt,
    pub rx_multicast: FlexInt,
    pub rx_packets: FlexInt,
    pub tx_broadcast: FlexInt,
    pub tx_bytes: FlexInt,
    #[serde(rename = "tx_bytes-r")]
    pub tx_bytes_r: FlexInt,
    pub tx_dropped: FlexInt,
    pub tx_errors: FlexInt,
    pub tx_multicast: FlexInt,
    pub tx_packets: FlexInt,
}

impl Port {
    /// Whether the port is linked and administratively enabled.
    pub fn is_active(&self) -> bool {
        self.up.val() && self.enable.val()
    }

    /// Whether PoE is both supported on the port and switched on.
    pub fn poe_active(&self) -> bool {
        self.port_poe.val() && self.poe_enable.val()
    }
}

// ── Access point ─────────────────────────────────────────────────────

/// One `radio_table` entry: static radio configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Radio {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub radio: String,
    pub channel: FlexInt,
    pub ht: FlexInt,
    pub current_antenna_gain: FlexInt,
    pub max_txpower: FlexInt,
    pub min_txpower: FlexInt,
    pub nss: FlexInt,
    pub radio_caps: FlexInt,
}

/// One `radio_table_stats` entry: live radio counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RadioStats {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub radio: String,
    pub ast_be_xmit: FlexInt,
    pub channel: FlexInt,
    pub cu_self_rx: FlexInt,
    pub cu_self_tx: FlexInt,
    pub cu_total: FlexInt,
    pub extchannel: FlexInt,
    pub gain: FlexInt,
    #[serde(rename = "guest-num_sta")]
    pub guest_num_sta: FlexInt,
    pub num_sta: FlexInt,
    #[serde(rename = "user-num_sta")]
    pub user_num_sta: FlexInt,
    pub tx_packets: FlexInt,
    pub tx_power: FlexInt,
    pub tx_retries: FlexInt,
}

/// TCP goodput and latency for one direction of a VAP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TcpStats {
    pub goodbytes: FlexInt,
    pub lat_avg: FlexInt,
    pub lat_max: FlexInt,
    pub lat_min: FlexInt,
}

/// Moving-window Wi-Fi transmit latency.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyStats {
    pub avg: FlexInt,
    pub max: FlexInt,
    pub min: FlexInt,
    pub total: FlexInt,
    pub total_count: FlexInt,
}

/// One `vap_table` entry: a broadcast SSID on one radio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Vap {
    #[serde(deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub ap_mac: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub bssid: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub essid: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub radio: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub radio_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub site_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub usage: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub state: String,
    pub is_guest: FlexBool,
    pub ccq: FlexInt,
    pub mac_filter_rejections: FlexInt,
    pub num_satisfaction_sta: FlexInt,
    pub avg_client_signal: FlexInt,
    pub satisfaction: FlexInt,
    pub satisfaction_now: FlexInt,
    pub anomalies: FlexInt,
    pub channel: FlexInt,
    pub rx_bytes: FlexInt,
    pub rx_crypts: FlexInt,
    pub rx_dropped: FlexInt,
    pub rx_errors: FlexInt,
    pub rx_frags: FlexInt,
    pub rx_nwids: FlexInt,
    pub rx_packets: FlexInt,
    pub tx_bytes: FlexInt,
    pub tx_dropped: FlexInt,
    pub tx_errors: FlexInt,
    pub tx_packets: FlexInt,
    pub tx_power: FlexInt,
    pub tx_retries: FlexInt,
    pub tx_combined_retries: FlexInt,
    pub tx_data_mpdu_bytes: FlexInt,
    pub tx_rts_retries: FlexInt,
    pub tx_success: FlexInt,
    pub tx_total: FlexInt,
    pub tx_tcp_stats: TcpStats,
    pub rx_tcp_stats: TcpStats,
    pub wifi_tx_latency_mov: LatencyStats,
}
