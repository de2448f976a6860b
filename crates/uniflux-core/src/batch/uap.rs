// ── Access-point role ──

use uniflux_api::{ApStats, DeviceStatus, Radio, RadioStats};

use super::{PointBuilder, detail_tags, identity_tags, int};
use crate::merge::combine;
use crate::point::{FieldValue, Fields, Point, fields};
use crate::sink::Sink;
use crate::sysstats::sys_stats_fields;

/// Counter scopes reported by access points: all clients, users, guests.
const SCOPES: [&str; 3] = ["", "user-", "guest-"];

const COUNTERS: [&str; 11] = [
    "rx_packets",
    "rx_bytes",
    "rx_errors",
    "rx_dropped",
    "rx_crypts",
    "rx_frags",
    "tx_packets",
    "tx_bytes",
    "tx_errors",
    "tx_dropped",
    "tx_retries",
];

/// `stat_<scope><counter>` fields for every scope and counter.
pub fn ap_stat_fields(ap: &ApStats) -> Fields {
    SCOPES
        .iter()
        .flat_map(|scope| COUNTERS.iter().map(move |counter| format!("{scope}{counter}")))
        .map(|key| {
            let value = FieldValue::Float(ap.counter(&key));
            (format!("stat_{key}"), value)
        })
        .collect()
}

/// Device-level values written over the AP stat fields on every `uap` point.
pub fn ap_overlay_fields(s: &DeviceStatus) -> Fields {
    fields! {
        "ip" => &s.ip,
        "bytes" => &s.bytes,
        "last_seen" => &s.last_seen,
        "rx_bytes" => &s.rx_bytes,
        "tx_bytes" => &s.tx_bytes,
        "uptime" => &s.uptime,
        "state" => &s.state,
        "user-num_sta" => int(&s.user_num_sta),
        "guest-num_sta" => int(&s.guest_num_sta),
        "num_sta" => &s.num_sta,
    }
}

/// Write the device-level overlay onto extracted AP fields. Overlay keys
/// replace any same-named key already in `fields`.
pub fn with_ap_overlay(mut fields: Fields, s: &DeviceStatus) -> Fields {
    fields.extend(ap_overlay_fields(s));
    fields
}

impl PointBuilder {
    /// Stand-alone access point: `uap`, then radios and VAPs.
    ///
    /// Always emits the `uap` point; without a stat record the counters are
    /// zero.
    #[allow(clippy::unused_self)]
    pub fn batch_uap(&self, s: &DeviceStatus, sink: &mut dyn Sink) {
        let empty = ApStats::default();
        let ap = s.stat.access_point().unwrap_or(&empty);
        let sys = sys_stats_fields(&s.sys_stats, &s.system_stats);
        let fields = with_ap_overlay(combine(&[&ap_stat_fields(ap), &sys]), s);
        sink.send(Point::new("uap", identity_tags(s), fields));

        radios(s, sink);
        vaps(s, sink);
    }
}

/// Stats entry for a radio: same name first, then an unnamed entry at the
/// same position. Named entries only ever pair with their own radio.
fn paired_stats<'a>(stats: &'a [RadioStats], radio: &Radio, idx: usize) -> Option<&'a RadioStats> {
    stats
        .iter()
        .find(|st| !st.name.is_empty() && st.name == radio.name)
        .or_else(|| stats.get(idx).filter(|st| st.name.is_empty()))
}

/// One `uap_radios` point per radio-table entry.
pub(super) fn radios(s: &DeviceStatus, sink: &mut dyn Sink) {
    for (idx, radio) in s.radio_table.iter().enumerate() {
        let mut tags = detail_tags(s);
        tags.extend([
            ("channel".to_owned(), radio.channel.txt().to_owned()),
            ("radio".to_owned(), radio.radio.clone()),
        ]);

        let mut fields = fields! {
            "current_antenna_gain" => &radio.current_antenna_gain,
            "ht" => &radio.ht,
            "max_txpower" => &radio.max_txpower,
            "min_txpower" => &radio.min_txpower,
            "nss" => &radio.nss,
            "radio_caps" => &radio.radio_caps,
        };
        if let Some(st) = paired_stats(&s.radio_table_stats, radio, idx) {
            fields.extend(fields! {
                "ast_be_xmit" => &st.ast_be_xmit,
                "channel" => &st.channel,
                "cu_self_rx" => &st.cu_self_rx,
                "cu_self_tx" => &st.cu_self_tx,
                "cu_total" => &st.cu_total,
                "extchannel" => &st.extchannel,
                "gain" => &st.gain,
                "guest-num_sta" => &st.guest_num_sta,
                "num_sta" => &st.num_sta,
                "radio" => &st.radio,
                "tx_packets" => &st.tx_packets,
                "tx_power" => &st.tx_power,
                "tx_retries" => &st.tx_retries,
                "user-num_sta" => &st.user_num_sta,
            });
        }

        sink.send(Point::new("uap_radios", tags, fields));
    }
}

/// One `uap_vaps` point per virtual AP (SSID on a radio).
pub(super) fn vaps(s: &DeviceStatus, sink: &mut dyn Sink) {
    for vap in &s.vap_table {
        let mut tags = detail_tags(s);
        tags.extend([
            ("ap_mac".to_owned(), vap.ap_mac.clone()),
            ("bssid".to_owned(), vap.bssid.clone()),
            ("id".to_owned(), vap.id.clone()),
            ("name".to_owned(), vap.name.clone()),
            ("radio_name".to_owned(), vap.radio_name.clone()),
            ("radio".to_owned(), vap.radio.clone()),
            ("essid".to_owned(), vap.essid.clone()),
            ("site_id".to_owned(), vap.site_id.clone()),
            ("usage".to_owned(), vap.usage.clone()),
            ("state".to_owned(), vap.state.clone()),
            ("is_guest".to_owned(), vap.is_guest.txt().to_owned()),
        ]);

        let tx_tcp = &vap.tx_tcp_stats;
        let rx_tcp = &vap.rx_tcp_stats;
        let latency = &vap.wifi_tx_latency_mov;
        let fields = fields! {
            "ccq" => &vap.ccq,
            "mac_filter_rejections" => &vap.mac_filter_rejections,
            "num_satisfaction_sta" => &vap.num_satisfaction_sta,
            "avg_client_signal" => &vap.avg_client_signal,
            "satisfaction" => &vap.satisfaction,
            "satisfaction_now" => &vap.satisfaction_now,
            "anomalies" => &vap.anomalies,
            "channel" => &vap.channel,
            "rx_bytes" => &vap.rx_bytes,
            "rx_crypts" => &vap.rx_crypts,
            "rx_dropped" => &vap.rx_dropped,
            "rx_errors" => &vap.rx_errors,
            "rx_frags" => &vap.rx_frags,
            "rx_nwids" => &vap.rx_nwids,
            "rx_packets" => &vap.rx_packets,
            "tx_bytes" => &vap.tx_bytes,
            "tx_dropped" => &vap.tx_dropped,
            "tx_errors" => &vap.tx_errors,
            "tx_packets" => &vap.tx_packets,
            "tx_power" => &vap.tx_power,
            "tx_retries" => &vap.tx_retries,
            "tx_combined_retries" => &vap.tx_combined_retries,
            "tx_data_mpdu_bytes" => &vap.tx_data_mpdu_bytes,
            "tx_rts_retries" => &vap.tx_rts_retries,
            "tx_success" => &vap.tx_success,
            "tx_total" => &vap.tx_total,
            "tx_tcp_goodbytes" => &tx_tcp.goodbytes,
            "tx_tcp_lat_avg" => &tx_tcp.lat_avg,
            "tx_tcp_lat_max" => &tx_tcp.lat_max,
            "tx_tcp_lat_min" => &tx_tcp.lat_min,
            "rx_tcp_goodbytes" => &rx_tcp.goodbytes,
            "rx_tcp_lat_avg" => &rx_tcp.lat_avg,
            "rx_tcp_lat_max" => &rx_tcp.lat_max,
            "rx_tcp_lat_min" => &rx_tcp.lat_min,
            "wifi_tx_latency_mov_avg" => &latency.avg,
            "wifi_tx_latency_mov_max" => &latency.max,
            "wifi_tx_latency_mov_min" => &latency.min,
            "wifi_tx_latency_mov_total" => &latency.total,
            "wifi_tx_latency_mov_total_count" => &latency.total_count,
        };

        sink.send(Point::new("uap_vaps", tags, fields));
    }
}
