// ── Gateway role ──

use tracing::trace;

use uniflux_api::DeviceStatus;

use super::{PointBuilder, detail_tags, identity_tags};
use crate::merge::combine;
use crate::point::{Fields, Point, fields};
use crate::sink::Sink;
use crate::sysstats::sys_stats_fields;

/// Gateway-role fields of the top-level `usg` point, minus system stats.
pub fn gateway_fields(s: &DeviceStatus) -> Fields {
    let gw = s.stat.gateway();
    let speedtest = &s.speedtest_status;
    fields! {
        "ip" => &s.ip,
        "bytes" => &s.bytes,
        "last_seen" => &s.last_seen,
        "license_state" => &s.license_state,
        "guest-num_sta" => &s.guest_num_sta,
        "rx_bytes" => &s.rx_bytes,
        "tx_bytes" => &s.tx_bytes,
        "uptime" => &s.uptime,
        "state" => &s.state,
        "user-num_sta" => &s.user_num_sta,
        "version" => &s.version,
        "num_desktop" => &s.num_desktop,
        "num_handheld" => &s.num_handheld,
        "num_mobile" => &s.num_mobile,
        "speedtest-status_latency" => &speedtest.latency,
        "speedtest-status_runtime" => &speedtest.runtime,
        "speedtest-status_ping" => &speedtest.status_ping,
        "speedtest-status_xput_download" => &speedtest.xput_download,
        "speedtest-status_xput_upload" => &speedtest.xput_upload,
        "lan-rx_bytes" => &gw.lan_rx_bytes,
        "lan-rx_packets" => &gw.lan_rx_packets,
        "lan-tx_bytes" => &gw.lan_tx_bytes,
        "lan-tx_packets" => &gw.lan_tx_packets,
    }
}

impl PointBuilder {
    /// Stand-alone security gateway: `usg`, then networks and WANs.
    #[allow(clippy::unused_self)]
    pub fn batch_usg(&self, s: &DeviceStatus, sink: &mut dyn Sink) {
        let sys = sys_stats_fields(&s.sys_stats, &s.system_stats);
        let fields = combine(&[&gateway_fields(s), &sys]);
        sink.send(Point::new("usg", identity_tags(s), fields));

        net_table(s, sink);
        wans(s, sink);
    }
}

/// One `usg_networks` point per served network.
pub(super) fn net_table(s: &DeviceStatus, sink: &mut dyn Sink) {
    for net in &s.network_table {
        let mut tags = detail_tags(s);
        tags.extend([
            ("up".to_owned(), net.up.txt().to_owned()),
            ("enabled".to_owned(), net.enabled.txt().to_owned()),
            ("ip".to_owned(), net.ip.clone()),
            ("mac".to_owned(), net.mac.clone()),
            ("name".to_owned(), net.name.clone()),
            ("domain_name".to_owned(), net.domain_name.clone()),
            ("purpose".to_owned(), net.purpose.clone()),
            ("is_guest".to_owned(), net.is_guest.txt().to_owned()),
        ]);
        let fields = fields! {
            "num_sta" => &net.num_sta,
            "rx_bytes" => &net.rx_bytes,
            "rx_packets" => &net.rx_packets,
            "tx_bytes" => &net.tx_bytes,
            "tx_packets" => &net.tx_packets,
        };
        sink.send(Point::new("usg_networks", tags, fields));
    }
}

/// One `usg_wan_ports` point per WAN slot that is present and up.
pub(super) fn wans(s: &DeviceStatus, sink: &mut dyn Sink) {
    for wan in [&s.wan1, &s.wan2].into_iter().flatten() {
        if !wan.up.val() {
            trace!(mac = %s.mac, ifname = %wan.ifname, "skipping down WAN");
            continue;
        }
        let mut tags = detail_tags(s);
        tags.extend([
            ("ip".to_owned(), wan.ip.clone()),
            ("purpose".to_owned(), wan.name.clone()),
            ("mac".to_owned(), wan.mac.clone()),
            ("ifname".to_owned(), wan.ifname.clone()),
            ("type".to_owned(), wan.wan_type.clone()),
            ("up".to_owned(), wan.up.txt().to_owned()),
            ("enabled".to_owned(), wan.enable.txt().to_owned()),
        ]);
        let fields = fields! {
            "bytes-r" => &wan.bytes_r,
            "full_duplex" => &wan.full_duplex,
            "gateway" => &wan.gateway,
            "max_speed" => &wan.max_speed,
            "rx_bytes" => &wan.rx_bytes,
            "rx_bytes-r" => &wan.rx_bytes_r,
            "rx_dropped" => &wan.rx_dropped,
            "rx_errors" => &wan.rx_errors,
            "rx_broadcast" => &wan.rx_broadcast,
            "rx_multicast" => &wan.rx_multicast,
            "rx_packets" => &wan.rx_packets,
            "speed" => &wan.speed,
            "tx_bytes" => &wan.tx_bytes,
            "tx_bytes-r" => &wan.tx_bytes_r,
            "tx_dropped" => &wan.tx_dropped,
            "tx_errors" => &wan.tx_errors,
            "tx_packets" => &wan.tx_packets,
        };
        sink.send(Point::new("usg_wan_ports", tags, fields));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::point::FieldValue;

    fn gateway(extra: serde_json::Value) -> DeviceStatus {
        let mut base = json!({
            "type": "ugw",
            "mac": "f0:9f:c2:00:00:01",
            "name": "gateway",
            "site_name": "default",
            "ip": "203.0.113.9",
            "system-stats": { "cpu": "4.5", "mem": "31.0", "uptime": "900" },
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), extra.as_object()) {
            base.extend(extra.clone());
        }
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn gateway_point_carries_sys_stats() {
        let mut points = Vec::new();
        PointBuilder::default().batch_usg(&gateway(json!({})), &mut points);

        assert_eq!(points.len(), 1);
        let usg = &points[0];
        assert_eq!(usg.table, "usg");
        assert_eq!(usg.fields.len(), 23 + 9);
        assert_eq!(usg.field("cpu"), Some(&FieldValue::Float(4.5)));
        assert_eq!(usg.field("ip"), Some(&FieldValue::Str("203.0.113.9".into())));
        assert_eq!(usg.tag("mac"), Some("f0:9f:c2:00:00:01"));
    }

    #[test]
    fn network_table_points() {
        let device = gateway(json!({
            "network_table": [
                { "name": "LAN", "purpose": "corporate", "up": "true", "num_sta": 12, "rx_bytes": "5000" },
                { "name": "Guest", "purpose": "guest", "is_guest": true }
            ]
        }));
        let mut points = Vec::new();
        PointBuilder::default().batch_usg(&device, &mut points);

        let nets: Vec<_> = points.iter().filter(|p| p.table == "usg_networks").collect();
        assert_eq!(nets.len(), 2);
        assert_eq!(nets[0].tag("device_name"), Some("gateway"));
        assert_eq!(nets[0].tag("up"), Some("true"));
        assert_eq!(nets[0].field("num_sta"), Some(&FieldValue::Float(12.0)));
        assert_eq!(nets[0].field("rx_bytes"), Some(&FieldValue::Float(5000.0)));
        assert_eq!(nets[1].tag("is_guest"), Some("true"));
        assert_eq!(nets[1].fields.len(), 5);
    }

    #[test]
    fn wan_slots_skip_absent_and_down() {
        let device = gateway(json!({
            "wan1": { "name": "wan", "ifname": "eth0", "up": true, "gateway": "203.0.113.1", "rx_bytes-r": 10 },
            "wan2": { "name": "wan2", "ifname": "eth1", "up": false }
        }));
        let mut points = Vec::new();
        PointBuilder::default().batch_usg(&device, &mut points);

        let wans: Vec<_> = points.iter().filter(|p| p.table == "usg_wan_ports").collect();
        assert_eq!(wans.len(), 1);
        assert_eq!(wans[0].tag("purpose"), Some("wan"));
        assert_eq!(wans[0].tag("ifname"), Some("eth0"));
        assert_eq!(wans[0].field("gateway"), Some(&FieldValue::Str("203.0.113.1".into())));
        assert_eq!(wans[0].field("rx_bytes-r"), Some(&FieldValue::Float(10.0)));
        assert_eq!(wans[0].field("full_duplex"), Some(&FieldValue::Bool(false)));

        let mut points = Vec::new();
        PointBuilder::default().batch_usg(&gateway(json!({})), &mut points);
        assert!(points.iter().all(|p| p.table != "usg_wan_ports"));
    }
}
