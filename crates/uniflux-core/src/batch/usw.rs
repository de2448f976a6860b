// ── Switch role ──

use tracing::trace;

use uniflux_api::{DeviceStatus, SwitchStats};

use super::{PointBuilder, detail_tags, identity_tags};
use crate::merge::combine;
use crate::point::{Fields, Point, fields};
use crate::sink::Sink;
use crate::sysstats::sys_stats_fields;

/// The `stat_*` counters from a switch stat record.
///
/// `stat_rx_packets` carries the transmit packet count. Existing dashboards
/// are built on that series, so it stays.
pub fn switch_stat_fields(sw: &SwitchStats) -> Fields {
    fields! {
        "stat_bytes" => &sw.bytes,
        "stat_rx_bytes" => &sw.rx_bytes,
        "stat_rx_crypts" => &sw.rx_crypts,
        "stat_rx_dropped" => &sw.rx_dropped,
        "stat_rx_errors" => &sw.rx_errors,
        "stat_rx_frags" => &sw.rx_frags,
        "stat_rx_packets" => &sw.tx_packets,
        "stat_tx_bytes" => &sw.tx_bytes,
        "stat_tx_dropped" => &sw.tx_dropped,
        "stat_tx_errors" => &sw.tx_errors,
        "stat_tx_packets" => &sw.tx_packets,
        "stat_tx_retries" => &sw.tx_retries,
    }
}

/// Device-level counters on every `usw` point.
pub fn switch_base_fields(s: &DeviceStatus) -> Fields {
    fields! {
        "guest-num_sta" => &s.guest_num_sta,
        "ip" => &s.ip,
        "bytes" => &s.bytes,
        "last_seen" => &s.last_seen,
        "rx_bytes" => &s.rx_bytes,
        "tx_bytes" => &s.tx_bytes,
        "uptime" => &s.uptime,
        "state" => &s.state,
    }
}

impl PointBuilder {
    /// Stand-alone switch: `usw` (with system stats), then ports.
    pub fn batch_usw(&self, s: &DeviceStatus, sink: &mut dyn Sink) {
        let mut base = switch_base_fields(s);
        base.extend(fields! {
            "fan_level" => &s.fan_level,
            "general_temperature" => &s.general_temperature,
            "user-num_sta" => &s.user_num_sta,
        });
        let sys = sys_stats_fields(&s.sys_stats, &s.system_stats);
        let fields = combine(&[&switch_stat_fields(s.stat.switch()), &base, &sys]);
        sink.send(Point::new("usw", identity_tags(s), fields));

        self.port_table(s, sink);
    }

    /// One `usw_ports` point per active port, or per port with `dead_ports`.
    pub(super) fn port_table(&self, s: &DeviceStatus, sink: &mut dyn Sink) {
        for port in &s.port_table {
            if !self.opts.dead_ports && !port.is_active() {
                trace!(mac = %s.mac, port = %port.port_idx, "skipping inactive port");
                continue;
            }

            let mut tags = detail_tags(s);
            tags.extend([
                ("name".to_owned(), port.name.clone()),
                ("poe_mode".to_owned(), port.poe_mode.clone()),
                ("port_poe".to_owned(), port.port_poe.txt().to_owned()),
                ("port_idx".to_owned(), port.port_idx.txt().to_owned()),
                (
                    "port_id".to_owned(),
                    format!("{} Port {}", s.name, port.port_idx.txt()),
                ),
                ("poe_enable".to_owned(), port.poe_enable.txt().to_owned()),
                ("flowctrl_rx".to_owned(), port.flowctrl_rx.txt().to_owned()),
                ("flowctrl_tx".to_owned(), port.flowctrl_tx.txt().to_owned()),
                ("media".to_owned(), port.media.clone()),
            ]);

            let mut fields = fields! {
                "dbytes_r" => &port.bytes_r,
                "rx_broadcast" => &port.rx_broadcast,
                "rx_bytes" => &port.rx_bytes,
                "rx_bytes-r" => &port.rx_bytes_r,
                "rx_dropped" => &port.rx_dropped,
                "rx_errors" => &port.rx_errors,
                "rx_multicast" => &port.rx_multicast,
                "rx_packets" => &port.rx_packets,
                "speed" => &port.speed,
                "stp_pathcost" => &port.stp_pathcost,
                "tx_broadcast" => &port.tx_broadcast,
                "tx_bytes" => &port.tx_bytes,
                "tx_bytes-r" => &port.tx_bytes_r,
                "tx_dropped" => &port.tx_dropped,
                "tx_errors" => &port.tx_errors,
                "tx_multicast" => &port.tx_multicast,
                "tx_packets" => &port.tx_packets,
            };
            if port.poe_active() {
                fields.extend(fields! {
                    "poe_current" => &port.poe_current,
                    "poe_power" => &port.poe_power,
                    "poe_voltage" => &port.poe_voltage,
                });
            }

            sink.send(Point::new("usw_ports", tags, fields));
        }
    }
}
