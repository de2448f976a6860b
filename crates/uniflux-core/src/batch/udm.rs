// ── Combo device (Dream Machine) ──
//
// A UDM is a gateway, a switch and usually an access point in one box. It
// reports one record, from which three role points are built:
//
//   usg  gateway fields + system stats, then networks and WANs
//   usw  base counters + switch stat fields (no system stats), then ports
//   uap  AP stat fields with device counters written over them, then
//        radios and VAPs; only when the record carries `stat.ap`
//
// Every role point gets its own copy of the identity tags.

use tracing::debug;

use uniflux_api::DeviceStatus;

use super::{
    PointBuilder, ap_stat_fields, gateway_fields, identity_tags, switch_base_fields,
    switch_stat_fields, uap, usg, with_ap_overlay,
};
use crate::merge::combine;
use crate::point::Point;
use crate::sink::Sink;
use crate::sysstats::sys_stats_fields;

impl PointBuilder {
    /// Emit the gateway, switch and (when present) access-point points for
    /// a Dream Machine record, each followed by its detail points.
    pub fn batch_udm(&self, s: &DeviceStatus, sink: &mut dyn Sink) {
        let sys = sys_stats_fields(&s.sys_stats, &s.system_stats);

        let fields = combine(&[&gateway_fields(s), &sys]);
        sink.send(Point::new("usg", identity_tags(s), fields));
        usg::net_table(s, sink);
        usg::wans(s, sink);

        let fields = combine(&[&switch_base_fields(s), &switch_stat_fields(s.stat.switch())]);
        sink.send(Point::new("usw", identity_tags(s), fields));
        self.port_table(s, sink);

        let Some(ap) = s.stat.access_point() else {
            debug!(mac = %s.mac, "no AP stats on combo device, skipping uap");
            return;
        };
        let fields = with_ap_overlay(ap_stat_fields(ap), s);
        sink.send(Point::new("uap", identity_tags(s), fields));
        uap::radios(s, sink);
        uap::vaps(s, sink);
    }
}
