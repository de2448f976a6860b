// ── Resource-utilization fields ──

use uniflux_api::{SysStats, SystemStats};

use crate::point::{Fields, fields};

/// The nine load/memory/CPU fields shared by every device type's top-level point.
pub fn sys_stats_fields(sys: &SysStats, system: &SystemStats) -> Fields {
    fields! {
        "loadavg_1" => &sys.loadavg_1,
        "loadavg_5" => &sys.loadavg_5,
        "loadavg_15" => &sys.loadavg_15,
        "mem_used" => &sys.mem_used,
        "mem_buffer" => &sys.mem_buffer,
        "mem_total" => &sys.mem_total,
        "cpu" => &system.cpu,
        "mem" => &system.mem,
        "system_uptime" => &system.uptime,
    }
}
