// uniflux-api: Typed device-status records from the UniFi controller's stat/device endpoint

pub mod error;
pub mod flex;
pub mod legacy;

pub use error::Error;
pub use flex::{FlexBool, FlexInt};
pub use legacy::devices::parse_devices;
pub use legacy::models::{
    ApStats, DeviceStat, DeviceStatus, GatewayStats, SpeedtestStatus, SwitchStats, SysStats,
    SystemStats,
};
pub use legacy::tables::{
    LatencyStats, NetworkEntry, Port, Radio, RadioStats, TcpStats, Vap, Wan,
};
