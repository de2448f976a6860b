//! Point building for UniFi device telemetry.
//!
//! Takes the device records decoded by `uniflux-api` and turns them into
//! tagged time-series points:
//!
//! - **[`PointBuilder`]** dispatches each record on its `type` to a role
//!   builder (gateway, switch, access point) or, for Dream Machines, to the
//!   combo builder that emits all three roles from one record. Points are
//!   pushed to a caller-supplied [`Sink`] in emission order.
//!
//! - **[`Point`]** is a table name plus ordered tag and field maps. Field
//!   values are a closed [`FieldValue`] enum.
//!
//! - **[`merge::combine`]** and **[`sysstats::sys_stats_fields`]** are the
//!   two building blocks every role point is composed from.
//!
//! - **[`line_protocol`]** renders points as InfluxDB line protocol.

pub mod batch;
pub mod devices;
pub mod error;
pub mod line_protocol;
pub mod merge;
pub mod point;
pub mod sink;
pub mod sysstats;

// ── Primary re-exports ──────────────────────────────────────────────
pub use batch::{BuilderOptions, DeviceKind, PointBuilder, identity_tags};
pub use devices::{fill_site_name, parse_devices};
pub use error::{CoreError, EncodeError};
pub use point::{FieldValue, Fields, Point, Tags};
pub use sink::{Report, Sink};

// Input records, re-exported so consumers need only this crate.
pub use uniflux_api::{DeviceStatus, FlexBool, FlexInt};
