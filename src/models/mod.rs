pub mod traffic_log;

pub use traffic_log::TrafficLog;
