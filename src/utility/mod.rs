pub mod ip_detector;
pub mod rotator;
pub mod throttle;
